//! Prelude module: `collisioncore::prelude` re-exports all `satbox::collisioncore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use satbox::collisioncore::prelude::*;
//! ```
//!

// re-exports
pub use crate::collisioncore::colliders::*;
pub use crate::collisioncore::collisions::*;
pub use crate::collisioncore::scenes::*;
