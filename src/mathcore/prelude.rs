//! Prelude module: `mathcore::prelude` re-exports all `satbox::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use satbox::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::floats::*;
pub use crate::mathcore::matrices::*;
pub use crate::mathcore::transforms::*;
pub use crate::mathcore::vectors::*;
pub use crate::mathcore::*;
