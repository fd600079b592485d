//! `satbox::mathcore` module is a core that implements all math functionality for the collision
//! library.
//!
//! # Prelude
//! `satbox::mathcore` prelude can be imported with `use satbox::mathcore::prelude::*`.
//!
//! # Model
//! There are several very important constructs that are essential to collision detection.
//! Vectors usually represent directions and coordinates.
//! With that in mind, it's natural to implement transformations of objects as
//! matrices.
//! Colliders are represented by their vertices (vectors), so translation, rotation and other
//! transformations are easy to apply, and overlap of colliders is checked using geometry.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod floats;
pub mod matrices;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
