//! `satbox::collisioncore` module is a core that implements oriented bounding box collision
//! detection and resolution.
//!
//! # Prelude
//! `satbox::collisioncore` prelude can be imported with `use satbox::collisioncore::prelude::*`.
//!
//! # Model
//! A [`colliders::Collider`] is an axis-aligned box in its local space that carries separate
//! rotation and translation matrices and keeps its world-space vertices in sync with them.
//! Overlap of two colliders is decided with the separating axis theorem
//! ([`collisions::is_colliding`]), and an overlap can be resolved by the displacement along the
//! axis of least penetration ([`collisions::collision_correction`]).
//! A simulation that owns many colliders can keep them in a [`scenes::ColliderScene`] registry
//! and run those queries pairwise.
//!
//! The whole core is synchronous and allocation-free on the per-step query path: all buffers
//! involved are fixed-size arrays.
//!

// submodules
pub mod colliders;
pub mod collisions;
pub mod scenes;

// prelude
pub mod prelude;
