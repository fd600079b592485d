//! # SATBox
//!
//! **SATBox** - oriented bounding box collision library written in pure Rust that implements
//! separating axis theorem overlap tests and minimum-displacement collision resolution.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate serde;
extern crate serde_big_array;
extern crate serde_cbor;

// cores
pub mod collisioncore;
pub mod datacore;
pub mod mathcore;
