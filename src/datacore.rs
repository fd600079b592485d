//! `satbox::datacore` module provides traits that encapsulate saving and restoring of collision
//! data.
//!
//! It defines traits like [`FromFile`] and [`ToFile`] that are implemented on structs which are
//! either serializable or deserializable.
//! `satbox` serializes `Rust`-side data by using Concise Binary Object Representation format,
//! so collider setups and whole scenes can be written out and read back between sessions.
//!

use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Error, ErrorKind},
    path::Path,
};

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is an auto implementation on all types that implement `serde::Deserialize`.
///
/// # Example
/// ```rust, no_run
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::datacore::FromFile;
/// let collider: Collider = Collider::from_file("player.cbor")
///     .expect("File should contain a saved collider");
/// ```
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(filename)?;
        serde_cbor::from_reader(file)
            .map_err(|_| Error::new(ErrorKind::InvalidData, "Wrong data format"))
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is an auto implementation on all types that implement `serde::Serialize`.
///
/// # Example
/// ```rust, no_run
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::datacore::ToFile;
/// # use satbox::mathcore::vectors::Vector3;
/// let collider: Collider = Collider::from_extent(
///     Vector3 { x: -0.5, y: -0.5, z: -0.5 },
///     Vector3 { x: 0.5, y: 0.5, z: 0.5 },
/// );
/// collider.to_file("player.cbor").expect("File should be writable");
/// ```
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    /// This function fails if file creation or truncation fails or if data is not
    /// serializable by CBOR.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::create(filename)?;
        serde_cbor::to_writer(file, self)
            .map_err(|_| Error::new(ErrorKind::InvalidInput, "Wrong data format"))
    }
}

#[cfg(test)]
mod tests {
    use super::{FromFile, ToFile};
    use crate::collisioncore::{colliders::Collider, scenes::ColliderScene};
    use crate::mathcore::{vectors::Vector3, Angle};
    use std::{env, fs, path::PathBuf};

    /// Path for a temporary test file that does not clash between test binaries.
    ///
    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("satbox_{}_{}", std::process::id(), name))
    }

    #[test]
    fn collider_roundtrip() {
        let mut collider: Collider = Collider::from_extent(
            Vector3::from([-0.5, -0.5, -0.5]),
            Vector3::from([0.5, 0.5, 0.5]),
        );
        collider.set_rotation(Vector3::from([0.0, 1.0, 0.0]), Angle::DEG45);
        collider.set_translation(Vector3::from([1.0, 2.0, 3.0]));

        let path: PathBuf = temp_file("collider.cbor");
        collider.to_file(&path).expect("Temp file should be writable");
        let restored: Collider = Collider::from_file(&path).expect("Saved collider should load");
        let _ = fs::remove_file(&path);

        assert_eq!(restored, collider);
        assert_eq!(restored.global_vertices(), collider.global_vertices());
    }

    #[test]
    fn scene_roundtrip() {
        let cube: Collider = Collider::from_extent(
            Vector3::from([-1.0, -1.0, -1.0]),
            Vector3::from([1.0, 1.0, 1.0]),
        );
        let mut scene: ColliderScene = ColliderScene::new();
        let _ = scene.insert(cube);
        let second = scene.insert(cube);
        let _ = scene.remove(second);

        let path: PathBuf = temp_file("scene.cbor");
        scene.to_file(&path).expect("Temp file should be writable");
        let restored: ColliderScene =
            ColliderScene::from_file(&path).expect("Saved scene should load");
        let _ = fs::remove_file(&path);

        assert_eq!(restored, scene);
    }

    #[test]
    fn missing_file() {
        let path: PathBuf = temp_file("missing.cbor");
        assert!(Collider::from_file(&path).is_err());
    }
}
