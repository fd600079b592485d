//! `mathcore::transforms` submodule implements enums and functions which use transformation matrices to
//! perform translation and rotation operations on objects in three-dimensional space.
//!

use crate::mathcore::{
    floats::EPSILON,
    matrices::Matrix4x4,
    vectors::Vector3,
    Angle,
};
use serde::{Deserialize, Serialize};

/// [`Transform`] struct-like enum represents basic matrix transformations.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vector3,
    },

    /// Rotation operation rotates an object around given axis that goes through the origin.
    ///
    /// Axis does not need to be normalized beforehand.
    /// Rotation is counterclockwise when the axis points towards the observer
    /// (right-hand rule).
    ///
    Rotation {
        /// Axis around which object will be rotated.
        ///
        axis: Vector3,
        /// Angle for which object will be rotated.
        ///
        angle: Angle,
    },
}
impl Transform {
    /// Constructs corresponding transformation matrix by using values.
    ///
    /// Matrices are meant to be applied to column vectors (`matrix.apply_to(vector)` is `M · v`).
    ///
    /// Rotation axis is normalized internally; rotation around an axis with (near-)zero length
    /// degrades to the identity matrix.
    ///
    /// # Examples
    /// ### Translation
    /// ```rust
    /// # use satbox::mathcore::transforms::Transform;
    /// # use satbox::mathcore::matrices::Matrix4x4;
    /// # use satbox::mathcore::vectors::Vector3;
    /// let transform: Transform = Transform::Translation { vector: Vector3 { x: 2.0, y: 3.0, z: -1.0 } };
    /// let matrix: Matrix4x4 = transform.matrix();
    /// assert_eq!(matrix.as_array(),
    ///     [[1.0, 0.0, 0.0, 2.0],
    ///      [0.0, 1.0, 0.0, 3.0],
    ///      [0.0, 0.0, 1.0, -1.0],
    ///      [0.0, 0.0, 0.0, 1.0]]
    /// );
    /// let point: Vector3 = Vector3 { x: 0.0, y: 2.0, z: 0.0 };
    /// assert_eq!(matrix.apply_to(point), Vector3 { x: 2.0, y: 5.0, z: -1.0 });
    /// ```
    ///
    /// ### Rotation
    /// ```rust
    /// # use satbox::mathcore::transforms::Transform;
    /// # use satbox::mathcore::matrices::Matrix4x4;
    /// # use satbox::mathcore::vectors::Vector3;
    /// # use satbox::mathcore::floats::FloatOperations;
    /// # use satbox::mathcore::Angle;
    /// let transform: Transform = Transform::Rotation {
    ///     axis: Vector3 { x: 0.0, y: 0.0, z: 1.0 },
    ///     angle: Angle::DEG90,
    /// };
    /// let matrix: Matrix4x4 = transform.matrix().round_up_to(2);
    /// assert_eq!(matrix.as_array(),
    ///     [[0.0, -1.0, 0.0, 0.0],
    ///      [1.0, 0.0, 0.0, 0.0],
    ///      [0.0, 0.0, 1.0, 0.0],
    ///      [0.0, 0.0, 0.0, 1.0]]
    /// );
    /// let point: Vector3 = Vector3 { x: 0.0, y: 2.0, z: 0.0 };
    /// assert_eq!(matrix.apply_to(point), Vector3 { x: -2.0, y: 0.0, z: 0.0 });
    /// ```
    ///
    pub fn matrix(self) -> Matrix4x4 {
        let mut matrix: Matrix4x4 = Matrix4x4::identity();
        match self {
            Self::Translation { vector } => {
                matrix[0][3] = vector.x;
                matrix[1][3] = vector.y;
                matrix[2][3] = vector.z;
            }
            Self::Rotation { axis, angle } => {
                let sqr_length: f32 = axis.sqr_magnitude();
                if sqr_length < EPSILON {
                    return matrix;
                }
                let Vector3 { x, y, z } = axis / sqr_length.sqrt();

                let (sin, cos): (f32, f32) = angle.sin_cos();
                let t: f32 = 1.0 - cos;

                matrix[0][0] = t * x * x + cos;
                matrix[0][1] = t * x * y - sin * z;
                matrix[0][2] = t * x * z + sin * y;
                matrix[1][0] = t * x * y + sin * z;
                matrix[1][1] = t * y * y + cos;
                matrix[1][2] = t * y * z - sin * x;
                matrix[2][0] = t * x * z - sin * y;
                matrix[2][1] = t * y * z + sin * x;
                matrix[2][2] = t * z * z + cos;
            }
        };
        matrix
    }

    /// Combines given transforms by using dot product.
    ///
    /// This function automatically reverses the order, so if you need to combine transforms `A -> B -> C`
    /// just pass them in that order (matrices multiplication will be performed in order `C * B * A`).
    ///
    /// # Example
    /// ```rust
    /// # use satbox::mathcore::{Angle, floats::FloatOperations, vectors::Vector3, transforms::Transform, matrices::Matrix4x4};
    /// let rotation: Transform = Transform::Rotation {
    ///     axis: Vector3 { x: 0.0, y: 0.0, z: 1.0 },
    ///     angle: Angle::DEG90,
    /// };
    /// let translation: Transform = Transform::Translation { vector: Vector3 { x: 3.0, y: 2.0, z: 0.0 } };
    /// let combined: Matrix4x4 = Transform::combine([rotation, translation].into_iter()).correct_to(0);
    /// // rotation is applied first, then translation
    /// assert_eq!(
    ///     combined.apply_to(Vector3 { x: 1.0, y: 0.0, z: 0.0 }),
    ///     Vector3 { x: 3.0, y: 3.0, z: 0.0 }
    /// );
    /// ```
    ///
    pub fn combine(transforms: impl DoubleEndedIterator<Item = Transform>) -> Matrix4x4 {
        transforms
            .rev()
            .fold(Matrix4x4::identity(), |acc, transform| {
                acc * transform.matrix()
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::mathcore::{
        floats::FloatOperations,
        matrices::Matrix4x4,
        vectors::Vector3,
        Angle,
    };

    #[test]
    fn translation() {
        use super::Transform;

        let transform: Transform = Transform::Translation {
            vector: Vector3::from([1.0, -2.0, 3.0]),
        };
        assert_eq!(
            transform.matrix().apply_to(Vector3::zero()),
            Vector3::from([1.0, -2.0, 3.0])
        );
    }

    #[test]
    fn rotation() {
        use super::Transform;

        // axis does not need to be pre-normalized
        let transform: Transform = Transform::Rotation {
            axis: Vector3::from([0.0, 2.0, 0.0]),
            angle: Angle::DEG90,
        };
        assert_eq!(
            transform.matrix().apply_to(Vector3::from([1.0, 0.0, 0.0])).correct_to(2),
            Vector3::from([0.0, 0.0, -1.0])
        );

        let full_turn: Matrix4x4 = Transform::Rotation {
            axis: Vector3::from([1.0, 1.0, 1.0]),
            angle: Angle::from_degrees(360.0),
        }
        .matrix();
        assert_eq!(full_turn.correct_to(2), Matrix4x4::identity());

        let degenerate: Matrix4x4 = Transform::Rotation {
            axis: Vector3::zero(),
            angle: Angle::DEG45,
        }
        .matrix();
        assert_eq!(degenerate, Matrix4x4::identity());
    }

    #[test]
    fn combine() {
        use super::Transform;

        let rotation: Transform = Transform::Rotation {
            axis: Vector3::from([0.0, 0.0, 1.0]),
            angle: Angle::DEG180,
        };
        let translation: Transform = Transform::Translation {
            vector: Vector3::from([5.0, 0.0, 0.0]),
        };

        // rotation first, then translation
        let combined: Matrix4x4 = Transform::combine([rotation, translation].into_iter());
        assert_eq!(
            combined.apply_to(Vector3::from([1.0, 0.0, 0.0])).correct_to(2),
            Vector3::from([4.0, 0.0, 0.0])
        );

        // opposite order is a different transform
        let reversed: Matrix4x4 = Transform::combine([translation, rotation].into_iter());
        assert_eq!(
            reversed.apply_to(Vector3::from([1.0, 0.0, 0.0])).correct_to(2),
            Vector3::from([-6.0, 0.0, 0.0])
        );
    }
}
