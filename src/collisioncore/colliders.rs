//! `collisioncore::colliders` submodule implements oriented bounding box colliders that can be
//! moved and rotated in three-dimensional space.
//!

use crate::mathcore::{
    matrices::Matrix4x4,
    transforms::Transform,
    vectors::{Point, Vector3, Vertex},
    Angle,
};
use serde::{Deserialize, Serialize};

/// Count of box corner vertices.
///
pub const COLLIDER_VERTEX_COUNT: usize = 8;

/// [`Collider`] struct represents an oriented bounding box.
///
/// In local (model) space a collider is an axis-aligned box that is described by 8 corner
/// vertices. Rotation and translation are stored as separate matrices, and vertex positions in
/// global (world) space are kept in sync with them: every mutation of the pose recomputes all
/// global vertices before returning.
///
/// The combined transform always applies rotation first (about the local origin) and
/// translation second. Composing them the other way around would rotate the box about the
/// translated origin, which is a different operation that this type does not provide.
///
/// # Examples
/// ### Initialization
/// ```rust
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::mathcore::vectors::{Vector3, Vertex};
/// let collider: Collider = Collider::from_extent(
///     Vector3 { x: -1.0, y: -1.0, z: -1.0 },
///     Vector3 { x: 1.0, y: 1.0, z: 1.0 },
/// );
/// assert_eq!(collider.global_vertices(), collider.local_vertices());
/// assert_eq!(collider.local_vertices()[0], Vertex { x: -1.0, y: -1.0, z: -1.0 });
/// assert_eq!(collider.local_vertices()[7], Vertex { x: 1.0, y: 1.0, z: 1.0 });
/// ```
///
/// ### Movement
/// ```rust
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::mathcore::vectors::{Point, Vector3};
/// let mut collider: Collider = Collider::from_extent(
///     Vector3 { x: -1.0, y: -1.0, z: -1.0 },
///     Vector3 { x: 1.0, y: 1.0, z: 1.0 },
/// );
/// collider.set_translation(Vector3 { x: 2.0, y: 0.0, z: 0.0 });
/// collider.add_translation(Vector3 { x: 1.0, y: 1.0, z: 0.0 });
/// assert_eq!(collider.position(), Point { x: 3.0, y: 1.0, z: 0.0 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Collider {
    /// Vertex positions in local (model) space.
    ///
    local_vertices: [Vertex; COLLIDER_VERTEX_COUNT],

    /// Vertex positions in global (world) space.
    ///
    global_vertices: [Vertex; COLLIDER_VERTEX_COUNT],

    /// Rotation about origin in local space.
    ///
    rotation: Matrix4x4,
    /// Translation applied after rotation.
    ///
    translation: Matrix4x4,
}
impl Collider {
    /// Constructs collider from the min/max corner pair of an axis-aligned box in local space.
    ///
    /// The 8 corner vertices are enumerated as all combinations of min/max coordinates per axis,
    /// with the z coordinate varying fastest; that order is fixed for the lifetime of the
    /// collider. Rotation and translation are initialized with identity matrices.
    ///
    /// `min` does not have to precede `max` component-wise: a degenerate or inverted box is
    /// permitted and simply produces a correspondingly inverted geometry.
    ///
    pub fn from_extent(min: Vector3, max: Vector3) -> Self {
        let local_vertices: [Vertex; COLLIDER_VERTEX_COUNT] = [
            Vertex { x: min.x, y: min.y, z: min.z },
            Vertex { x: min.x, y: min.y, z: max.z },
            Vertex { x: min.x, y: max.y, z: min.z },
            Vertex { x: min.x, y: max.y, z: max.z },
            Vertex { x: max.x, y: min.y, z: min.z },
            Vertex { x: max.x, y: min.y, z: max.z },
            Vertex { x: max.x, y: max.y, z: min.z },
            Vertex { x: max.x, y: max.y, z: max.z },
        ];

        let mut collider: Collider = Collider {
            local_vertices,
            global_vertices: local_vertices,
            rotation: Matrix4x4::identity(),
            translation: Matrix4x4::identity(),
        };
        collider.update_global_vertices();
        collider
    }

    /// Applies the pose matrices to the local vertices to calculate vertex positions in global
    /// space.
    ///
    fn update_global_vertices(&mut self) {
        let matrix: Matrix4x4 = self.transform();
        for i in 0..COLLIDER_VERTEX_COUNT {
            self.global_vertices[i] = matrix.apply_to(self.local_vertices[i]);
        }
    }

    /// Overwrites collider rotation with rotation around given axis and updates global vertex
    /// positions.
    ///
    pub fn set_rotation(&mut self, axis: Vector3, angle: Angle) {
        self.rotation = Transform::Rotation { axis, angle }.matrix();
        self.update_global_vertices();
    }
    /// Composes rotation around given axis onto the current collider rotation (current rotation
    /// is applied first) and updates global vertex positions.
    ///
    pub fn add_rotation(&mut self, axis: Vector3, angle: Angle) {
        self.rotation = Transform::Rotation { axis, angle }.matrix() * self.rotation;
        self.update_global_vertices();
    }
    /// Overwrites collider translation and updates global vertex positions.
    ///
    pub fn set_translation(&mut self, position: Vector3) {
        self.translation = Transform::Translation { vector: position }.matrix();
        self.update_global_vertices();
    }
    /// Composes translation along given vector onto the current collider translation and updates
    /// global vertex positions.
    ///
    pub fn add_translation(&mut self, position: Vector3) {
        self.translation = Transform::Translation { vector: position }.matrix() * self.translation;
        self.update_global_vertices();
    }

    /// Returns collider rotation matrix.
    ///
    pub fn rotation(&self) -> Matrix4x4 {
        self.rotation
    }
    /// Returns collider translation matrix.
    ///
    pub fn translation(&self) -> Matrix4x4 {
        self.translation
    }
    /// Returns overall transform, first rotation then translation.
    ///
    /// This is a pure read with no side effects; an external renderer can use the returned
    /// matrix to place a visual representation at the collider's pose.
    ///
    pub fn transform(&self) -> Matrix4x4 {
        self.translation * self.rotation
    }
    /// Returns position of the collider origin in global space.
    ///
    pub fn position(&self) -> Point {
        self.translation.apply_to(Point::zero())
    }

    /// Returns shared slice with collider's vertices in local (model) space.
    ///
    pub fn local_vertices(&self) -> &[Vertex] {
        &self.local_vertices
    }
    /// Returns shared slice with collider's vertices in global (world) space.
    ///
    pub fn global_vertices(&self) -> &[Vertex] {
        &self.global_vertices
    }
}

#[cfg(test)]
mod tests {
    use crate::mathcore::{
        floats::FloatOperations,
        matrices::Matrix4x4,
        vectors::{Vector3, Vertex},
        Angle,
    };

    #[test]
    fn construction() {
        use super::Collider;

        let collider: Collider = Collider::from_extent(
            Vector3::from([-0.5, -1.0, -2.0]),
            Vector3::from([0.5, 1.0, 2.0]),
        );
        assert_eq!(
            collider.local_vertices(),
            [
                Vertex { x: -0.5, y: -1.0, z: -2.0 },
                Vertex { x: -0.5, y: -1.0, z: 2.0 },
                Vertex { x: -0.5, y: 1.0, z: -2.0 },
                Vertex { x: -0.5, y: 1.0, z: 2.0 },
                Vertex { x: 0.5, y: -1.0, z: -2.0 },
                Vertex { x: 0.5, y: -1.0, z: 2.0 },
                Vertex { x: 0.5, y: 1.0, z: -2.0 },
                Vertex { x: 0.5, y: 1.0, z: 2.0 },
            ]
        );
        assert_eq!(collider.global_vertices(), collider.local_vertices());
        assert_eq!(collider.rotation(), Matrix4x4::identity());
        assert_eq!(collider.translation(), Matrix4x4::identity());

        // inverted extents are not an error, geometry is simply inverted
        let inverted: Collider =
            Collider::from_extent(Vector3::from([1.0, 1.0, 1.0]), Vector3::from([-1.0, -1.0, -1.0]));
        assert_eq!(inverted.local_vertices()[0], Vertex { x: 1.0, y: 1.0, z: 1.0 });
        assert_eq!(inverted.local_vertices()[7], Vertex { x: -1.0, y: -1.0, z: -1.0 });
    }

    #[test]
    fn translation() {
        use super::Collider;

        let mut collider: Collider = Collider::from_extent(
            Vector3::from([-0.5, -0.5, -0.5]),
            Vector3::from([0.5, 0.5, 0.5]),
        );

        collider.set_translation(Vector3::from([1.0, 2.0, 3.0]));
        assert_eq!(collider.position(), Vector3::from([1.0, 2.0, 3.0]));
        assert_eq!(
            collider.global_vertices()[0],
            Vertex { x: 0.5, y: 1.5, z: 2.5 }
        );

        collider.add_translation(Vector3::from([1.0, 0.0, -1.0]));
        assert_eq!(collider.position(), Vector3::from([2.0, 2.0, 2.0]));

        // "set" overwrites accumulated history
        collider.set_translation(Vector3::from([0.0, 0.0, 0.0]));
        assert_eq!(collider.global_vertices(), collider.local_vertices());
    }

    #[test]
    fn rotation() {
        use super::Collider;

        let mut collider: Collider = Collider::from_extent(
            Vector3::from([-0.5, -0.5, -0.5]),
            Vector3::from([0.5, 0.5, 0.5]),
        );

        collider.set_rotation(Vector3::from([0.0, 1.0, 0.0]), Angle::DEG90);
        // (0.5, 0.5, 0.5) rotates into (0.5, 0.5, -0.5)
        assert_eq!(
            collider.global_vertices()[7].correct_to(2),
            Vertex { x: 0.5, y: 0.5, z: -0.5 }
        );

        // adding the opposite rotation around the same axis restores the pose
        collider.add_rotation(Vector3::from([0.0, 1.0, 0.0]), -Angle::DEG90);
        assert_eq!(collider.rotation().correct_to(2), Matrix4x4::identity());
        assert_eq!(
            collider.global_vertices()[7].correct_to(2),
            Vertex { x: 0.5, y: 0.5, z: 0.5 }
        );

        // "set" overwrites accumulated history
        collider.add_rotation(Vector3::from([1.0, 0.0, 0.0]), Angle::DEG45);
        collider.set_rotation(Vector3::from([0.0, 0.0, 1.0]), Angle::ZERO);
        assert_eq!(collider.rotation(), Matrix4x4::identity());
    }

    #[test]
    fn transform() {
        use super::Collider;

        let mut collider: Collider = Collider::from_extent(
            Vector3::from([-0.5, -0.5, -0.5]),
            Vector3::from([0.5, 0.5, 0.5]),
        );
        collider.set_rotation(Vector3::from([0.0, 1.0, 0.0]), Angle::DEG90);
        collider.set_translation(Vector3::from([10.0, 0.0, 0.0]));

        // rotation is applied before translation
        let transform: Matrix4x4 = collider.transform();
        assert_eq!(
            transform.apply_to(Vector3::from([0.5, 0.5, 0.5])).correct_to(2),
            Vector3::from([10.5, 0.5, -0.5])
        );
        assert_eq!(transform, collider.translation() * collider.rotation());

        // pure read: repeated calls return bit-identical matrices
        assert_eq!(collider.transform().as_array(), collider.transform().as_array());

        // global vertices always agree with the combined transform
        for (global, local) in collider
            .global_vertices()
            .iter()
            .zip(collider.local_vertices().iter())
        {
            assert_eq!(*global, transform.apply_to(*local));
        }
    }
}
