//! `collisioncore::collisions` submodule implements collision detection and resolution for
//! collider pairs.
//!
//! Detection uses the separating axis theorem: two convex shapes are disjoint if and only if
//! there is an axis onto which their projections do not overlap. For a pair of boxes it is
//! enough to check the 3 face normals of each box and the 9 pairwise cross products of those
//! normals, 15 axes in total.
//!

use crate::collisioncore::colliders::Collider;
use crate::mathcore::{
    floats::EPSILON,
    vectors::Vector3,
};

/// Count of axes that have to be checked for a pair of box colliders
/// (3 face normals per box and 9 of their pairwise cross products).
///
pub const SEPARATING_AXIS_COUNT: usize = 15;

/// [`Projection`] struct represents the interval that a collider occupies on a test axis.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Minimum of scalar projections on the axis.
    ///
    pub min: f32,
    /// Maximum of scalar projections on the axis.
    ///
    pub max: f32,
}
impl Projection {
    /// Projects all global vertices of a collider onto given axis and returns the resulting
    /// interval.
    ///
    /// Every vertex is examined: the box is in general not axis-aligned relative to the test
    /// axis, so no corner can be ruled out in advance.
    ///
    /// # Example
    /// ```rust
    /// # use satbox::collisioncore::colliders::Collider;
    /// # use satbox::collisioncore::collisions::Projection;
    /// # use satbox::mathcore::vectors::Vector3;
    /// let collider: Collider = Collider::from_extent(
    ///     Vector3 { x: -0.5, y: -1.0, z: -0.5 },
    ///     Vector3 { x: 0.5, y: 1.0, z: 0.5 },
    /// );
    /// let projection: Projection = Projection::of(&collider, Vector3 { x: 0.0, y: 1.0, z: 0.0 });
    /// assert_eq!(projection, Projection { min: -1.0, max: 1.0 });
    /// ```
    ///
    pub fn of(collider: &Collider, axis: Vector3) -> Self {
        let (mut min, mut max): (f32, f32) = (f32::INFINITY, f32::NEG_INFINITY);
        for vertex in collider.global_vertices() {
            let projection: f32 = axis.dot_product(*vertex);
            (min, max) = (min.min(projection), max.max(projection));
        }
        Projection { min, max }
    }

    /// Returns whether two intervals overlap or not.
    ///
    /// Intervals are closed, so intervals that merely touch are considered overlapping.
    ///
    pub fn overlaps(&self, other: &Projection) -> bool {
        // if the min of one projection is greater than the max of the
        // other projection then the projections do not overlap
        self.min <= other.max && other.min <= self.max
    }

    /// Returns the signed amount of overlap between two intervals along the axis being checked,
    /// or 0.0 if the intervals do not overlap.
    ///
    /// The sign points from `other` towards `self`: adding the returned amount to `self`'s
    /// position along the axis moves it out of `other`.
    ///
    pub fn overlap(&self, other: &Projection) -> f32 {
        if self.min > other.max || other.min > self.max {
            return 0.0;
        }
        if self.min > other.min {
            other.max - self.min
        } else {
            other.min - self.max
        }
    }
}

/// Returns array of the test axes for a pair of colliders.
///
/// First 6 axes are the face normals of each collider (their local basis vectors rotated into
/// global space), last 9 are the normalized cross products of each pair of face normals in fixed
/// row-major order.
///
/// A cross product of (near-)parallel normals has (near-)zero length and cannot be normalized;
/// such an axis is replaced with the world X axis. The substitute is deterministic, so repeated
/// calls produce identical results. Parallelism is detected by comparing the squared length of
/// the cross product of two unit normals against [`EPSILON`].
///
pub fn separating_axes(a: &Collider, b: &Collider) -> [Vector3; SEPARATING_AXIS_COUNT] {
    let x: Vector3 = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
    let y: Vector3 = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
    let z: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 1.0 };

    let mut axes: [Vector3; SEPARATING_AXIS_COUNT] = [Vector3::zero(); SEPARATING_AXIS_COUNT];

    // rotation matrices carry no translation, so applying them to basis vectors
    // yields the rotated face normals
    axes[0] = a.rotation().apply_to(x);
    axes[1] = a.rotation().apply_to(y);
    axes[2] = a.rotation().apply_to(z);

    axes[3] = b.rotation().apply_to(x);
    axes[4] = b.rotation().apply_to(y);
    axes[5] = b.rotation().apply_to(z);

    let mut i: usize = 6;
    for j in 0..3 {
        for k in 3..6 {
            let cross: Vector3 = axes[j].cross_product(axes[k]);
            axes[i] = if cross.sqr_magnitude() < EPSILON {
                x
            } else {
                cross.normalized()
            };
            i += 1;
        }
    }
    axes
}

/// Returns whether two colliders overlap or not.
///
/// Implements the separating axis theorem: both colliders are projected onto each of the test
/// axes, and a single axis with disjoint projections proves that the colliders do not overlap
/// (early exit). If projections overlap on all axes, the colliders overlap.
///
/// # Example
/// ```rust
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::collisioncore::collisions::is_colliding;
/// # use satbox::mathcore::vectors::Vector3;
/// let a: Collider = Collider::from_extent(
///     Vector3 { x: -0.5, y: -0.5, z: -0.5 },
///     Vector3 { x: 0.5, y: 0.5, z: 0.5 },
/// );
/// let mut b: Collider = a;
/// b.set_translation(Vector3 { x: 0.4, y: 0.0, z: 0.0 });
/// assert!(is_colliding(&a, &b));
/// b.set_translation(Vector3 { x: 2.0, y: 0.0, z: 0.0 });
/// assert!(!is_colliding(&a, &b));
/// ```
///
pub fn is_colliding(a: &Collider, b: &Collider) -> bool {
    let axes: [Vector3; SEPARATING_AXIS_COUNT] = separating_axes(a, b);
    for axis in axes {
        let projection_a: Projection = Projection::of(a, axis);
        let projection_b: Projection = Projection::of(b, axis);
        if !projection_a.overlaps(&projection_b) {
            return false;
        }
    }
    true
}

/// Returns a displacement vector that, when added to the position of collider `a`, resolves the
/// collision with collider `b`.
///
/// The overlap of the two colliders is measured along every test axis and the axis with the
/// smallest overlap is picked (ties are broken by the first such axis in the fixed axis order),
/// so the returned displacement is the smallest one that separates the colliders. Each call
/// regenerates the axes and reprojects both colliders, so it is safe to call repeatedly
/// as colliders move.
///
/// If the returned vector is zero then the colliders do not overlap. An overlap whose depth is
/// exactly zero (colliders merely touching) yields the same zero vector, so callers cannot
/// distinguish it from the no-collision case.
///
/// # Example
/// ```rust
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::collisioncore::collisions::collision_correction;
/// # use satbox::mathcore::vectors::Vector3;
/// let a: Collider = Collider::from_extent(
///     Vector3 { x: -0.5, y: -0.5, z: -0.5 },
///     Vector3 { x: 0.5, y: 0.5, z: 0.5 },
/// );
/// let mut b: Collider = a;
/// b.set_translation(Vector3 { x: 0.4, y: 0.0, z: 0.0 });
/// assert_eq!(
///     collision_correction(&a, &b),
///     Vector3 { x: -0.6, y: 0.0, z: 0.0 }
/// );
/// ```
///
pub fn collision_correction(a: &Collider, b: &Collider) -> Vector3 {
    let mut min_overlap: f32 = f32::INFINITY;
    let mut direction: Vector3 = Vector3::zero();

    let axes: [Vector3; SEPARATING_AXIS_COUNT] = separating_axes(a, b);
    for axis in axes {
        let projection_a: Projection = Projection::of(a, axis);
        let projection_b: Projection = Projection::of(b, axis);

        let overlap: f32 = projection_a.overlap(&projection_b);
        if overlap == 0.0 {
            return Vector3::zero();
        }
        if overlap.abs() < min_overlap.abs() {
            min_overlap = overlap;
            direction = axis;
        }
    }

    direction * min_overlap
}
