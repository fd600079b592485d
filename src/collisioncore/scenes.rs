//! `collisioncore::scenes` submodule implements a registry that owns a set of colliders and
//! runs pairwise queries over them.
//!
//! The registry is an explicit object that is passed by reference wherever it is needed,
//! so there is no process-wide collider state.
//!

use crate::collisioncore::{
    colliders::Collider,
    collisions::{collision_correction, is_colliding},
};
use crate::mathcore::vectors::Vector3;
use serde::{Deserialize, Serialize};

/// [`ColliderId`] is a handle to a collider stored in a [`ColliderScene`].
///
/// Handles stay valid for the lifetime of the scene: removing a collider does not shift or
/// reuse the handles of the remaining ones.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(usize);

/// [`ColliderScene`] struct provides API for a storage of [`Collider`]s.
///
/// Colliders are kept in insertion order, and all pairwise operations traverse them in that
/// order, so results are deterministic across runs.
///
/// # Example
/// ```rust
/// # use satbox::collisioncore::scenes::{ColliderId, ColliderScene};
/// # use satbox::collisioncore::colliders::Collider;
/// # use satbox::mathcore::vectors::Vector3;
/// let mut scene: ColliderScene = ColliderScene::new();
///
/// let floor: ColliderId = scene.insert(Collider::from_extent(
///     Vector3 { x: -50.0, y: -0.5, z: -50.0 },
///     Vector3 { x: 50.0, y: 0.5, z: 50.0 },
/// ));
/// let player: ColliderId = scene.insert(Collider::from_extent(
///     Vector3 { x: -0.5, y: -0.5, z: -0.5 },
///     Vector3 { x: 0.5, y: 0.5, z: 0.5 },
/// ));
/// assert_eq!(scene.len(), 2);
/// assert!(scene.collisions_with(player).contains(&floor));
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ColliderScene {
    /// Slots that store colliders. Removed slots are kept empty so that handles of the
    /// remaining colliders stay valid.
    ///
    colliders: Vec<Option<Collider>>,
}
impl ColliderScene {
    /// Initializes new [`ColliderScene`].
    ///
    /// Created [`ColliderScene`] will not allocate until first insertions.
    ///
    pub fn new() -> Self {
        ColliderScene {
            colliders: Vec::new(),
        }
    }

    /// Returns count of colliders in the scene.
    ///
    pub fn len(&self) -> usize {
        self.colliders.iter().filter(|slot| slot.is_some()).count()
    }
    /// Returns whether the scene contains no colliders.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Clears the scene, removing all colliders and invalidating all handles.
    ///
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// Inserts a collider into the scene and returns a handle to it.
    ///
    pub fn insert(&mut self, collider: Collider) -> ColliderId {
        self.colliders.push(Some(collider));
        ColliderId(self.colliders.len() - 1)
    }
    /// Removes the collider behind given handle and returns it if present.
    /// Otherwise, returns `None`.
    ///
    /// Handles of the remaining colliders stay valid.
    ///
    pub fn remove(&mut self, id: ColliderId) -> Option<Collider> {
        self.colliders.get_mut(id.0).and_then(|slot| slot.take())
    }
    /// Returns whether a collider behind given handle exists or not.
    ///
    pub fn contains(&self, id: ColliderId) -> bool {
        self.collider(id).is_some()
    }
    /// Gets a reference to the collider behind given handle if present.
    ///
    pub fn collider(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(id.0).and_then(|slot| slot.as_ref())
    }
    /// Gets a mutable reference to the collider behind given handle if present.
    ///
    pub fn collider_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Returns iterator over handles and colliders in insertion order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (ColliderId, &Collider)> {
        self.colliders
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|collider| (ColliderId(index), collider)))
    }

    /// Returns handles of all colliders that overlap the collider behind given handle,
    /// in insertion order.
    ///
    /// Returns an empty `Vec` if the handle is not present in the scene.
    ///
    pub fn collisions_with(&self, id: ColliderId) -> Vec<ColliderId> {
        let mut colliding: Vec<ColliderId> = Vec::new();
        if let Some(target) = self.collider(id) {
            for (other_id, other) in self.iter() {
                if other_id != id && is_colliding(target, other) {
                    colliding.push(other_id);
                }
            }
        }
        colliding
    }

    /// Resolves collisions of the collider behind given handle against every other collider in
    /// the scene and returns the total applied displacement.
    ///
    /// Corrections are computed and applied one at a time in insertion order, the same way a
    /// simulation loop would move a player collider out of each obstacle it overlaps. The order
    /// in which corrections are applied can change the result, which is why it is fixed.
    ///
    /// # Example
    /// ```rust
    /// # use satbox::collisioncore::scenes::{ColliderId, ColliderScene};
    /// # use satbox::collisioncore::colliders::Collider;
    /// # use satbox::mathcore::vectors::Vector3;
    /// let cube: Collider = Collider::from_extent(
    ///     Vector3 { x: -0.5, y: -0.5, z: -0.5 },
    ///     Vector3 { x: 0.5, y: 0.5, z: 0.5 },
    /// );
    ///
    /// let mut scene: ColliderScene = ColliderScene::new();
    /// let block: ColliderId = scene.insert(cube);
    /// let player: ColliderId = scene.insert({
    ///     let mut player: Collider = cube;
    ///     player.set_translation(Vector3 { x: 0.4, y: 0.0, z: 0.0 });
    ///     player
    /// });
    ///
    /// let moved: Vector3 = scene.resolve(player);
    /// assert_eq!(moved, Vector3 { x: 0.6, y: 0.0, z: 0.0 });
    /// // the player now rests against the block, nothing is left to resolve
    /// assert_eq!(scene.resolve(player), Vector3 { x: 0.0, y: 0.0, z: 0.0 });
    /// ```
    ///
    pub fn resolve(&mut self, id: ColliderId) -> Vector3 {
        let mut target: Collider = match self.colliders.get(id.0).copied().flatten() {
            Some(collider) => collider,
            None => return Vector3::zero(),
        };

        let mut moved: Vector3 = Vector3::zero();
        for (index, slot) in self.colliders.iter().enumerate() {
            if index == id.0 {
                continue;
            }
            if let Some(other) = slot {
                let correction: Vector3 = collision_correction(&target, other);
                target.add_translation(correction);
                moved += correction;
            }
        }

        self.colliders[id.0] = Some(target);
        moved
    }
}

#[cfg(test)]
mod tests {
    use crate::collisioncore::colliders::Collider;
    use crate::mathcore::vectors::Vector3;

    /// Unit cube with half-extent 0.5 translated to given position.
    ///
    fn cube_at(position: Vector3) -> Collider {
        let mut collider: Collider = Collider::from_extent(
            Vector3::from([-0.5, -0.5, -0.5]),
            Vector3::from([0.5, 0.5, 0.5]),
        );
        collider.set_translation(position);
        collider
    }

    #[test]
    fn storage() {
        use super::{ColliderId, ColliderScene};

        let mut scene: ColliderScene = ColliderScene::new();
        assert!(scene.is_empty());

        let first: ColliderId = scene.insert(cube_at(Vector3::zero()));
        let second: ColliderId = scene.insert(cube_at(Vector3::from([5.0, 0.0, 0.0])));
        assert_eq!(scene.len(), 2);
        assert!(scene.contains(first));

        // removal keeps remaining handles valid
        assert!(scene.remove(first).is_some());
        assert!(scene.remove(first).is_none());
        assert_eq!(scene.len(), 1);
        assert_eq!(
            scene.collider(second).map(Collider::position),
            Some(Vector3::from([5.0, 0.0, 0.0]))
        );

        let ids: Vec<ColliderId> = scene.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [second]);

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn collision_queries() {
        use super::{ColliderId, ColliderScene};

        let mut scene: ColliderScene = ColliderScene::new();
        let block: ColliderId = scene.insert(cube_at(Vector3::zero()));
        let far_block: ColliderId = scene.insert(cube_at(Vector3::from([10.0, 0.0, 0.0])));
        let player: ColliderId = scene.insert(cube_at(Vector3::from([0.4, 0.0, 0.0])));

        assert_eq!(scene.collisions_with(player), [block]);
        assert_eq!(scene.collisions_with(block), [player]);
        assert!(scene.collisions_with(far_block).is_empty());
    }

    #[test]
    fn resolution() {
        use super::{ColliderId, ColliderScene};

        let mut scene: ColliderScene = ColliderScene::new();
        let _block: ColliderId = scene.insert(cube_at(Vector3::zero()));
        let _far_block: ColliderId = scene.insert(cube_at(Vector3::from([10.0, 0.0, 0.0])));
        let player: ColliderId = scene.insert(cube_at(Vector3::from([0.4, 0.0, 0.0])));

        // the player is pushed out of the block along the axis of least overlap
        let moved: Vector3 = scene.resolve(player);
        assert_eq!(moved, Vector3::from([0.6, 0.0, 0.0]));
        assert_eq!(
            scene.collider(player).map(Collider::position),
            Some(Vector3::from([1.0, 0.0, 0.0]))
        );

        // the player now rests against the block, nothing is left to resolve
        assert_eq!(scene.resolve(player), Vector3::zero());
    }
}
