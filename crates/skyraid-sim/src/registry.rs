//! Enemy registry: the ordered set of enemies the ship scans for collisions.
//!
//! Mutated by `world_setup::spawn_enemy` and `world_setup::destroy_enemy`,
//! and cleared by the engine when it resets the world.
//! Destruction is deferred to the cleanup system, so no scan ever sees an
//! enemy disappear mid-iteration.

use hecs::Entity;

#[derive(Debug, Clone, Default)]
pub struct EnemyRegistry {
    enemies: Vec<Entity>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enemy. Registering twice is a no-op.
    pub fn add(&mut self, enemy: Entity) {
        if !self.contains(enemy) {
            self.enemies.push(enemy);
        }
    }

    /// Deregister an enemy, keeping the order of the rest.
    /// Returns whether it was registered.
    pub fn remove(&mut self, enemy: Entity) -> bool {
        match self.enemies.iter().position(|&e| e == enemy) {
            Some(index) => {
                self.enemies.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, enemy: Entity) -> bool {
        self.enemies.contains(&enemy)
    }

    /// Registered enemies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.enemies.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}
