//! Camera focus. The renderer follows whatever entity is the target.

use hecs::{Entity, World};

use skyraid_core::types::Transform;

#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    target: Option<Entity>,
}

impl Camera {
    pub fn set_target(&mut self, target: Entity) {
        self.target = Some(target);
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Transform of the target, if it still exists.
    pub fn focus(&self, world: &World) -> Option<Transform> {
        let target = self.target?;
        world.get::<&Transform>(target).ok().map(|t| *t)
    }
}
