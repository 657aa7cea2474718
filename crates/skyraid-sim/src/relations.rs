//! Components linking entities to one another.
//!
//! These hold hecs handles, so they live here rather than in skyraid-core.

use hecs::Entity;

/// Attached to an enemy: the marker it exclusively owns.
#[derive(Debug, Clone, Copy)]
pub struct OwnedMarker {
    pub marker: Entity,
}

/// Attached to a marker: the enemy it indicates. Set once at creation and
/// used for lookup only.
#[derive(Debug, Clone, Copy)]
pub struct MarkerTarget {
    pub enemy: Entity,
}
