//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the ship, enemies with their markers, and the fire-and-forget
//! entities (missiles, explosions, camera anchors) with the right component
//! bundles.

use hecs::{Entity, World};
use log::debug;

use skyraid_core::components::*;
use skyraid_core::enums::LifeState;
use skyraid_core::types::{Aabb, Transform};
use skyraid_enemy_ai::deploy::deploy_transform;

use crate::config::{EnemyTuning, MissileTuning, ShipTuning};
use crate::registry::EnemyRegistry;
use crate::relations::{MarkerTarget, OwnedMarker};
use crate::systems::wave_spawner::EnemySpawn;

/// Spawn the player's ship at the origin, facing +Z, ready to fire.
pub fn spawn_ship(world: &mut World, tuning: &ShipTuning) -> Entity {
    let ship = Ship {
        rotating_left: false,
        rotating_right: false,
        was_rotating_left: false,
        was_rotating_right: false,
        shot_cooldown: 0.0,
        can_shoot: true,
        can_shot_time: tuning.can_shot_time,
        rot_speed: tuning.rot_speed,
        rot_tilt: tuning.rot_tilt,
        shot_rot_vertical: tuning.shot_rot_vertical,
    };

    world.spawn((
        ship,
        Transform::default(),
        Collider {
            object_box: Aabb::from_half_extents(tuning.half_extents),
        },
        LifeState::Active,
    ))
}

/// Spawn an enemy at its deployment angle together with the marker it owns,
/// and register it.
///
/// Spawn position and facing are computed once here; the position is also
/// frozen as the enemy's initial position.
pub fn spawn_enemy(
    world: &mut World,
    registry: &mut EnemyRegistry,
    spawn: &EnemySpawn,
    tuning: &EnemyTuning,
) -> Entity {
    let transform = deploy_transform(spawn.angle_deg, tuning.appear_distance);

    let enemy = Enemy {
        move_type: spawn.move_type,
        speed: spawn.speed.unwrap_or(tuning.speed),
        shake_width: spawn.shake_width.unwrap_or(tuning.shake_width),
        time_count: 0.0,
        wait_time: spawn.wait_time,
        initial_position: transform.position,
        happy_rot_speed: tuning.happy_rot_speed,
        deploy_angle_deg: spawn.angle_deg,
        arrived: false,
    };

    // The marker needs the enemy handle and vice versa.
    let marker = world.reserve_entity();
    let entity = world.spawn((
        enemy,
        transform,
        Collider {
            object_box: Aabb::from_half_extents(tuning.half_extents),
        },
        LifeState::Active,
        OwnedMarker { marker },
    ));
    world.spawn_at(
        marker,
        (Marker, MarkerTarget { enemy: entity }, LifeState::Active),
    );
    registry.add(entity);

    debug!(
        "enemy {:?} deployed at {:.1} deg ({:?}), marker {:?}",
        entity, spawn.angle_deg, spawn.move_type, marker
    );
    entity
}

/// Remove an enemy from the registry and the world, signalling its marker
/// `Dead`. The marker itself is left for the cleanup system to reap.
///
/// Returns the marker, if the enemy had one.
pub fn destroy_enemy(
    world: &mut World,
    registry: &mut EnemyRegistry,
    enemy: Entity,
) -> Option<Entity> {
    registry.remove(enemy);

    let marker = world.get::<&OwnedMarker>(enemy).ok().map(|owned| owned.marker);
    if let Some(marker) = marker {
        if let Ok(mut state) = world.get::<&mut LifeState>(marker) {
            *state = LifeState::Dead;
        }
    }

    let _ = world.despawn(enemy);
    debug!("enemy {:?} destroyed, marker {:?}", enemy, marker);
    marker
}

/// Spawn a missile with the given launch transform.
pub fn spawn_missile(world: &mut World, transform: Transform, tuning: &MissileTuning) -> Entity {
    world.spawn((
        Missile {
            speed: tuning.speed,
            remaining_secs: tuning.lifetime_secs,
        },
        transform,
        Collider {
            object_box: Aabb::from_half_extents(tuning.half_extents),
        },
        LifeState::Active,
    ))
}

/// Spawn an explosion effect.
pub fn spawn_bomb(world: &mut World, transform: Transform, lifetime_secs: f32) -> Entity {
    world.spawn((
        Bomb {
            remaining_secs: lifetime_secs,
        },
        transform,
        LifeState::Active,
    ))
}

/// Spawn a passive stand-in the camera can keep following.
pub fn spawn_camera_anchor(world: &mut World, transform: Transform) -> Entity {
    world.spawn((CameraAnchor, transform, LifeState::Active))
}
