//! Ship systems: input handling, banking and reload, enemy collision.

use hecs::{Entity, World};
use log::{info, trace};

use skyraid_core::components::{Collider, Ship};
use skyraid_core::constants::MISSILE_SPAWN_OFFSET;
use skyraid_core::enums::LifeState;
use skyraid_core::events::GameEvent;
use skyraid_core::input::InputState;
use skyraid_core::types::Transform;

use crate::camera::Camera;
use crate::config::MissileTuning;
use crate::registry::EnemyRegistry;
use crate::systems::collision;
use crate::world_setup;

/// Apply one tick of input: yaw from the rotation keys, and a missile if
/// fire is held and the ship has reloaded. Returns the number of shots fired.
pub fn process_input(
    world: &mut World,
    input: &InputState,
    dt: f32,
    missile: &MissileTuning,
    events: &mut Vec<GameEvent>,
) -> u32 {
    // Collect shots in a buffer; spawning while the query is live would alias the world.
    let mut shots: Vec<Transform> = Vec::new();

    for (_entity, (ship, transform, state)) in
        world.query_mut::<(&mut Ship, &mut Transform, &LifeState)>()
    {
        if *state != LifeState::Active {
            continue;
        }

        ship.rotating_left = false;
        ship.rotating_right = false;
        if input.left {
            transform.rotation.y -= ship.rot_speed * dt;
            ship.rotating_left = true;
        }
        if input.right {
            transform.rotation.y += ship.rot_speed * dt;
            ship.rotating_right = true;
        }

        if input.fire && ship.can_shoot {
            ship.can_shoot = false;
            ship.shot_cooldown = 0.0;

            let mut rotation = transform.rotation;
            if input.up {
                rotation.x = -ship.shot_rot_vertical;
            }
            // Evaluated second: with both modifiers held, down wins.
            if input.down {
                rotation.x = ship.shot_rot_vertical;
            }
            let position = transform.position + MISSILE_SPAWN_OFFSET * transform.forward();
            shots.push(Transform::new(position, rotation));
        }
    }

    for shot in &shots {
        let entity = world_setup::spawn_missile(world, *shot, missile);
        trace!("missile {:?} fired from {:?}", entity, shot.position);
        events.push(GameEvent::ShotFired {
            position: shot.position,
            pitch: shot.rotation.x,
        });
    }
    shots.len() as u32
}

/// Bank into turns and count down the reload timer.
///
/// Roll is recomputed only on ticks where a rotation intent toggled.
pub fn update(world: &mut World, dt: f32) {
    for (_entity, (ship, transform, state)) in
        world.query_mut::<(&mut Ship, &mut Transform, &LifeState)>()
    {
        if *state != LifeState::Active {
            continue;
        }

        let left_changed = ship.rotating_left != ship.was_rotating_left;
        let right_changed = ship.rotating_right != ship.was_rotating_right;
        if left_changed || right_changed {
            let mut roll = 0.0;
            if ship.rotating_left {
                roll += ship.rot_tilt;
            }
            if ship.rotating_right {
                roll += -ship.rot_tilt;
            }
            transform.rotation.z = roll;
        }
        ship.was_rotating_left = ship.rotating_left;
        ship.was_rotating_right = ship.rotating_right;

        if !ship.can_shoot {
            ship.shot_cooldown += dt;
            if ship.shot_cooldown > ship.can_shot_time {
                ship.can_shoot = true;
                ship.shot_cooldown = 0.0;
            }
        }
    }
}

/// Destroy the ship on contact with any live enemy.
///
/// Enemies are scanned in registry order and the scan stops at the first
/// hit: the ship turns `Dead`, a camera anchor takes over as camera target
/// and an explosion is spawned at the ship's transform.
/// Returns whether a ship was destroyed.
pub fn late_update(
    world: &mut World,
    registry: &EnemyRegistry,
    camera: &mut Camera,
    bomb_lifetime_secs: f32,
    events: &mut Vec<GameEvent>,
) -> bool {
    let enemies = collision::live_enemy_boxes(world, registry);
    if enemies.is_empty() {
        return false;
    }

    let mut wrecks: Vec<(Entity, Transform, Entity)> = Vec::new();
    {
        let mut query = world.query::<(&Ship, &Transform, &Collider, &LifeState)>();
        for (entity, (_ship, transform, collider, state)) in query.iter() {
            if *state != LifeState::Active {
                continue;
            }
            let ship_box = collider.object_box.transformed(transform);
            if let Some(&(enemy, _)) = enemies.iter().find(|(_, b)| b.intersects(&ship_box)) {
                wrecks.push((entity, *transform, enemy));
            }
        }
    }

    for &(ship, transform, enemy) in &wrecks {
        let anchor = world_setup::spawn_camera_anchor(world, transform);
        camera.set_target(anchor);

        if let Ok(mut state) = world.get::<&mut LifeState>(ship) {
            *state = LifeState::Dead;
        }

        world_setup::spawn_bomb(world, transform, bomb_lifetime_secs);
        events.push(GameEvent::ShipDestroyed {
            position: transform.position,
            enemy: enemy.to_bits().get(),
        });
        info!(
            "ship destroyed by enemy {:?} at {:?}",
            enemy, transform.position
        );
    }
    !wrecks.is_empty()
}
