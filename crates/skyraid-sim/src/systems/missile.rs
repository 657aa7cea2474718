//! Missile kinematics and missile-vs-enemy hits.

use hecs::{Entity, World};
use log::debug;

use skyraid_core::components::{Collider, Missile};
use skyraid_core::enums::LifeState;
use skyraid_core::events::GameEvent;
use skyraid_core::types::Transform;

use crate::registry::EnemyRegistry;
use crate::systems::collision;

/// Fly every missile along its forward vector and expire spent ones.
pub fn update(world: &mut World, dt: f32) {
    for (_entity, (missile, transform, state)) in
        world.query_mut::<(&mut Missile, &mut Transform, &mut LifeState)>()
    {
        if *state != LifeState::Active {
            continue;
        }
        transform.position += missile.speed * dt * transform.forward();
        missile.remaining_secs -= dt;
        if missile.remaining_secs <= 0.0 {
            *state = LifeState::Dead;
        }
    }
}

/// Mark enemies struck by a missile `Dead`, along with the missile.
///
/// Each enemy can be claimed by one missile per tick; the enemy itself is
/// destroyed later by the cleanup system. Returns the number of hits.
pub fn late_update(world: &mut World, registry: &EnemyRegistry, events: &mut Vec<GameEvent>) -> u32 {
    let targets = collision::live_enemy_boxes(world, registry);
    if targets.is_empty() {
        return 0;
    }

    let mut hits: Vec<(Entity, Entity)> = Vec::new();
    {
        let mut query = world.query::<(&Missile, &Transform, &Collider, &LifeState)>();
        for (missile, (_m, transform, collider, state)) in query.iter() {
            if *state != LifeState::Active {
                continue;
            }
            let missile_box = collider.object_box.transformed(transform);
            let target = targets.iter().find(|(enemy, enemy_box)| {
                enemy_box.intersects(&missile_box) && !hits.iter().any(|(_, e)| e == enemy)
            });
            if let Some(&(enemy, _)) = target {
                hits.push((missile, enemy));
            }
        }
    }

    for &(missile, enemy) in &hits {
        for entity in [missile, enemy] {
            if let Ok(mut state) = world.get::<&mut LifeState>(entity) {
                *state = LifeState::Dead;
            }
        }
        events.push(GameEvent::EnemyHit {
            enemy: enemy.to_bits().get(),
            missile: missile.to_bits().get(),
        });
        debug!("missile {:?} hit enemy {:?}", missile, enemy);
    }
    hits.len() as u32
}
