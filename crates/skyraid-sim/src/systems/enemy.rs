//! Enemy AI system: advances every enemy through the motion FSM.
//!
//! Calls `skyraid_enemy_ai::fsm::evaluate` for each enemy, then writes the
//! result back into its components.

use hecs::World;
use log::debug;

use skyraid_core::components::Enemy;
use skyraid_core::enums::{HappySpin, LifeState};
use skyraid_core::events::GameEvent;
use skyraid_core::types::Transform;
use skyraid_enemy_ai::fsm::{evaluate, EnemyContext};

/// Run the enemy AI. Returns the number of enemies that arrived this tick.
pub fn update(world: &mut World, dt: f32, spin: HappySpin, events: &mut Vec<GameEvent>) -> u32 {
    let mut arrivals = 0;

    for (entity, (enemy, transform, state)) in
        world.query_mut::<(&mut Enemy, &mut Transform, &LifeState)>()
    {
        if *state != LifeState::Active {
            continue;
        }

        let ctx = EnemyContext {
            move_type: enemy.move_type,
            transform: *transform,
            initial_position: enemy.initial_position,
            speed: enemy.speed,
            shake_width: enemy.shake_width,
            time_count: enemy.time_count,
            wait_time: enemy.wait_time,
            happy_rot_speed: enemy.happy_rot_speed,
            spin,
            dt,
        };

        let update = evaluate(&ctx);
        *transform = update.transform;
        enemy.speed = update.speed;
        enemy.time_count = update.time_count;

        if update.arrived && !enemy.arrived {
            enemy.arrived = true;
            arrivals += 1;
            events.push(GameEvent::EnemyArrived {
                enemy: entity.to_bits().get(),
            });
            debug!("enemy {:?} arrived at {:?}", entity, transform.position);
        }
    }
    arrivals
}
