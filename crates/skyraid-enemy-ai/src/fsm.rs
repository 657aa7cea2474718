//! Enemy motion state machine.
//!
//! An enemy idles for `wait_time` seconds after deployment, then flies
//! along its forward vector (optionally bobbing vertically) until it is
//! within the arrival square around the origin, where it stops for good.

use glam::Vec3;

use skyraid_core::constants::{ENEMY_ARRIVAL_RADIUS, ENEMY_SHAKE_TIME_DIVISOR};
use skyraid_core::enums::{HappySpin, MoveType};
use skyraid_core::types::Transform;

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub move_type: MoveType,
    pub transform: Transform,
    pub initial_position: Vec3,
    pub speed: f32,
    pub shake_width: f32,
    pub time_count: f32,
    pub wait_time: f32,
    pub happy_rot_speed: f32,
    pub spin: HappySpin,
    pub dt: f32,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub transform: Transform,
    pub speed: f32,
    pub time_count: f32,
    /// Still inside the post-deployment idle window.
    pub waiting: bool,
    /// Inside the arrival square after this tick's move.
    pub arrived: bool,
}

/// Advance one enemy by `ctx.dt` seconds.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let time_count = ctx.time_count + ctx.dt;
    if time_count < ctx.wait_time {
        return EnemyUpdate {
            transform: ctx.transform,
            speed: ctx.speed,
            time_count,
            waiting: true,
            arrived: false,
        };
    }

    let mut transform = ctx.transform;
    let mut position = transform.position;
    if ctx.move_type == MoveType::Shake {
        // Absolute phase: recomputed from elapsed time, never from last tick.
        position.y = ctx.initial_position.y + shake_offset(time_count, ctx.shake_width);
    }
    position += ctx.speed * ctx.dt * transform.forward();
    transform.position = position;

    let mut speed = ctx.speed;
    let arrived = has_arrived(position);
    if arrived {
        speed = 0.0;
        transform.rotation.y = match ctx.spin {
            HappySpin::Absolute => ctx.happy_rot_speed,
            HappySpin::Accumulate => transform.rotation.y + ctx.happy_rot_speed * ctx.dt,
        };
    }

    EnemyUpdate {
        transform,
        speed,
        time_count,
        waiting: false,
        arrived,
    }
}

/// Vertical offset of the shake pattern at `time_count` seconds.
pub fn shake_offset(time_count: f32, shake_width: f32) -> f32 {
    (time_count / ENEMY_SHAKE_TIME_DIVISOR).sin() * shake_width
}

/// Whether `position` lies inside the arrival square around the origin.
pub fn has_arrived(position: Vec3) -> bool {
    position.x.abs() <= ENEMY_ARRIVAL_RADIUS && position.z.abs() <= ENEMY_ARRIVAL_RADIUS
}
