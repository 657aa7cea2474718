//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skyraid_core::components::*;
use skyraid_core::enums::*;
use skyraid_core::events::GameEvent;
use skyraid_core::state::*;
use skyraid_core::types::{SimTime, Transform};

use crate::camera::Camera;
use crate::relations::MarkerTarget;
use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    camera: &Camera,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        enemies: build_enemies(world),
        markers: build_markers(world),
        missiles: build_missiles(world),
        bombs: build_bombs(world),
        camera: CameraView {
            target: camera.target().map(|e| e.to_bits().get()),
            focus: camera.focus(world),
        },
        events,
        score: score.view(time.elapsed_secs),
    }
}

fn build_ship(world: &World) -> Option<ShipView> {
    world
        .query::<(&Ship, &Transform, &LifeState)>()
        .iter()
        .next()
        .map(|(_, (ship, transform, state))| ShipView {
            transform: *transform,
            state: *state,
            can_shoot: ship.can_shoot,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Transform, &LifeState)>()
        .iter()
        .map(|(entity, (enemy, transform, state))| EnemyView {
            id: entity.to_bits().get(),
            transform: *transform,
            state: *state,
            move_type: enemy.move_type,
            deploy_angle_deg: enemy.deploy_angle_deg,
            speed: enemy.speed,
            arrived: enemy.arrived,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_markers(world: &World) -> Vec<MarkerView> {
    let mut markers: Vec<MarkerView> = world
        .query::<(&Marker, &MarkerTarget, &LifeState)>()
        .iter()
        .map(|(entity, (_, target, state))| MarkerView {
            id: entity.to_bits().get(),
            target: target.enemy.to_bits().get(),
            state: *state,
        })
        .collect();
    markers.sort_by_key(|m| m.id);
    markers
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let mut missiles: Vec<MissileView> = world
        .query::<(&Missile, &Transform)>()
        .iter()
        .map(|(entity, (missile, transform))| MissileView {
            id: entity.to_bits().get(),
            transform: *transform,
            remaining_secs: missile.remaining_secs,
        })
        .collect();
    missiles.sort_by_key(|m| m.id);
    missiles
}

fn build_bombs(world: &World) -> Vec<BombView> {
    let mut bombs: Vec<BombView> = world
        .query::<(&Bomb, &Transform)>()
        .iter()
        .map(|(entity, (bomb, transform))| BombView {
            id: entity.to_bits().get(),
            transform: *transform,
            remaining_secs: bomb.remaining_secs,
        })
        .collect();
    bombs.sort_by_key(|b| b.id);
    bombs
}
