use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::commands::PlayerCommand;
use crate::enums::*;
use crate::events::GameEvent;
use crate::input::{InputState, Key};
use crate::state::GameStateSnapshot;
use crate::types::{Aabb, SimTime, Transform};

fn assert_vec_close(a: Vec3, b: Vec3, tol: f32) {
    assert!((a - b).length() < tol, "expected {b:?}, got {a:?}");
}

// ---- Transform ----

#[test]
fn test_unrotated_forward_is_plus_z() {
    let t = Transform::default();
    assert_vec_close(t.forward(), Vec3::Z, 1e-6);
}

#[test]
fn test_yaw_turns_forward_about_y() {
    let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, FRAC_PI_2, 0.0));
    assert_vec_close(t.forward(), Vec3::X, 1e-6);

    let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, PI, 0.0));
    assert_vec_close(t.forward(), -Vec3::Z, 1e-6);
}

#[test]
fn test_negative_pitch_aims_upward() {
    let t = Transform::new(Vec3::ZERO, Vec3::new(-0.2, 0.0, 0.0));
    let f = t.forward();
    assert!(f.y > 0.0, "negative pitch should aim up, got {f:?}");
    assert!((f.length() - 1.0).abs() < 1e-6);
}

#[test]
fn test_roll_does_not_change_forward() {
    let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, 0.7, 0.3));
    let level = Transform::new(Vec3::ZERO, Vec3::new(0.0, 0.7, 0.0));
    assert_vec_close(t.forward(), level.forward(), 1e-6);
}

// ---- Aabb ----

#[test]
fn test_aabb_overlap_and_separation() {
    let a = Aabb::from_half_extents(Vec3::ONE);
    let b = Aabb::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(3.0, 3.0, 3.0));
    let c = Aabb::new(Vec3::new(1.5, -1.0, -1.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(!c.intersects(&a));
}

#[test]
fn test_aabb_touching_faces_intersect() {
    let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.intersects(&b));
}

#[test]
fn test_aabb_separated_on_single_axis() {
    let a = Aabb::from_half_extents(Vec3::ONE);
    let b = Aabb::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 6.0));
    assert!(!a.intersects(&b), "z separation alone must reject the overlap");
}

#[test]
fn test_aabb_half_extents_are_normalised() {
    let a = Aabb::from_half_extents(Vec3::new(-1.0, 2.0, -3.0));
    assert_eq!(a.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(a.max, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_aabb_transformed_translates() {
    let a = Aabb::from_half_extents(Vec3::ONE);
    let t = Transform::at(Vec3::new(10.0, 0.0, -4.0));
    let w = a.transformed(&t);
    assert_vec_close(w.min, Vec3::new(9.0, -1.0, -5.0), 1e-6);
    assert_vec_close(w.max, Vec3::new(11.0, 1.0, -3.0), 1e-6);
}

#[test]
fn test_aabb_transformed_rotation_swaps_extents() {
    // A long box yawed by 90 degrees should become long along x.
    let a = Aabb::from_half_extents(Vec3::new(1.0, 0.5, 3.0));
    let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, FRAC_PI_2, 0.0));
    let w = a.transformed(&t);
    assert!((w.max.x - 3.0).abs() < 1e-5, "got {w:?}");
    assert!((w.max.z - 1.0).abs() < 1e-5, "got {w:?}");
    assert!((w.max.y - 0.5).abs() < 1e-5, "got {w:?}");
}

#[test]
fn test_aabb_transformed_diagonal_grows() {
    let a = Aabb::from_half_extents(Vec3::ONE);
    let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, PI / 4.0, 0.0));
    let w = a.transformed(&t);
    let expected = 2.0_f32.sqrt();
    assert!((w.max.x - expected).abs() < 1e-5);
    assert!((w.max.z - expected).abs() < 1e-5);
}

// ---- SimTime ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..4 {
        time.advance(0.25);
    }
    assert_eq!(time.tick, 4);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
}

// ---- Input ----

#[test]
fn test_input_from_keys() {
    let input = InputState::from_keys(&[Key::Left, Key::Fire]);
    assert!(input.left);
    assert!(input.fire);
    assert!(!input.right);
}

#[test]
fn test_input_merge() {
    let a = InputState::from_keys(&[Key::Up]);
    let b = InputState::from_keys(&[Key::Down, Key::Right]);
    let merged = a.merge(b);
    assert_eq!(merged, InputState::from_keys(&[Key::Up, Key::Down, Key::Right]));
}

#[test]
fn test_key_names_are_lowercase_in_json() {
    let keys: Vec<Key> = serde_json::from_str(r#"["left","right","fire","up","down"]"#).unwrap();
    assert_eq!(
        keys,
        vec![Key::Left, Key::Right, Key::Fire, Key::Up, Key::Down]
    );
}

// ---- Serialization ----

#[test]
fn test_commands_are_tagged() {
    let json = serde_json::to_string(&PlayerCommand::SetTimeScale { scale: 2.0 }).unwrap();
    assert!(json.contains("\"type\":\"SetTimeScale\""), "got {json}");
    let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartMission"}"#).unwrap();
    assert!(matches!(back, PlayerCommand::StartMission));
}

#[test]
fn test_event_serde() {
    let event = GameEvent::EnemyDeployed {
        enemy: 7,
        angle_deg: 30.0,
        move_type: MoveType::Shake,
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = GameStateSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, GamePhase::MainMenu);
    assert!(back.ship.is_none());
    assert!(back.enemies.is_empty());
}

#[test]
fn test_enum_defaults() {
    assert_eq!(LifeState::default(), LifeState::Active);
    assert_eq!(MoveType::default(), MoveType::Straight);
    assert_eq!(HappySpin::default(), HappySpin::Absolute);
    assert_eq!(GamePhase::default(), GamePhase::MainMenu);
}
