#[cfg(test)]
mod tests {
    use glam::Vec3;

    use skyraid_core::constants::*;
    use skyraid_core::enums::{HappySpin, MoveType};
    use skyraid_core::types::Transform;

    use crate::deploy::deploy_transform;
    use crate::fsm::{evaluate, has_arrived, shake_offset, EnemyContext};

    fn make_context(move_type: MoveType, angle_deg: f32, wait_time: f32, dt: f32) -> EnemyContext {
        let transform = deploy_transform(angle_deg, ENEMY_APPEAR_DISTANCE);
        EnemyContext {
            move_type,
            transform,
            initial_position: transform.position,
            speed: ENEMY_SPEED,
            shake_width: ENEMY_SHAKE_WIDTH,
            time_count: 0.0,
            wait_time,
            happy_rot_speed: ENEMY_HAPPY_ROT_SPEED,
            spin: HappySpin::Absolute,
            dt,
        }
    }

    /// Feed an update back into the context, as the ECS system does.
    fn apply(ctx: &mut EnemyContext) -> bool {
        let update = evaluate(ctx);
        ctx.transform = update.transform;
        ctx.speed = update.speed;
        ctx.time_count = update.time_count;
        update.arrived
    }

    #[test]
    fn test_deploy_distance_and_facing() {
        for angle in [-170.0, -90.0, -45.0, -30.0, 0.0, 15.0, 30.0, 60.0, 90.0, 135.0, 180.0] {
            let t = deploy_transform(angle, ENEMY_APPEAR_DISTANCE);
            assert!(
                (t.position.length() - ENEMY_APPEAR_DISTANCE).abs() < 1e-3,
                "angle {angle}: spawn at {:?}",
                t.position
            );
            let to_origin = (-t.position).normalize();
            assert!(
                (t.forward() - to_origin).length() < 1e-5,
                "angle {angle}: forward {:?} should face origin {:?}",
                t.forward(),
                to_origin
            );
            assert_eq!(t.rotation.x, 0.0);
            assert_eq!(t.rotation.z, 0.0);
        }
    }

    #[test]
    fn test_deploy_zero_angle_is_straight_ahead() {
        let t = deploy_transform(0.0, 50.0);
        assert!(t.position.x.abs() < 1e-5);
        assert_eq!(t.position.y, 0.0);
        assert!((t.position.z - 50.0).abs() < 1e-5);
    }

    #[test]
    fn test_deploy_positive_angle_swings_toward_plus_x() {
        let t = deploy_transform(30.0, 50.0);
        assert!((t.position.x - 25.0).abs() < 1e-3, "got {:?}", t.position);
        assert!(t.position.z > 0.0);
    }

    #[test]
    fn test_waiting_enemy_does_not_move() {
        for move_type in [MoveType::Straight, MoveType::Shake] {
            let mut ctx = make_context(move_type, 20.0, 2.0, 0.5);
            let start = ctx.transform;
            for _ in 0..3 {
                let update = evaluate(&ctx);
                assert!(update.waiting);
                assert_eq!(update.transform, start);
                ctx.time_count = update.time_count;
            }
            assert_eq!(ctx.time_count, 1.5);

            // time_count reaches 2.0, which is no longer below the wait time.
            let update = evaluate(&ctx);
            assert!(!update.waiting);
            assert_ne!(update.transform.position, start.position);
        }
    }

    #[test]
    fn test_straight_advances_along_forward() {
        let mut ctx = make_context(MoveType::Straight, 45.0, 0.0, 0.1);
        let forward = ctx.transform.forward();
        let mut previous = ctx.transform.position;
        for _ in 0..20 {
            apply(&mut ctx);
            let step = ctx.transform.position - previous;
            assert!((step.length() - ENEMY_SPEED * 0.1).abs() < 1e-4);
            assert!((step.normalize() - forward).length() < 1e-4);
            assert!(ctx.transform.position.length() < previous.length());
            previous = ctx.transform.position;
        }
    }

    #[test]
    fn test_shake_height_follows_elapsed_time() {
        let mut ctx = make_context(MoveType::Shake, -30.0, 0.0, 0.05);
        let base_y = ctx.initial_position.y;
        for _ in 0..40 {
            apply(&mut ctx);
            let expected = base_y + ENEMY_SHAKE_WIDTH * (ctx.time_count / 0.2).sin();
            assert!(
                (ctx.transform.position.y - expected).abs() < 1e-6,
                "t={} y={} expected {}",
                ctx.time_count,
                ctx.transform.position.y,
                expected
            );
        }
    }

    #[test]
    fn test_shake_offset_is_periodic() {
        let period = 2.0 * std::f32::consts::PI * ENEMY_SHAKE_TIME_DIVISOR;
        let a = shake_offset(0.3, 5.0);
        let b = shake_offset(0.3 + period, 5.0);
        assert!((a - b).abs() < 1e-4);
        assert_eq!(shake_offset(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_arrival_square() {
        assert!(has_arrived(Vec3::new(0.0, 10.0, 0.0)));
        assert!(has_arrived(Vec3::new(1.0, 0.0, -1.0)));
        assert!(!has_arrived(Vec3::new(1.01, 0.0, 0.0)));
        assert!(!has_arrived(Vec3::new(0.0, 0.0, -1.5)));
    }

    #[test]
    fn test_arrival_stops_and_sets_absolute_yaw() {
        let mut ctx = make_context(MoveType::Straight, 0.0, 0.0, 1.0);
        let mut arrived_at = None;
        for step in 1..=10 {
            if apply(&mut ctx) && arrived_at.is_none() {
                arrived_at = Some(step);
            }
        }
        assert_eq!(arrived_at, Some(10));
        assert_eq!(ctx.speed, 0.0);
        assert_eq!(ctx.transform.rotation.y, ENEMY_HAPPY_ROT_SPEED);

        let parked = ctx.transform;
        for _ in 0..5 {
            assert!(apply(&mut ctx));
            assert_eq!(ctx.transform.position, parked.position);
            assert_eq!(ctx.transform.rotation.y, ENEMY_HAPPY_ROT_SPEED);
        }
    }

    #[test]
    fn test_accumulating_spin_turns_every_tick() {
        let mut ctx = EnemyContext {
            transform: Transform::at(Vec3::new(0.2, 0.0, 0.2)),
            spin: HappySpin::Accumulate,
            ..make_context(MoveType::Straight, 0.0, 0.0, 0.5)
        };
        ctx.speed = 0.0;
        apply(&mut ctx);
        let first = ctx.transform.rotation.y;
        apply(&mut ctx);
        let second = ctx.transform.rotation.y;
        assert!((first - ENEMY_HAPPY_ROT_SPEED * 0.5).abs() < 1e-6);
        assert!((second - ENEMY_HAPPY_ROT_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_zero_wait_moves_on_first_tick() {
        let ctx = make_context(MoveType::Straight, 10.0, 0.0, DT);
        let update = evaluate(&ctx);
        assert!(!update.waiting);
        assert!(update.transform.position.length() < ENEMY_APPEAR_DISTANCE);
    }
}
