//! Deployment geometry: where an enemy appears and which way it faces.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use skyraid_core::types::Transform;

/// Spawn transform for a deployment angle in degrees (0 = straight ahead
/// along +Z, positive angles swing toward +X when seen from above).
///
/// The position is the `appear_distance` vector along +Z rotated about the
/// vertical axis; the yaw (`270° - atan2(z, x)`) points the enemy at the
/// origin.
pub fn deploy_transform(angle_deg: f32, appear_distance: f32) -> Transform {
    let rotation = Quat::from_rotation_y(angle_deg.to_radians());
    let position = rotation * (appear_distance * Vec3::Z);
    let yaw = 1.5 * PI - position.z.atan2(position.x);
    Transform::new(position, Vec3::new(0.0, yaw, 0.0))
}
