//! Fundamental geometric and simulation types.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of an entity in world space.
///
/// Rotation is stored as Euler angles in radians: x = pitch, y = yaw,
/// z = roll. +Y is up, and an unrotated entity looks down +Z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Unrotated transform at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Orientation quaternion: yaw about Y, then pitch about X, then roll about Z.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// Unit vector the entity is facing.
    pub fn forward(&self) -> Vec3 {
        self.quat() * Vec3::Z
    }
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centred on the origin.
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: -half,
            max: half,
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// World-space box of an object-space box: every corner is rotated by the
    /// transform's orientation and translated, then re-boxed.
    pub fn transformed(&self, transform: &Transform) -> Aabb {
        let rotation = transform.quat();
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in self.corners() {
            let p = rotation * corner + transform.position;
            min = min.min(p);
            max = max.max(p);
        }
        Aabb { min, max }
    }

    /// Overlap test. Boxes that merely touch count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let separated = self.max.x < other.min.x
            || self.max.y < other.min.y
            || self.max.z < other.min.z
            || other.max.x < self.min.x
            || other.max.y < self.min.y
            || other.max.z < self.min.z;
        !separated
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
