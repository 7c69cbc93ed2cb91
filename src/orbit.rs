use glam::Vec3;

use crate::camera::Camera;

pub const DAMPING_FACTOR: f32 = 0.1;
pub const ROTATE_SPEED: f32 = 0.005;
pub const ZOOM_SPEED: f32 = 0.25;

const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 50.0;
// Keep pitch away from the poles so the up vector never flips.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const SETTLE_EPSILON: f32 = 1e-4;

/// Damped orbit controls: drag rotates around the focus point, scroll
/// zooms. Input moves the target spherical coordinates; `update` eases the
/// current coordinates toward them and writes the camera position.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    focus: Vec3,
    yaw: f32,
    pitch: f32,
    radius: f32,
    yaw_target: f32,
    pitch_target: f32,
    radius_target: f32,
    dragging: bool,
}

impl OrbitControls {
    /// Derive the starting spherical coordinates from the camera's current
    /// position relative to its target.
    pub fn new(camera: &Camera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(MIN_RADIUS);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        Self {
            focus: camera.target,
            yaw,
            pitch,
            radius,
            yaw_target: yaw,
            pitch_target: pitch,
            radius_target: radius,
            dragging: false,
        }
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer movement in pixels; ignored unless a drag is active.
    pub fn process_drag(&mut self, dx: f32, dy: f32) {
        if !self.dragging {
            return;
        }
        self.yaw_target -= dx * ROTATE_SPEED;
        self.pitch_target = (self.pitch_target + dy * ROTATE_SPEED)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scroll steps; positive zooms in.
    pub fn process_scroll(&mut self, delta: f32) {
        self.radius_target = (self.radius_target - delta * ZOOM_SPEED)
            .clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Ease toward the target orientation and write the camera position.
    /// No-op once damping has settled and no input is pending.
    pub fn update(&mut self, camera: &mut Camera) {
        if self.settled() {
            return;
        }

        self.yaw += (self.yaw_target - self.yaw) * DAMPING_FACTOR;
        self.pitch += (self.pitch_target - self.pitch) * DAMPING_FACTOR;
        self.radius += (self.radius_target - self.radius) * DAMPING_FACTOR;

        camera.target = self.focus;
        camera.position = self.focus
            + Vec3::new(
                self.radius * self.pitch.cos() * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                self.radius * self.pitch.cos() * self.yaw.cos(),
            );
    }

    fn settled(&self) -> bool {
        (self.yaw_target - self.yaw).abs() < SETTLE_EPSILON
            && (self.pitch_target - self.pitch).abs() < SETTLE_EPSILON
            && (self.radius_target - self.radius).abs() < SETTLE_EPSILON
    }
}
