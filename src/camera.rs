use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_Y_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera looking at a focus point.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub aspect: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 4.0),
            target: Vec3::ZERO,
            aspect,
            fov_y: DEFAULT_FOV_Y_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Refresh the projection for a new viewport shape.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_aspect() {
        let mut camera = Camera::new(1.0);
        camera.set_aspect(16.0 / 9.0);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_projects_inside_frustum() {
        let camera = Camera::new(800.0 / 600.0);
        let clip = camera.view_proj() * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x.abs() < 1.0);
        assert!(ndc.y.abs() < 1.0);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_view_matrix_centers_target() {
        let camera = Camera::new(1.0);
        let eye_space = camera.view_matrix() * camera.target.extend(1.0);

        // Looking straight at the target puts it on the -Z axis.
        assert!(eye_space.x.abs() < 1e-5);
        assert!(eye_space.y.abs() < 1e-5);
        assert!(eye_space.z < 0.0);
    }
}
