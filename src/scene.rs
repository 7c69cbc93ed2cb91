use glam::{EulerRot, Mat4, Vec3};

use crate::camera::Camera;
use crate::color::Color;
use crate::geometry::TorusGeometry;

pub const TORUS_MAJOR_RADIUS: f32 = 1.0;
pub const TORUS_TUBE_RADIUS: f32 = 0.4;
pub const TORUS_RADIAL_SEGMENTS: u32 = 32;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 64;

pub const INITIAL_MATERIAL_HEX: u32 = 0xff7b00;
pub const MATERIAL_METALNESS: f32 = 0.8;
pub const MATERIAL_ROUGHNESS: f32 = 0.2;

pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

/// Surface response of the mesh. The color channel is animated; the
/// metalness/roughness pair is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
}

/// The one renderable object: torus geometry, its material, and the
/// continuously mutated Euler rotation angles (unbounded, never wrapped).
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: TorusGeometry,
    pub material: Material,
    pub rotation: Vec3,
}

impl Mesh {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

/// Everything the render loop reads each frame. Owned by the application
/// and passed by reference to the animator and renderer; no globals.
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub mesh: Mesh,
    pub camera: Camera,
    pub ambient: AmbientLight,
    pub point: PointLight,
    pub background: Color,
}

impl SceneContext {
    pub fn new(width: u32, height: u32) -> Self {
        let geometry = TorusGeometry::new(
            TORUS_MAJOR_RADIUS,
            TORUS_TUBE_RADIUS,
            TORUS_RADIAL_SEGMENTS,
            TORUS_TUBULAR_SEGMENTS,
        );

        Self {
            mesh: Mesh {
                geometry,
                material: Material {
                    color: Color::from_hex(INITIAL_MATERIAL_HEX),
                    metalness: MATERIAL_METALNESS,
                    roughness: MATERIAL_ROUGHNESS,
                },
                rotation: Vec3::ZERO,
            },
            camera: Camera::new(width as f32 / height as f32),
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: AMBIENT_INTENSITY,
            },
            point: PointLight {
                color: Color::WHITE,
                intensity: POINT_INTENSITY,
                position: POINT_LIGHT_POSITION,
            },
            background: Color::BLACK,
        }
    }

    /// Viewport resize: recompute the camera aspect ratio. Zero-sized
    /// events (minimized windows) are ignored.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.set_aspect(width as f32 / height as f32);
    }
}
