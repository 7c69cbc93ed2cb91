use glam::Vec3;

/// Vertex data for the mesh pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Parametric torus mesh: a ring of `tubular_segments` around the main
/// axis, each a circle of `radial_segments` around the tube. Seam rows are
/// duplicated so indexing stays a plain quad grid.
#[derive(Debug, Clone)]
pub struct TorusGeometry {
    pub major_radius: f32,
    pub tube_radius: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TorusGeometry {
    pub fn new(
        major_radius: f32,
        tube_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    ) -> Self {
        let mut vertices =
            Vec::with_capacity(((radial_segments + 1) * (tubular_segments + 1)) as usize);

        for j in 0..=radial_segments {
            for i in 0..=tubular_segments {
                let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
                let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;

                let ring = major_radius + tube_radius * v.cos();
                let position = Vec3::new(ring * u.cos(), ring * u.sin(), tube_radius * v.sin());

                // Normal points away from the tube's center circle.
                let center = Vec3::new(major_radius * u.cos(), major_radius * u.sin(), 0.0);
                let normal = (position - center).normalize();

                vertices.push(Vertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                });
            }
        }

        let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);
        let row = tubular_segments + 1;

        for j in 1..=radial_segments {
            for i in 1..=tubular_segments {
                let a = row * j + i - 1;
                let b = row * (j - 1) + i - 1;
                let c = row * (j - 1) + i;
                let d = row * j + i;

                indices.extend_from_slice(&[a, b, d]);
                indices.extend_from_slice(&[b, c, d]);
            }
        }

        Self {
            major_radius,
            tube_radius,
            radial_segments,
            tubular_segments,
            vertices,
            indices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_torus() -> TorusGeometry {
        TorusGeometry::new(1.0, 0.4, 32, 64)
    }

    #[test]
    fn test_vertex_count() {
        let torus = unit_torus();
        assert_eq!(torus.vertices.len(), (32 + 1) * (64 + 1));
    }

    #[test]
    fn test_index_count_and_range() {
        let torus = unit_torus();
        assert_eq!(torus.indices.len(), 32 * 64 * 6);
        let max = torus.vertices.len() as u32;
        assert!(torus.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_vertices_lie_on_tube_surface() {
        let torus = unit_torus();
        for vertex in &torus.vertices {
            let p = Vec3::from_array(vertex.position);
            // Distance from the center circle of the tube equals the tube radius.
            let ring = Vec3::new(p.x, p.y, 0.0).normalize_or_zero() * torus.major_radius;
            let distance = (p - ring).length();
            assert!(
                (distance - torus.tube_radius).abs() < 1e-4,
                "vertex off surface: {:?} (distance {})",
                p,
                distance
            );
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let torus = unit_torus();
        for vertex in &torus.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_bounding_radius() {
        let torus = unit_torus();
        let outer = torus.major_radius + torus.tube_radius;
        for vertex in &torus.vertices {
            let p = Vec3::from_array(vertex.position);
            assert!(p.length() <= outer + 1e-4);
            assert!(p.z.abs() <= torus.tube_radius + 1e-4);
        }
    }

    #[test]
    fn test_triangles_are_nondegenerate() {
        let torus = unit_torus();
        for tri in torus.indices.chunks(3) {
            let a = Vec3::from_array(torus.vertices[tri[0] as usize].position);
            let b = Vec3::from_array(torus.vertices[tri[1] as usize].position);
            let c = Vec3::from_array(torus.vertices[tri[2] as usize].position);
            let area = (b - a).cross(c - a).length() * 0.5;
            assert!(area > 1e-6, "degenerate triangle {:?}", tri);
        }
    }
}
