//! A quad covering the whole screen. The fragment shader does the rest.

use bytemuck::{Pod, Zeroable};

use crate::buffer::{self, Buffer};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub const VERTICES: [Vertex; 4] = [
    Vertex {
        position: [1.0, 1.0, 0.0], // top right
    },
    Vertex {
        position: [-1.0, 1.0, 0.0], // top left
    },
    Vertex {
        position: [-1.0, -1.0, 0.0], // bottom left
    },
    Vertex {
        position: [1.0, -1.0, 0.0], // bottom right
    },
];

pub const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

pub struct Canvas {
    vertices: Buffer<Vertex>,
    indices: Buffer<u32>,
}

impl Canvas {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertices = buffer::Builder::new(&VERTICES)
            .with_label("canvas-vertices")
            .with_usage(wgpu::BufferUsages::VERTEX)
            .create(device);

        let indices = buffer::Builder::new(&INDICES)
            .with_label("canvas-indices")
            .with_usage(wgpu::BufferUsages::INDEX)
            .create(device);

        Self { vertices, indices }
    }

    pub fn draw<'pass>(&'pass self, render_pass: &mut wgpu::RenderPass<'pass>) {
        render_pass.set_vertex_buffer(0, self.vertices.slice(..));
        render_pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.indices.len(), 0, 0..1);
    }

    pub fn destroy(self) {
        self.vertices.destroy();
        self.indices.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_refer_to_existing_vertices() {
        assert!(INDICES.iter().all(|index| (*index as usize) < VERTICES.len()));
    }

    #[test]
    fn quad_spans_clip_space() {
        for vertex in VERTICES {
            let [x, y, z] = vertex.position;
            assert_eq!(x.abs(), 1.0);
            assert_eq!(y.abs(), 1.0);
            assert_eq!(z, 0.0);
        }
    }

    #[test]
    fn triangles_wind_the_same_way() {
        // Signed area of each triangle in the xy plane.
        let area = |triangle: &[u32]| {
            let [a, b, c] = [0, 1, 2].map(|i| VERTICES[triangle[i] as usize].position);
            (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
        };
        let first = area(&INDICES[0..3]);
        let second = area(&INDICES[3..6]);
        assert!(first * second > 0.0);
    }

    #[test]
    fn vertex_layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }
}
