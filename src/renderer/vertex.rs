//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert an RGBA color to a wgpu clear color
pub fn clear_color(color: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: color[0] as f64,
        g: color[1] as f64,
        b: color[2] as f64,
        a: color[3] as f64,
    }
}

/// Colors for demo elements
pub mod colors {
    /// Movement demo palette
    pub const BACKGROUND: [f32; 4] = [0.078, 0.094, 0.118, 1.0]; // 14181e
    pub const PLAYFIELD: [f32; 4] = [0.039, 0.047, 0.063, 1.0];
    pub const PLAYFIELD_BORDER: [f32; 4] = [0.298, 0.337, 0.416, 1.0]; // 4c566a
    pub const PLAYER: [f32; 4] = [0.533, 0.753, 0.816, 1.0]; // 88c0d0
    pub const HUD_BAND: [f32; 4] = [0.180, 0.204, 0.251, 1.0]; // 2e3440

    /// Life demo palette; live cells are shaded by live-neighbor count
    pub const LIFE_DEAD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LIFE_LONELY: [f32; 4] = [0.263, 0.298, 0.369, 1.0]; // 434c5e
    pub const LIFE_SETTLED: [f32; 4] = [0.180, 0.204, 0.251, 1.0]; // 2e3440
    pub const LIFE_THRIVING: [f32; 4] = [0.369, 0.506, 0.675, 1.0]; // 5e81ac
    pub const LIFE_CROWDED: [f32; 4] = [0.561, 0.737, 0.733, 1.0]; // 8fbcbb
}
