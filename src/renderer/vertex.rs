//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(0, 0, 0);
    pub const TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const PLAYER_BODY: [f32; 4] = rgb(30, 144, 255);
    pub const PLAYER_TRIM: [f32; 4] = rgb(0, 0, 139); // Border and barrel
    pub const ENEMY_BODY: [f32; 4] = rgb(220, 20, 60);
    pub const ENEMY_TRIM: [f32; 4] = rgb(139, 0, 0);
    pub const PROJECTILE: [f32; 4] = rgb(50, 205, 50);
    pub const GAME_OVER: [f32; 4] = rgb(220, 20, 60);
    pub const FPS: [f32; 4] = rgb(100, 100, 100);
}
