//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in field coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

fn push_quad(vertices: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    // Two triangles: a-b-c and a-c-d
    for p in [a, b, c, a, c, d] {
        vertices.push(Vertex::new(p.x, p.y, color));
    }
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    let min = center - half_extents;
    let max = center + half_extents;
    push_quad(
        &mut vertices,
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ],
        color,
    );
    vertices
}

/// Generate vertices for a rectangle border drawn inside the given bounds
pub fn rect_outline(center: Vec2, half_extents: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(half_extents.x).min(half_extents.y);
    let min = center - half_extents;
    let max = center + half_extents;

    let mut vertices = Vec::with_capacity(24);
    let bands = [
        // Top and bottom span the full width
        (min, Vec2::new(max.x, min.y + w)),
        (Vec2::new(min.x, max.y - w), max),
        // Left and right fill between them
        (Vec2::new(min.x, min.y + w), Vec2::new(min.x + w, max.y - w)),
        (Vec2::new(max.x - w, min.y + w), Vec2::new(max.x, max.y - w)),
    ];
    for (lo, hi) in bands {
        push_quad(
            &mut vertices,
            [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)],
            color,
        );
    }
    vertices
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [from + perp, from - perp, to - perp, to + perp],
        color,
    );
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
