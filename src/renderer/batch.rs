//! Frame batch: tessellates draw commands into one vertex list
//!
//! Text can't go through the triangle pipeline, so overlays are kept aside
//! for the platform layer to place.

use glam::Vec2;

use super::scene::{Color, Rect, RenderSink, TextOverlay};
use super::shapes;
use super::vertex::{Vertex, colors};

/// Segments per projectile circle (they are only 4px across)
const CIRCLE_SEGMENTS: u32 = 12;

/// Everything needed to present one frame
#[derive(Debug, Clone)]
pub struct FrameBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub overlays: Vec<TextOverlay>,
}

impl Default for FrameBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBatch {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            overlays: Vec::new(),
        }
    }

    /// Drop last frame's contents, keeping allocations
    pub fn reset(&mut self) {
        self.clear_color = colors::BACKGROUND;
        self.vertices.clear();
        self.overlays.clear();
    }
}

impl RenderSink for FrameBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.overlays.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices
            .extend(shapes::rect(rect.center, rect.half_extents, color));
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.vertices.extend(shapes::rect_outline(
            rect.center,
            rect.half_extents,
            width,
            color,
        ));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.vertices.extend(shapes::line(from, to, width, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn text(&mut self, overlay: TextOverlay) {
        self.overlays.push(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_session;
    use crate::sim::{GameSession, TickInput, tick};

    #[test]
    fn test_batch_for_session() {
        let mut session = GameSession::new(4);
        let mut batch = FrameBatch::new();

        draw_session(&session, None, &mut batch);
        // Two bodies (6 each), two borders (24 each), one barrel (6)
        assert_eq!(batch.vertices.len(), 6 + 24 + 6 + 6 + 24);
        assert_eq!(batch.overlays.len(), 1);

        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut session, &fire);
        tick(&mut session, &fire);
        draw_session(&session, Some(60), &mut batch);
        assert_eq!(
            batch.vertices.len(),
            66 + 2 * (CIRCLE_SEGMENTS as usize * 3)
        );
        assert_eq!(batch.overlays.len(), 2);
        assert_eq!(batch.clear_color, colors::BACKGROUND);
    }

    #[test]
    fn test_projectile_color() {
        let mut batch = FrameBatch::new();
        batch.fill_circle(Vec2::new(5.0, 5.0), 4.0, colors::PROJECTILE);
        assert!(batch.vertices.iter().all(|v| v.color == colors::PROJECTILE));
        batch.reset();
        assert!(batch.vertices.is_empty());
    }
}
