//! Draw commands for one frame
//!
//! `draw_session` reads a session and describes it through a `RenderSink`;
//! the sink decides how pixels (or vertices, or DOM text) get produced.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::*;
use crate::sim::{EnemyTank, GameSession, PlayerTank};

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// Axis-aligned rectangle given by centre and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }
}

/// Horizontal anchoring of a text overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `pos` is the top-left corner
    Left,
    /// `pos` is the top-centre
    Center,
}

/// A line of text drawn over the field
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    /// Field coordinates
    pub pos: Vec2,
    pub align: TextAlign,
    pub color: Color,
}

impl TextOverlay {
    /// CSS `rgb()` form of the text color
    pub fn css_color(&self) -> String {
        let [r, g, b, _] = self.color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("rgb({}, {}, {})", r, g, b)
    }
}

/// Receiver of draw commands
pub trait RenderSink {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Border of `width` pixels inside `rect`
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn text(&mut self, overlay: TextOverlay);
}

pub const SCORE_POS: Vec2 = Vec2::new(20.0, 20.0);
pub const FPS_POS: Vec2 = Vec2::new(FIELD_WIDTH - 20.0, 20.0);
pub const GAME_OVER_TEXT: &str = "GAME OVER! Press R to Restart";

const TRIM_WIDTH: f32 = 2.0;
const BARREL_WIDTH: f32 = 6.0;

fn draw_player<S: RenderSink + ?Sized>(player: &PlayerTank, sink: &mut S) {
    let body = Rect::new(player.pos, PlayerTank::half_extents());
    sink.fill_rect(body, colors::PLAYER_BODY);
    sink.stroke_rect(body, TRIM_WIDTH, colors::PLAYER_TRIM);
    sink.line(
        player.pos,
        player.barrel_tip(),
        BARREL_WIDTH,
        colors::PLAYER_TRIM,
    );
}

fn draw_enemy<S: RenderSink + ?Sized>(enemy: &EnemyTank, sink: &mut S) {
    let body = Rect::new(enemy.pos, EnemyTank::half_extents());
    sink.fill_rect(body, colors::ENEMY_BODY);
    sink.stroke_rect(body, TRIM_WIDTH, colors::ENEMY_TRIM);
}

/// Describe the whole frame: field, tanks, projectiles, then text overlays
pub fn draw_session<S: RenderSink + ?Sized>(session: &GameSession, fps: Option<u32>, sink: &mut S) {
    sink.clear(colors::BACKGROUND);

    draw_player(&session.player, sink);
    draw_enemy(&session.enemy, sink);
    for projectile in &session.projectiles {
        sink.fill_circle(projectile.pos, projectile.radius, colors::PROJECTILE);
    }

    sink.text(TextOverlay {
        text: format!("Score: {}", session.score),
        pos: SCORE_POS,
        align: TextAlign::Left,
        color: colors::TEXT,
    });

    if let Some(fps) = fps {
        sink.text(TextOverlay {
            text: format!("FPS: {}", fps),
            pos: FPS_POS,
            align: TextAlign::Center,
            color: colors::FPS,
        });
    }

    if session.is_game_over() {
        sink.text(TextOverlay {
            text: GAME_OVER_TEXT.to_string(),
            pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            align: TextAlign::Center,
            color: colors::GAME_OVER,
        });
    }
}
