//! Rendering module
//!
//! `scene` turns a session into draw commands, `batch` tessellates them into
//! a triangle list, and `pipeline` presents that list through WebGPU.

pub mod batch;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use batch::FrameBatch;
pub use pipeline::{RenderInitError, RenderState};
pub use scene::{Color, Rect, RenderSink, TextAlign, TextOverlay, draw_session};
