//! Renderer trait for native backends.
//!
//! The browser host draws from the packed buffers and JSON snapshot exported by
//! `atom-web`. A Rust-native backend implements this trait instead and receives
//! the same data directly.

use super::instance::RenderBuffer;
use crate::systems::snapshot::FrameSnapshot;

/// Renderer contract. Strictly read-only with respect to the sandbox.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasRenderer {
///     ctx: CanvasRenderingContext2d,
/// }
///
/// impl Renderer for CanvasRenderer {
///     fn backend(&self) -> &'static str { "canvas2d" }
///
///     fn draw(&mut self, frame: &FrameSnapshot, buffers: &RenderBuffer) {
///         // Side panel from `frame`, atoms and links from `buffers`...
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {}
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "webgpu", "headless").
    fn backend(&self) -> &'static str;

    /// Draw one frame.
    fn draw(&mut self, frame: &FrameSnapshot, buffers: &RenderBuffer);

    /// Handle window resize.
    fn resize(&mut self, width: u32, height: u32);
}
