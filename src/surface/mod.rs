mod framebuffer;

pub use framebuffer::FrameBuffer;

/// A monochrome target the blitter can draw on. Implemented by display
/// drivers outside this crate.
pub trait DisplaySurface {
    // Visible width in pixels
    fn width(&self) -> usize;

    // Visible height in pixels
    fn height(&self) -> usize;

    // Turn the pixel at the given coordinates on or off. Only called with
    // in-bounds coordinates.
    fn set_pixel(&mut self, x: usize, y: usize, on: bool);
}
