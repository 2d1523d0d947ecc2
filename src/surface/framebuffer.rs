use super::DisplaySurface;
use std::fmt;

/// In-memory surface, one byte per pixel. Handy for host-side previews and
/// for checking what a blit produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// # Panics
    ///
    /// If `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = match width.checked_mul(height) {
            Some(len) => len,
            None => panic!("frame buffer of {}x{} pixels is too large", width, height),
        };
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x] != 0
    }

    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    pub fn count_lit(&self) -> usize {
        self.pixels.iter().filter(|v| **v != 0).count()
    }
}

impl DisplaySurface for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = on as u8;
        }
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.pixels.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for v in row {
                write!(f, "{}", if *v != 0 { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
