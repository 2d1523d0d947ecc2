use crate::IconError;
use std::borrow::Cow;
use std::fmt;

/// Draw color for the set bits of a bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pixel {
    #[default]
    On,
    Off,
}

impl Pixel {
    pub const fn is_on(self) -> bool {
        matches!(self, Pixel::On)
    }
}

impl From<bool> for Pixel {
    fn from(on: bool) -> Self {
        if on { Pixel::On } else { Pixel::Off }
    }
}

impl From<Pixel> for bool {
    fn from(pixel: Pixel) -> Self {
        pixel.is_on()
    }
}

pub const fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

// Saturates on overflow. No slice can be `usize::MAX` bytes long, so a
// saturated length never matches real data.
fn packed_len(width: usize, height: usize) -> usize {
    bytes_per_row(width).checked_mul(height).unwrap_or(usize::MAX)
}

/// Monochrome pixel grid, row-major, 8 pixels per byte with the leftmost
/// pixel in the most significant bit. Every row starts on a byte boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) data: Cow<'static, [u8]>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize, data: impl Into<Cow<'static, [u8]>>) -> Result<Self, IconError> {
        let data = data.into();
        let expected = packed_len(width, height);
        if width == 0 || height == 0 || data.len() != expected {
            return Err(IconError::InvalidBitmapDefinition {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn from_static(width: usize, height: usize, data: &'static [u8]) -> Result<Self, IconError> {
        Self::new(width, height, Cow::Borrowed(data))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        bytes_per_row(self.width)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn expected_len(&self) -> usize {
        packed_len(self.width, self.height)
    }

    /// Re-checks the length invariant on an already constructed bitmap.
    pub fn verify(&self) -> Result<(), IconError> {
        let expected = self.expected_len();
        if self.width == 0 || self.height == 0 || self.data.len() != expected {
            return Err(IconError::DataCorruption {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Pixels outside the bitmap read as clear.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bit(x, y)
    }

    // Caller guarantees (x, y) is in bounds and the length invariant holds.
    #[inline]
    pub(crate) fn bit(&self, x: usize, y: usize) -> bool {
        let byte = self.data[y * self.bytes_per_row() + x / 8];
        (byte >> (7 - (x % 8))) & 0x1 != 0
    }

    /// Set pixels in row-major order.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.bit(x, y))
    }

    pub fn count_lit(&self) -> usize {
        self.lit_pixels().count()
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", if self.bit(x, y) { '#' } else { '.' })?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
