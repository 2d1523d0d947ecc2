use crate::{Bitmap, DisplaySurface, IconError, IconId, IconTable, LogLevel, Logger, Pixel};
use std::ops::Range;

/// Draws bitmaps onto a surface. Set bits are drawn with the requested
/// color, clear bits leave the surface untouched, and anything that falls
/// outside the surface is clipped.
#[derive(Default)]
pub struct Blitter {
    logger: Option<Box<dyn Logger>>,
}

// Bitmap columns (or rows) whose target coordinate lands in [0, limit).
fn visible(origin: i64, len: usize, limit: usize) -> Range<usize> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let start = (-origin).clamp(0, len) as usize;
    let end = limit.saturating_sub(origin).clamp(0, len) as usize;
    start..end.max(start)
}

impl Blitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    fn log(&self, level: LogLevel, message: impl FnOnce() -> String) {
        if let Some(logger) = &self.logger {
            if logger.log_enabled(level) {
                logger.log(level, &message());
            }
        }
    }

    /// Returns the number of pixels written. Nothing is drawn if the bitmap
    /// fails its length check.
    pub fn blit<S: DisplaySurface + ?Sized>(
        &self,
        bitmap: &Bitmap,
        surface: &mut S,
        origin_x: i32,
        origin_y: i32,
        color: Pixel,
    ) -> Result<usize, IconError> {
        if let Err(err) = bitmap.verify() {
            self.log(LogLevel::Error, || format!("refusing to blit: {}", err));
            return Err(err);
        }

        let on = color.is_on();
        let (ox, oy) = (origin_x as i64, origin_y as i64);
        let columns = visible(ox, bitmap.width(), surface.width());
        let rows = visible(oy, bitmap.height(), surface.height());

        let mut drawn = 0;
        for y in rows {
            for x in columns.clone() {
                if bitmap.bit(x, y) {
                    surface.set_pixel((ox + x as i64) as usize, (oy + y as i64) as usize, on);
                    drawn += 1;
                }
            }
        }

        self.log(LogLevel::Blit, || {
            format!(
                "{}x{} at ({}, {}): {} pixels drawn",
                bitmap.width(),
                bitmap.height(),
                origin_x,
                origin_y,
                drawn
            )
        });
        Ok(drawn)
    }

    pub fn draw_icon<S: DisplaySurface + ?Sized>(
        &self,
        table: &IconTable,
        id: IconId,
        surface: &mut S,
        origin_x: i32,
        origin_y: i32,
        color: Pixel,
    ) -> Result<usize, IconError> {
        self.blit(table.get(id), surface, origin_x, origin_y, color)
    }
}

/// Blits with a default `Blitter`.
pub fn blit<S: DisplaySurface + ?Sized>(
    bitmap: &Bitmap,
    surface: &mut S,
    origin_x: i32,
    origin_y: i32,
    color: Pixel,
) -> Result<usize, IconError> {
    Blitter::new().blit(bitmap, surface, origin_x, origin_y, color)
}
