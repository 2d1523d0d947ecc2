mod bitmap;
mod blit;
mod error;
pub mod header;
mod icons;
mod logger;
mod surface;

pub use bitmap::{Bitmap, Pixel, bytes_per_row};
pub use blit::{Blitter, blit};
pub use error::IconError;
pub use icons::{ICON_HEIGHT, ICON_WIDTH, IconDef, IconId, IconTable, IconTableBuilder, builtin_defs};
pub use logger::{FacadeLogger, LogLevel, Logger};
pub use surface::{DisplaySurface, FrameBuffer};
