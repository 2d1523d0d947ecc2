mod builtin;

pub use builtin::{ICON_HEIGHT, ICON_WIDTH};

use crate::{Bitmap, FacadeLogger, IconError, LogLevel, Logger, header};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconId {
    Play = 0,
    Pause = 1,
    Heart = 2,
    Temperature = 3,
    SpO2 = 4,
    Ecg = 5,
    Error = 6,
}

impl IconId {
    pub const COUNT: usize = 7;

    pub const ALL: [IconId; Self::COUNT] = [
        IconId::Play,
        IconId::Pause,
        IconId::Heart,
        IconId::Temperature,
        IconId::SpO2,
        IconId::Ecg,
        IconId::Error,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IconId::Play => "play",
            IconId::Pause => "pause",
            IconId::Heart => "heart",
            IconId::Temperature => "temperature",
            IconId::SpO2 => "spo2",
            IconId::Ecg => "ecg",
            IconId::Error => "error",
        }
    }

    /// Name of the array holding this icon in a C header asset.
    pub const fn symbol(self) -> &'static str {
        match self {
            IconId::Play => "play_icon",
            IconId::Pause => "pause_icon",
            IconId::Heart => "heart_icon",
            IconId::Temperature => "temp_icon",
            IconId::SpO2 => "spo2_icon",
            IconId::Ecg => "ecg_icon",
            IconId::Error => "error_icon",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconId {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        IconId::ALL
            .into_iter()
            .find(|id| id.name() == wanted || id.symbol() == wanted)
            .ok_or_else(|| IconError::UnknownIcon(s.to_string()))
    }
}

/// A statically registered icon. Built-ins are submitted through
/// `inventory` and collected when the table is built.
#[derive(Clone, Copy, Debug)]
pub struct IconDef {
    pub id: IconId,
    pub width: usize,
    pub height: usize,
    pub data: &'static [u8],
}

inventory::collect!(IconDef);

impl IconDef {
    pub fn bitmap(&self) -> Result<Bitmap, IconError> {
        Bitmap::from_static(self.width, self.height, self.data)
    }
}

pub fn builtin_defs() -> impl Iterator<Item = IconDef> {
    inventory::iter::<IconDef>.into_iter().copied()
}

enum Source {
    Builtin,
    Defs(Vec<IconDef>),
    Header(String),
}

pub struct IconTableBuilder {
    source: Source,
    logger: Option<Box<dyn Logger>>,
}

impl Default for IconTableBuilder {
    fn default() -> Self {
        Self {
            source: Source::Builtin,
            logger: None,
        }
    }
}

impl IconTableBuilder {
    pub fn defs(mut self, defs: Vec<IconDef>) -> Self {
        self.source = Source::Defs(defs);
        self
    }

    pub fn header(mut self, src: impl Into<String>) -> Self {
        self.source = Source::Header(src.into());
        self
    }

    pub fn logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<IconTable, IconError> {
        let entries = match self.source {
            Source::Builtin => entries_from_defs(builtin_defs()),
            Source::Defs(defs) => entries_from_defs(defs),
            Source::Header(src) => entries_from_header(&src),
        };
        let result = entries.and_then(IconTable::assemble);

        if let Some(logger) = &self.logger {
            match &result {
                Ok(table) => {
                    if logger.log_enabled(LogLevel::Table) {
                        for (id, bitmap) in table.iter() {
                            logger.log(
                                LogLevel::Table,
                                &format!("{}: {}x{}, {} lit", id, bitmap.width(), bitmap.height(), bitmap.count_lit()),
                            );
                        }
                    }
                    if logger.log_enabled(LogLevel::Info) {
                        logger.log(LogLevel::Info, &format!("icon table ready ({} icons)", IconId::COUNT));
                    }
                }
                Err(err) => {
                    if logger.log_enabled(LogLevel::Error) {
                        logger.log(LogLevel::Error, &format!("icon table rejected: {}", err));
                    }
                }
            }
        }

        result
    }
}

fn entries_from_defs(defs: impl IntoIterator<Item = IconDef>) -> Result<Vec<(IconId, Bitmap)>, IconError> {
    defs.into_iter()
        .map(|def| def.bitmap().map(|bitmap| (def.id, bitmap)))
        .collect()
}

fn entries_from_header(src: &str) -> Result<Vec<(IconId, Bitmap)>, IconError> {
    header::parse(src)?
        .into_iter()
        .map(|icon| icon.symbol.parse::<IconId>().map(|id| (id, icon.bitmap)))
        .collect()
}

static GLOBAL: OnceLock<IconTable> = OnceLock::new();

/// Immutable mapping from every `IconId` to its bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconTable {
    // Indexed by `IconId as usize`, always `IconId::COUNT` long.
    bitmaps: Vec<Bitmap>,
}

impl IconTable {
    /// Builds a table from the built-in icons.
    pub fn new() -> Result<Self, IconError> {
        Self::builder().build()
    }

    pub fn builder() -> IconTableBuilder {
        IconTableBuilder::default()
    }

    pub fn from_defs(defs: impl IntoIterator<Item = IconDef>) -> Result<Self, IconError> {
        entries_from_defs(defs).and_then(Self::assemble)
    }

    pub fn from_header(src: &str) -> Result<Self, IconError> {
        entries_from_header(src).and_then(Self::assemble)
    }

    /// Builds the process-wide table on first call. Later calls return the
    /// same instance.
    pub fn init() -> Result<&'static IconTable, IconError> {
        if let Some(table) = GLOBAL.get() {
            return Ok(table);
        }
        let table = Self::builder().logger(Box::new(FacadeLogger)).build()?;
        Ok(GLOBAL.get_or_init(|| table))
    }

    /// The process-wide table.
    ///
    /// # Panics
    ///
    /// If the built-in icon definitions are incomplete or malformed. The
    /// program must not run with a corrupt icon table.
    pub fn global() -> &'static IconTable {
        match Self::init() {
            Ok(table) => table,
            Err(err) => panic!("icon table failed to initialize: {}", err),
        }
    }

    fn assemble(entries: Vec<(IconId, Bitmap)>) -> Result<Self, IconError> {
        let mut slots: [Option<Bitmap>; IconId::COUNT] = Default::default();
        for (id, bitmap) in entries {
            if slots[id as usize].replace(bitmap).is_some() {
                return Err(IconError::DuplicateIcon(id));
            }
        }

        let bitmaps = IconId::ALL
            .into_iter()
            .map(|id| slots[id as usize].take().ok_or(IconError::MissingIcon(id)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bitmaps })
    }

    pub fn get(&self, id: IconId) -> &Bitmap {
        &self.bitmaps[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (IconId, &Bitmap)> {
        IconId::ALL.into_iter().zip(self.bitmaps.iter())
    }
}
