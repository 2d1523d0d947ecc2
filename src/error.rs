use crate::IconId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// A bitmap definition has a zero dimension or its packed length does
    /// not match `ceil(width / 8) * height`.
    InvalidBitmapDefinition {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// A bitmap that was valid at construction no longer matches its
    /// dimensions when it is about to be drawn.
    DataCorruption { expected: usize, actual: usize },
    MissingIcon(IconId),
    DuplicateIcon(IconId),
    UnknownIcon(String),
    MalformedHeader { line: usize, reason: String },
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::InvalidBitmapDefinition { width, height, expected, actual } => write!(
                f,
                "invalid {width}x{height} bitmap: expected {expected} packed bytes, got {actual}"
            ),
            IconError::DataCorruption { expected, actual } => write!(
                f,
                "bitmap data corrupted: expected {expected} packed bytes, found {actual}"
            ),
            IconError::MissingIcon(id) => write!(f, "no bitmap defined for icon `{id}`"),
            IconError::DuplicateIcon(id) => write!(f, "icon `{id}` is defined more than once"),
            IconError::UnknownIcon(name) => write!(f, "unknown icon `{name}`"),
            IconError::MalformedHeader { line, reason } => {
                write!(f, "malformed icon header at line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for IconError {}
