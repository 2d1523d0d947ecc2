use std::fmt;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info = 0,
    Error = 1,
    Table = 2,
    Blit = 3,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Table => write!(f, "TABLE"),
            LogLevel::Blit => write!(f, "BLIT"),
        }
    }
}

pub trait Logger {
    fn log(&self, level: LogLevel, message: &str);
    fn log_enabled(&self, level: LogLevel) -> bool;
}

/// Forwards to the `log` crate, so any `log` backend picks up our messages.
/// `Table` maps to debug and `Blit` to trace.
#[derive(Default, Clone, Copy, Debug)]
pub struct FacadeLogger;

impl FacadeLogger {
    fn level(level: LogLevel) -> log::Level {
        match level {
            LogLevel::Info => log::Level::Info,
            LogLevel::Error => log::Level::Error,
            LogLevel::Table => log::Level::Debug,
            LogLevel::Blit => log::Level::Trace,
        }
    }
}

impl Logger for FacadeLogger {
    fn log(&self, level: LogLevel, message: &str) {
        log::log!(target: "monoicon", Self::level(level), "{}", message);
    }

    fn log_enabled(&self, level: LogLevel) -> bool {
        log::log_enabled!(target: "monoicon", Self::level(level))
    }
}
