//! Logging utilities and the bridge from SDL's log output into `log`

use std::ffi::{c_char, c_int, c_void};

pub use log::{debug, error, info, trace, warn};

use crate::context::Sdl;
use crate::sys;

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default filter, still overridable through `RUST_LOG`
///
/// Returns `false` when a logger was already installed.
pub fn init_with_level(level: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init()
        .is_ok()
}

/// `SDL_LogPriority`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum LogPriority {
    /// Most detailed output
    Trace = 1,
    /// Verbose diagnostics
    Verbose = 2,
    /// Debugging output
    Debug = 3,
    /// Informational
    Info = 4,
    /// Warnings
    Warn = 5,
    /// Errors
    Error = 6,
    /// Critical errors
    Critical = 7,
}

impl LogPriority {
    /// Decode a native priority; out-of-range values clamp to the nearest end
    pub fn from_raw(raw: c_int) -> Self {
        match raw {
            i32::MIN..=1 => Self::Trace,
            2 => Self::Verbose,
            3 => Self::Debug,
            4 => Self::Info,
            5 => Self::Warn,
            6 => Self::Error,
            _ => Self::Critical,
        }
    }

    /// Level used when forwarding into `log`
    pub fn level(self) -> log::Level {
        match self {
            Self::Trace | Self::Verbose => log::Level::Trace,
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error | Self::Critical => log::Level::Error,
        }
    }

    /// Lowest SDL priority that still passes a `log` filter
    pub fn from_filter(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Trace => Self::Trace,
            log::LevelFilter::Debug => Self::Debug,
            log::LevelFilter::Info => Self::Info,
            log::LevelFilter::Warn => Self::Warn,
            log::LevelFilter::Error => Self::Error,
            log::LevelFilter::Off => Self::Critical,
        }
    }
}

/// Name of a built-in `SDL_LogCategory`
pub fn category_name(category: c_int) -> &'static str {
    match category {
        0 => "application",
        1 => "error",
        2 => "assert",
        3 => "system",
        4 => "audio",
        5 => "video",
        6 => "render",
        7 => "input",
        8 => "test",
        9 => "gpu",
        _ => "custom",
    }
}

unsafe extern "C" fn forward_native_log(
    _userdata: *mut c_void,
    category: c_int,
    priority: c_int,
    message: *const c_char,
) {
    let message = sys::string_from_ptr(message);
    let level = LogPriority::from_raw(priority).level();
    log::log!(target: "sdl", level, "[{}] {}", category_name(category), message);
}

impl Sdl {
    /// Send SDL's own log output through the `log` facade (target `sdl`)
    pub fn route_native_log(&self) {
        unsafe {
            (self.api().SDL_SetLogOutputFunction)(Some(forward_native_log), std::ptr::null_mut());
        }
        self.set_log_priorities(LogPriority::from_filter(log::max_level()));
    }

    /// Set the priority threshold for every SDL log category
    pub fn set_log_priorities(&self, priority: LogPriority) {
        unsafe { (self.api().SDL_SetLogPriorities)(priority as c_int) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_mapping() {
        assert_eq!(LogPriority::from_raw(1), LogPriority::Trace);
        assert_eq!(LogPriority::from_raw(5), LogPriority::Warn);
        assert_eq!(LogPriority::from_raw(0), LogPriority::Trace);
        assert_eq!(LogPriority::from_raw(42), LogPriority::Critical);

        assert_eq!(LogPriority::Verbose.level(), log::Level::Trace);
        assert_eq!(LogPriority::Critical.level(), log::Level::Error);
        assert_eq!(LogPriority::Info.level(), log::Level::Info);
    }

    #[test]
    fn test_filter_mapping() {
        assert_eq!(LogPriority::from_filter(log::LevelFilter::Debug), LogPriority::Debug);
        assert_eq!(LogPriority::from_filter(log::LevelFilter::Off), LogPriority::Critical);
        assert_eq!(LogPriority::Warn as c_int, 5);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name(5), "video");
        assert_eq!(category_name(19), "custom");
    }

    #[test]
    fn test_forwarding_callback_accepts_null_message() {
        unsafe { forward_native_log(std::ptr::null_mut(), 0, 4, std::ptr::null()) };
    }
}
