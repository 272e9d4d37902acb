//! Tagged, colorized console output shared by the probe, its example binary, and tests.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    let line = format!(
        "[{}] {} {}",
        level.to_string().color(level.color()),
        label.to_string().color(LogColor::Debug),
        msg.to_string().bright_black()
    );
    match level {
        Level::Error | Level::Warning => eprintln!("{line}"),
        Level::Info | Level::Success => println!("{line}"),
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Debug,
    Error,
    Warning,
    Info,
    Gray,
}

/// Formats `key: value` with the key in the given color (gray by default).
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr) => {
        $crate::fmt_kv!($key, $value, $crate::logs::LogColor::Gray)
    };
    ($key:expr, $value:expr, $color:expr) => {
        format!(
            "{}: {}",
            ::colored::Colorize::color($key.to_string().as_str(), $color),
            $value
        )
    };
}

#[macro_export]
macro_rules! print_kv {
    ($key:expr, $value:expr) => {
        println!("{}", $crate::fmt_kv!($key, $value))
    };
    ($key:expr, $value:expr, $color:expr) => {
        println!("{}", $crate::fmt_kv!($key, $value, $color))
    };
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn log_info(label: impl Display, msg: impl Display) { log(Level::Info, label, msg) }
    pub fn log_success(label: impl Display, msg: impl Display) { log(Level::Success, label, msg) }
    pub fn log_warning(label: impl Display, msg: impl Display) { log(Level::Warning, label, msg) }
    pub fn log_error(label: impl Display, msg: impl Display) { log(Level::Error, label, msg) }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Debug      => Color::TrueColor { r: 40,  g: 100, b: 153 },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Gray       => Color::TrueColor { r: 192, g: 192, b: 192 },
            }
        }
    }
}

pub use unformatted::*;
