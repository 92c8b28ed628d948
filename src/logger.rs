use colored::{Color, ColoredString, Colorize};
use log::Level;

pub fn base(level: log::LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new().level(level)
}

/// Writes `<level>: <message>` lines to stderr with a colored level.
pub fn stderr(base: fern::Dispatch) -> fern::Dispatch {
    base.format(move |out, message, record| {
        let level = record.level();
        let color = match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Blue,
            Level::Debug => Color::Magenta,
            Level::Trace => Color::Green,
        };
        out.finish(format_args!(
            "{} {}",
            ColoredString::from((level.to_string().to_lowercase() + ":").as_str())
                .color(color)
                .to_string(),
            message
        ))
    })
    .chain(std::io::stderr())
}

/// Installs the stderr logger. Fails if a logger is already installed.
pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    stderr(base(level)).apply()
}
