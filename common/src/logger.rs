use std::fmt;
use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Timestamped lines on stderr; stdout stays free for the board.
pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    fn format_line(&self, file: &str, line: u32, message: fmt::Arguments<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let location = format!("{}:{}", file_name, line);
        match &self.prefix {
            Some(prefix) => format!("[{timestamp}][{prefix}][{location}] {message}"),
            None => format!("[{timestamp}][{location}] {message}"),
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

/// False until a binary initializes an enabled logger.
pub fn is_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled)
}

pub fn write_line(file: &str, line: u32, message: fmt::Arguments<'_>) {
    if let Some(logger) = LOGGER.get().filter(|logger| logger.enabled) {
        eprintln!("{}", logger.format_line(file, line, message));
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::is_enabled() {
            $crate::logger::write_line(file!(), line!(), format_args!($($arg)*));
        }
    };
}
