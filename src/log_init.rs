use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Appends every record up to `Debug` to a file.
struct FileLogger {
    path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = writeln!(file, "[{}] {}: {}", record.level(), record.target(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger. Fails if another logger is already set.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    let logger = FileLogger {
        path: path.as_ref().to_path_buf(),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|_| CliError::LoggerInstalled)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
