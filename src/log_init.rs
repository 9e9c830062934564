use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Append log records up to `level` to the file at `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger(path: impl AsRef<Path>, level: LevelFilter) -> io::Result<()> {
    let file_path = path.as_ref().to_path_buf();
    OpenOptions::new().create(true).append(true).open(&file_path)?;

    let logger = FileLogger { file_path, level };
    log::set_boxed_logger(Box::new(logger)).map_err(io::Error::other)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmark::Attributes;

    // One test: the logger is process-wide.
    #[test]
    fn file_logger_records_recovery() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("no-such-dir").join("tagmark.log");
        assert!(init_logger(&missing, LevelFilter::Debug).is_err());

        let path = dir.path().join("tagmark.log");
        init_logger(&path, LevelFilter::Debug).unwrap();
        assert!(init_logger(&path, LevelFilter::Debug).is_err());

        let text = tagmark_markups::default_parser()
            .parse("[blink]x", Attributes::new())
            .unwrap();
        assert_eq!(text.text(), "[blink]x");

        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.contains("[DEBUG]"), "{log}");
        assert!(log.contains("unknown tag `blink` kept as text"), "{log}");
        assert!(!log.contains("[TRACE]"), "{log}");
    }
}
