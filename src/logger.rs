use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::Path;
use tui_logger::{init_logger, set_default_level, TuiLoggerFile};

/// Install the logger and route records to `log_file` when one is given.
pub fn setup_logger(level: LevelFilter, log_file: Option<&Path>) {
    // A second init (e.g. from tests) fails harmlessly.
    let _ = init_logger(LevelFilter::Trace);
    set_default_level(level);

    let Some(path) = log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    // TuiLoggerFile panics on open failure, so probe the file first.
    let writable = OpenOptions::new().create(true).append(true).open(path).is_ok();
    if let (true, Some(path)) = (writable, path.to_str()) {
        tui_logger::set_log_file(TuiLoggerFile::new(path));
    }
}
