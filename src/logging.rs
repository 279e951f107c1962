use std::fs::File;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Set to enable the `debug.log` file in the working directory.
pub const DEBUG_ENV: &str = "LORE_DEBUG";

/// Warnings and above go to stderr. With `LORE_DEBUG` set, everything down
/// to debug level is also written to `debug.log`, which keeps the terminal
/// clean while the preview viewport is open.
pub fn init() {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if std::env::var_os(DEBUG_ENV).is_some() {
        match File::create("debug.log") {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file)),
            Err(e) => eprintln!("cannot create debug.log: {}", e),
        }
    }

    let _ = CombinedLogger::init(loggers);
}
