use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Log to stderr so stdout carries only the resolved version.
pub fn setup_log(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stderr)
        .format(|fmt, record| {
            writeln!(fmt, "[{}] {}", record.level().as_str().to_lowercase(), record.args())
        });

    // a logger may already be installed when embedded in another binary
    let _ = builder.try_init();
}
