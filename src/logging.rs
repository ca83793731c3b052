//! Tracing setup
//!
//! Filtering follows `RUST_LOG` (default `info`). Logs are written to
//! `<data dir>/logs/csvpad.log` with daily rotation, because the TUI owns
//! the terminal. Non-interactive runs also get a stderr layer at `warn`.

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn logs_dir() -> std::io::Result<PathBuf> {
    let proj = ProjectDirs::from("", "", "csvpad").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no home directory")
    })?;
    let dir = proj.data_dir().join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn file_appender() -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("csvpad.log")
        .build(logs_dir()?)?;
    Ok(appender)
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(console: bool) {
    let file_layer = match file_appender() {
        Ok(appender) => Some(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        ),
        Err(e) => {
            if console {
                eprintln!("Warning: Could not initialize file logging: {}", e);
            }
            None
        }
    };

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(EnvFilter::new("warn"))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();
}
