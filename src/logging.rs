use std::fmt::{Arguments, Display};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::Level;

/// Route the `log` macros to `path`, appending `timestamp - LEVEL - message`
/// lines. Level is `info` unless `RUST_LOG` says otherwise.
///
/// Call once, at process start.
pub fn init(path: &Path) -> Result<()> {
    let file = open_append(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            let timestamp = buf.timestamp_millis();
            write_line(buf, timestamp, record.level(), record.args())
        })
        .try_init()
        .context("installing logger")?;
    Ok(())
}

/// Open `path` for appending, creating it if needed. Earlier runs are kept.
fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

fn write_line(
    out: &mut impl Write,
    timestamp: impl Display,
    level: Level,
    args: &Arguments<'_>,
) -> io::Result<()> {
    writeln!(out, "{timestamp} - {level} - {args}")
}
