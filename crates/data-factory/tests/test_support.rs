//! Shared capability-based filesystem helpers for data-factory tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a unique, empty directory under `target/data-factory-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory.
pub fn unique_temp_dir(prefix: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir_name = format!("{prefix}-{process_id}-{counter}");
    let dir = Utf8PathBuf::from("target")
        .join("data-factory-tests")
        .join(dir_name);
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir)
}

/// Write `contents` to `file_name` inside `dir` through a capability handle.
///
/// # Errors
///
/// Returns any filesystem errors encountered while opening or writing.
pub fn write_file(dir: &Utf8Path, file_name: &str, contents: &str) -> io::Result<()> {
    let handle = Dir::open_ambient_dir(dir, ambient_authority())?;
    handle.write(file_name, contents)
}
