//! Markdown file persistence
//!
//! Writes go through a temp file and a rename, so a reader never sees a
//! half-written digest. Parent directories are created on demand.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `content` to `path`, replacing any existing file
pub fn write_markdown(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)
}

/// Reads a whole markdown file
pub fn read_markdown(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
