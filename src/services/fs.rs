//! Plain-text persistence: load a file as lines, save a buffer

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Read a file as a list of lines with `\n` / `\r\n` terminators stripped.
///
/// A trailing newline does not produce an extra empty line.
pub fn load_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let bytes = std::fs::read(path)?;
    Ok(split_lines(&bytes))
}

/// Split raw file content into lines, normalizing line endings
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = bytes
        .split(|b| *b == b'\n')
        .map(|line| {
            let end = line
                .iter()
                .rposition(|b| *b != b'\r')
                .map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Write `content` to `path`, creating or truncating it. Returns the bytes written.
pub fn save_lines(path: &Path, content: &[u8]) -> io::Result<usize> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(content)?;
    file.flush()?;
    tracing::info!("wrote {} bytes to {:?}", content.len(), path);
    Ok(content.len())
}
