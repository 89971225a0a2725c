//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod schema;
pub mod score;

/// Read an input file, or stdin when the path is `-`, and validate its size
/// against the configured limit. A leading byte-order mark is dropped.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_limited(std::io::stdin().lock(), "stdin", max_bytes).map(strip_bom);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(strip_bom(content))
}

/// Drop a UTF-8 byte-order mark; it is not whitespace to `regex` or `trim`.
fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

/// Read a stream to the end, stopping one byte past the limit.
fn read_limited<R: Read>(reader: R, name: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            reader
                .take(max as u64 + 1)
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {name}"))?;
            if content.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut content)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    Ok(content)
}
