use crate::error::{Result, TrimError};
use serde_json::Value as JsonValue;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Output layout for written documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Two-space indentation
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Read and parse a JSON document from disk
///
/// # Returns
/// * `Ok(JsonValue)` - The parsed document
/// * `Err(TrimError::Io)` - If the file is missing or unreadable
/// * `Err(TrimError::MalformedInput)` - If the contents are not valid JSON
pub fn read_document(path: &Path) -> Result<JsonValue> {
    let text = fs::read_to_string(path).map_err(|e| TrimError::io(path, e))?;

    serde_json::from_str(&text).map_err(|source| TrimError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a document and write it to `path`, replacing any existing file
///
/// The document is written to a temporary file next to `path` and renamed
/// into place once complete, so a failed write never leaves a truncated
/// output behind. Output is UTF-8 with non-ASCII characters written as is,
/// followed by a trailing newline.
///
/// An existing output keeps its permissions. A new output gets the same mode
/// a plain file creation would (0o666 minus the process umask on Unix).
pub fn write_document(path: &Path, document: &JsonValue, style: OutputStyle) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = create_temp_file(dir).map_err(|e| TrimError::io(dir, e))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| TrimError::io(tmp.path(), e))?;
    }

    write_json(BufWriter::new(tmp.as_file()), document, style, tmp.path())?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| TrimError::io(tmp.path(), e))?;

    tmp.persist(path).map_err(|e| TrimError::io(path, e.error))?;
    Ok(())
}

fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Serialize `document` into `writer`, followed by a newline
///
/// I/O failures are reported against `path`.
fn write_json<W: Write>(mut writer: W, document: &JsonValue, style: OutputStyle, path: &Path) -> Result<()> {
    let serialized = match style {
        OutputStyle::Pretty => serde_json::to_writer_pretty(&mut writer, document),
        OutputStyle::Compact => serde_json::to_writer(&mut writer, document),
    };
    serialized.map_err(|e| {
        if e.is_io() {
            TrimError::io(path, e.into())
        } else {
            TrimError::Serialize(e)
        }
    })?;

    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| TrimError::io(path, e))
}
