use std::fs::{self, OpenOptions};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::error::{IconError, IconResult};

/// Location the tray application loads its icon resource from, relative to
/// the repository root the generators are run in.
pub const DEFAULT_OUTPUT_PATH: &str = "src-tauri/resources/tray-icon.png";
const TEMP_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_default_path() -> Self {
        Self::with_path(DEFAULT_OUTPUT_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Encodes `canvas` as PNG and replaces the target file.
    ///
    /// The bytes go to a sibling temp file first and are renamed over the
    /// target, so a failed run leaves an existing icon untouched. The output
    /// directory is never created.
    pub fn write_png(&self, canvas: &Canvas) -> IconResult<usize> {
        let parent = self.parent_dir();
        if !parent.is_dir() {
            return Err(IconError::MissingOutputDirectory {
                path: parent.to_path_buf(),
            });
        }

        let bytes = encode_png(canvas)?;
        let tmp_path = self.temp_path();
        if let Err(err) = write_file(&tmp_path, &bytes) {
            fs::remove_file(&tmp_path).ok();
            return Err(err);
        }
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            fs::remove_file(&tmp_path).ok();
            return Err(IconError::Io(err));
        }

        tracing::info!(
            path = %self.path.display(),
            bytes = bytes.len(),
            width = canvas.width(),
            height = canvas.height(),
            "wrote tray icon"
        );
        Ok(bytes.len())
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::with_default_path()
    }
}

/// Serializes the canvas as an RGBA PNG. The encoder emits no timestamps,
/// so equal canvases always yield equal bytes.
pub fn encode_png(canvas: &Canvas) -> IconResult<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn write_file(path: &Path, bytes: &[u8]) -> IconResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
