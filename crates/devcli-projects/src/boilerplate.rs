//! Boilerplate file generation
//!
//! Writes a single source file rendered from a fixed template. The file's
//! stem (`Foo` for `Foo.js`) becomes the identifier inside the template.
//! Existing files are never overwritten.

use crate::error::{Error, Result};
use crate::templates::render_boilerplate;
use crate::types::FileType;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{debug, info};

/// Generates boilerplate files below a base directory
#[derive(Debug, Clone)]
pub struct BoilerplateGenerator {
    base_dir: Utf8PathBuf,
}

impl BoilerplateGenerator {
    /// Create a generator writing relative to `base_dir`
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Render the `file_type` template and write it to `file_name`
    ///
    /// # Returns
    /// Path of the written file
    ///
    /// # Errors
    /// - [`Error::FileExists`] if the destination is already present (nothing is written)
    /// - [`Error::InvalidName`] if `file_name` is empty, absolute, or escapes the base directory
    pub fn generate(&self, file_type: FileType, file_name: &str) -> Result<Utf8PathBuf> {
        let relative = Self::check_file_name(file_name)?;
        let path = self.base_dir.join(relative);

        if path.exists() {
            return Err(Error::file_exists(file_name.trim()));
        }

        let identifier = relative
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| Error::invalid_name(file_name, "file name has no stem"))?;

        let content = render_boilerplate(file_type, identifier);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                debug!("Creating parent directory {}", parent);
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    Error::file_exists(file_name.trim())
                } else {
                    Error::Io(e)
                }
            })?;
        file.write_all(content.as_bytes())?;

        info!("Generated {} file '{}'", file_type, path);
        Ok(path)
    }

    fn check_file_name(file_name: &str) -> Result<&Utf8Path> {
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_name(file_name, "file name cannot be empty"));
        }

        let path = Utf8Path::new(trimmed);
        for component in path.components() {
            match component {
                Utf8Component::Normal(_) | Utf8Component::CurDir => {}
                _ => {
                    return Err(Error::invalid_name(
                        file_name,
                        "file name must stay inside the current directory",
                    ))
                }
            }
        }
        Ok(path)
    }
}
