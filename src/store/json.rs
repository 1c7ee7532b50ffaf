use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    foundation::error::{CalwheelError, CalwheelResult},
    store::{StateRepository, Validate},
};

/// Pretty-printed JSON file holding one `T`.
///
/// Saves go through a sibling temp file and a rename, so a crash never leaves a
/// half-written file behind.
#[derive(Debug)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonFileRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> JsonFileRepository<T> {
    /// Repository backed by the file at `path`; nothing is touched until a load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _value: PhantomData,
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<T> JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Validate + Default,
{
    /// Load the stored value, or the default when the file is missing.
    ///
    /// A file that fails to parse or validate is removed and the default returned.
    pub fn load_or_default(&self) -> CalwheelResult<T> {
        match self.load() {
            Ok(v) => Ok(v),
            Err(CalwheelError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored state, using default");
                Ok(T::default())
            }
            Err(err @ CalwheelError::Io(_)) => Err(err),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "stored state is corrupted, removing it and using default"
                );
                match std::fs::remove_file(&self.path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
                Ok(T::default())
            }
        }
    }
}

impl<T> StateRepository<T> for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Validate,
{
    fn load(&self) -> CalwheelResult<T> {
        let raw = std::fs::read_to_string(&self.path)?;
        let value: T = serde_json::from_str(&raw)?;
        value.validate()?;
        Ok(value)
    }

    fn save(&self, value: &T) -> CalwheelResult<()> {
        value.validate()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state dir '{}'", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(value)?;
        let tmp = self.tmp_path();
        std::fs::write(&tmp, json).with_context(|| format!("write '{}'", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace '{}'", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/json.rs"]
mod tests;
