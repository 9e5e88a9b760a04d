//! Save file management.
//!
//! A finished simulation is stored as `sim_<id>.json` inside the save
//! directory, where `<id>` is the local time of the save. Only the settings
//! are ever loaded back: a saved run is resumed by replaying it from its
//! initial configuration, never from the stored population.

use crate::error::{IoError, Result};
use crate::serialization::{read_json_file, write_json_file};
use formica_core::Settings;
use formica_data::ColonyRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_SAVE_DIRECTORY: &str = "saves";

const FILE_PREFIX: &str = "sim_";
const FILE_SUFFIX: &str = ".json";
const ID_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// On-disk layout of a save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Flat parameter table, see [`Settings::to_map`].
    pub settings: BTreeMap<String, serde_json::Value>,
    pub colony: ColonyRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl SaveFile {
    #[must_use]
    pub fn new(settings: &Settings, colony: ColonyRecord) -> Self {
        Self {
            settings: settings.to_map(),
            colony,
            fingerprint: Some(settings.fingerprint()),
        }
    }

    /// Validates the stored parameter table.
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings::from_map(self.settings.clone())?)
    }
}

/// A directory of save files.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DIRECTORY)
    }
}

impl SaveStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{id}{FILE_SUFFIX}"))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Lists stored saves as a 1-based menu index mapped to save id, in id order.
    pub fn list(&self) -> Result<BTreeMap<usize, String>> {
        self.ensure_dir()?;
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(id) = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
            {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids.into_iter().enumerate().map(|(i, id)| (i + 1, id)).collect())
    }

    /// Writes a new save and returns its id.
    ///
    /// Two saves within the same second get distinct ids (`<time>`, `<time>_2`, ...).
    pub fn save(&self, settings: &Settings, colony: ColonyRecord) -> Result<String> {
        self.ensure_dir()?;
        let stamp = chrono::Local::now().format(ID_FORMAT).to_string();
        let mut id = stamp.clone();
        let mut attempt = 1;
        while self.path_for(&id).exists() {
            attempt += 1;
            id = format!("{stamp}_{attempt}");
        }
        self.save_as(&id, settings, colony)?;
        Ok(id)
    }

    /// Writes a save under an explicit id, replacing any previous one.
    pub fn save_as(&self, id: &str, settings: &Settings, colony: ColonyRecord) -> Result<()> {
        if id.is_empty() || id.contains(['/', '\\']) {
            return Err(IoError::validation(format!("invalid save id {id:?}")));
        }
        self.ensure_dir()?;
        let path = self.path_for(id);
        write_json_file(&SaveFile::new(settings, colony), &path)?;
        tracing::info!(path = %path.display(), "Simulation saved");
        Ok(())
    }

    pub fn load(&self, id: &str) -> Result<SaveFile> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(IoError::not_found(path.display().to_string()));
        }
        read_json_file(&path)
    }

    /// Loads only the validated settings of a save.
    pub fn load_settings(&self, id: &str) -> Result<Settings> {
        self.load(id)?
            .settings()
            .map_err(|e| e.with_context(format!("save {id}")))
    }
}
