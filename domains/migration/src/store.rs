//! Local artifact store
//!
//! Exported artifacts live under `<root>/<resourceType>/<name>.<ext>`, one
//! pretty-printed JSON document per file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use synfab_common::ResourceType;

use crate::error::{MigrationError, Result};

#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resource_dir(&self, resource_type: ResourceType) -> PathBuf {
        self.root.join(resource_type.as_str())
    }

    /// Path of an artifact file; names that would escape the type folder are rejected.
    pub fn artifact_path(&self, resource_type: ResourceType, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
        {
            return Err(MigrationError::InvalidName(name.to_string()));
        }
        Ok(self
            .resource_dir(resource_type)
            .join(resource_type.file_name(name)))
    }

    pub fn exists(&self, resource_type: ResourceType) -> bool {
        self.resource_dir(resource_type).is_dir()
    }

    /// Write `document` with 4-space indentation, creating the folder if needed.
    pub fn write(&self, resource_type: ResourceType, name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.artifact_path(resource_type, name)?;
        let dir = self.resource_dir(resource_type);
        fs::create_dir_all(&dir).map_err(|source| MigrationError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document
            .serialize(&mut serializer)
            .map_err(|source| MigrationError::Serialization {
                path: path.clone(),
                source,
            })?;

        fs::write(&path, buf).map_err(|source| MigrationError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Artifact written");
        Ok(path)
    }

    /// Names of every stored artifact of a type, sorted.
    pub fn list_names(&self, resource_type: ResourceType) -> Result<Vec<String>> {
        let dir = self.resource_dir(resource_type);
        if !dir.is_dir() {
            return Err(MigrationError::PathNotFound(dir));
        }

        let entries = fs::read_dir(&dir).map_err(|source| MigrationError::Io {
            path: dir.clone(),
            source,
        })?;

        let suffix = format!(".{}", resource_type.extension());
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| MigrationError::Io {
                path: dir.clone(),
                source,
            })?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry
                .file_name()
                .to_str()
                .and_then(|file_name| file_name.strip_suffix(suffix.as_str()))
                .filter(|name| !name.is_empty())
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Read a stored artifact; `None` when no such file exists.
    pub fn read(&self, resource_type: ResourceType, name: &str) -> Result<Option<Value>> {
        let path = self.artifact_path(resource_type, name)?;
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read(&path).map_err(|source| MigrationError::Io {
            path: path.clone(),
            source,
        })?;
        let document = serde_json::from_slice(&content)
            .map_err(|source| MigrationError::Serialization { path, source })?;
        Ok(Some(document))
    }
}
