//! Directory-backed template repository.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use templar_registry::RepositoryError;
use templar_types::{Template, TemplateDraft};

use crate::record::{encode_record, load_record, RecordLoad, RECORD_EXTENSION};
use crate::slug::slugify;

/// Base id used when a name slugifies to nothing.
pub const FALLBACK_ID: &str = "template";

/// Stores each template as `<dir>/<id>.json`.
///
/// Holds no state besides the directory path; every operation reads or
/// writes the filesystem directly.
#[derive(Debug, Clone)]
pub struct FsTemplateRepository {
    dir: PathBuf,
}

/// Maps an I/O error to a `RepositoryError::Storage`.
pub(crate) fn map_io_err(e: io::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

impl FsTemplateRepository {
    /// Creates a repository rooted at `dir`. The directory is created on
    /// first use, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the storage directory if needed. Idempotent.
    pub fn ensure_dir(&self) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.dir).map_err(map_io_err)
    }

    /// Path of the record for `id`, or `None` if `id` cannot name a file
    /// inside the storage directory.
    pub(crate) fn record_path(&self, id: &str) -> Option<PathBuf> {
        if !is_addressable(id) {
            return None;
        }
        Some(self.dir.join(format!("{id}.{RECORD_EXTENSION}")))
    }

    /// Loads every record file in id order, reporting unreadable ones as
    /// [`RecordLoad::Skipped`] instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the directory itself cannot be
    /// created or read.
    pub fn scan(&self) -> Result<Vec<RecordLoad>, RepositoryError> {
        self.ensure_dir()?;
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)
            .map_err(map_io_err)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_record_extension(path))
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths.iter().map(|p| load_record(p)).collect())
    }

    /// Loads a single record; missing and corrupt files both yield `None`.
    pub(crate) fn load(&self, id: &str) -> Option<Template> {
        let path = self.record_path(id)?;
        if !path.is_file() {
            return None;
        }
        match load_record(&path) {
            RecordLoad::Loaded(template) => Some(template),
            RecordLoad::Skipped { path, reason } => {
                tracing::warn!(path = %path.display(), %reason, "unreadable template record");
                None
            }
        }
    }

    /// Writes a new record under the first free id derived from the draft's
    /// name: `base`, then `base_1`, `base_2`, ...
    ///
    /// Files are opened with create-new semantics, so an existing record is
    /// never overwritten even if another writer claims an id concurrently.
    pub(crate) fn insert(&self, draft: &TemplateDraft) -> Result<Template, RepositoryError> {
        self.ensure_dir()?;
        let base = base_id(&draft.name);
        let mut candidate = base.clone();
        let mut counter: u64 = 1;
        loop {
            let path = self
                .record_path(&candidate)
                .ok_or_else(|| RepositoryError::Storage {
                    message: format!("cannot derive a record path from id '{candidate}'"),
                })?;
            if !path.exists() {
                let template = Template::from_draft(candidate.as_str(), draft.clone());
                match write_new(&path, &encode_record(&template)?) {
                    Ok(()) => return Ok(template),
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                        tracing::debug!(id = %candidate, "id claimed concurrently, retrying");
                    }
                    Err(e) => return Err(map_io_err(e)),
                }
            }
            candidate = format!("{base}_{counter}");
            counter += 1;
        }
    }

    /// Overwrites an existing record, keeping its id.
    pub(crate) fn replace(
        &self,
        id: &str,
        draft: &TemplateDraft,
    ) -> Result<Option<Template>, RepositoryError> {
        let Some(path) = self.record_path(id) else {
            return Ok(None);
        };
        if !path.is_file() {
            return Ok(None);
        }
        let template = Template::from_draft(id, draft.clone());
        fs::write(&path, encode_record(&template)?).map_err(map_io_err)?;
        Ok(Some(template))
    }

    /// Removes a record file. Returns false if there was nothing to remove.
    pub(crate) fn remove(&self, id: &str) -> Result<bool, RepositoryError> {
        let Some(path) = self.record_path(id) else {
            return Ok(false);
        };
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(map_io_err(e)),
        }
    }
}

/// The slug of `name`, or [`FALLBACK_ID`] if it slugifies to nothing.
pub fn base_id(name: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        slug
    }
}

/// Rejects ids that are empty or could escape the storage directory.
fn is_addressable(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(['/', '\\', '\0'])
}

fn has_record_extension(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == RECORD_EXTENSION)
}

fn write_new(path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(content.as_bytes())
}
