//! Specimen persistence collaborator
//!
//! The engine never reaches into ambient state for documents; a
//! [`SpecimenStore`] is handed to the runtime. `update` always receives a full
//! replacement of whatever fields it carries, never a deep patch.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::ids::SpecimenId;
use crate::model::specimen::{Specimen, SpecimenPatch};
use crate::util::path::is_plain_segment;

#[derive(Debug)]
pub enum StoreError {
    NotFound(SpecimenId),
    AlreadyExists(SpecimenId),
    /// The id cannot be used as a file name inside the store
    InvalidId(SpecimenId),
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "specimen not found ({id})"),
            Self::AlreadyExists(id) => write!(f, "specimen already exists ({id})"),
            Self::InvalidId(id) => write!(f, "invalid specimen id (\"{id}\")"),
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Parse { path, message } => {
                write!(f, "failed to parse {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Document store for specimens
pub trait SpecimenStore {
    fn get(&self, id: &SpecimenId) -> Result<Specimen, StoreError>;

    fn update(&mut self, id: &SpecimenId, patch: SpecimenPatch) -> Result<(), StoreError>;

    fn create(&mut self, specimen: Specimen) -> Result<(), StoreError>;

    fn list(&self) -> Result<Vec<SpecimenId>, StoreError>;
}

/// In-memory store, also counts writes
#[derive(Debug, Default)]
pub struct MemoryStore {
    specimens: HashMap<SpecimenId, Specimen>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specimen(specimen: Specimen) -> Self {
        let mut store = Self::new();
        store.specimens.insert(specimen.id.clone(), specimen);
        store
    }

    /// Number of successful `update` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SpecimenStore for MemoryStore {
    fn get(&self, id: &SpecimenId) -> Result<Specimen, StoreError> {
        self.specimens
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn update(&mut self, id: &SpecimenId, patch: SpecimenPatch) -> Result<(), StoreError> {
        let specimen = self
            .specimens
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        specimen.apply_patch(patch);
        self.writes += 1;
        Ok(())
    }

    fn create(&mut self, specimen: Specimen) -> Result<(), StoreError> {
        if self.specimens.contains_key(&specimen.id) {
            return Err(StoreError::AlreadyExists(specimen.id));
        }
        self.specimens.insert(specimen.id.clone(), specimen);
        Ok(())
    }

    fn list(&self) -> Result<Vec<SpecimenId>, StoreError> {
        let mut ids: Vec<_> = self.specimens.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

/// One pretty-printed `<id>.json` file per specimen
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &SpecimenId) -> Result<PathBuf, StoreError> {
        if !is_plain_segment(id.as_str()) {
            return Err(StoreError::InvalidId(id.clone()));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }

    fn write(&self, specimen: &Specimen) -> Result<(), StoreError> {
        let path = self.path_for(&specimen.id)?;
        let contents =
            serde_json::to_string_pretty(specimen).map_err(|e| StoreError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&path, contents).map_err(|source| StoreError::Io { path, source })
    }
}

impl SpecimenStore for JsonDirStore {
    fn get(&self, id: &SpecimenId) -> Result<Specimen, StoreError> {
        let path = self.path_for(id)?;
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.clone()))
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
            path,
            message: e.to_string(),
        })
    }

    fn update(&mut self, id: &SpecimenId, patch: SpecimenPatch) -> Result<(), StoreError> {
        let mut specimen = self.get(id)?;
        specimen.apply_patch(patch);
        self.write(&specimen)?;
        tracing::debug!(specimen = %id, "wrote {}.json", id);
        Ok(())
    }

    fn create(&mut self, specimen: Specimen) -> Result<(), StoreError> {
        if self.path_for(&specimen.id)?.exists() {
            return Err(StoreError::AlreadyExists(specimen.id));
        }
        self.write(&specimen)
    }

    fn list(&self) -> Result<Vec<SpecimenId>, StoreError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;
        let mut ids: Vec<SpecimenId> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(SpecimenId::new)
            })
            .collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::PageId;
    use crate::model::page::SpecimenPage;

    #[test]
    fn test_memory_store_counts_writes() {
        let specimen = Specimen::new(SpecimenId::new("s1"), "S", "serif");
        let mut store = MemoryStore::with_specimen(specimen);
        store
            .update(&SpecimenId::new("s1"), SpecimenPatch::default())
            .unwrap();
        assert_eq!(store.writes(), 1);
        assert!(matches!(
            store.update(&SpecimenId::new("nope"), SpecimenPatch::default()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_json_dir_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::open(dir.path()).unwrap();
        let specimen = Specimen::new(SpecimenId::new("s1"), "S", "serif");
        store.create(specimen.clone()).unwrap();
        assert!(matches!(
            store.create(specimen),
            Err(StoreError::AlreadyExists(_))
        ));

        let pages = vec![
            SpecimenPage::new(PageId::new("a"), "A"),
            SpecimenPage::new(PageId::new("b"), "B"),
        ];
        store
            .update(&SpecimenId::new("s1"), SpecimenPatch::pages(pages.clone()))
            .unwrap();

        let loaded = store.get(&SpecimenId::new("s1")).unwrap();
        assert_eq!(loaded.pages, pages);
        assert_eq!(store.list().unwrap(), vec![SpecimenId::new("s1")]);
    }

    #[test]
    fn test_json_dir_store_rejects_escaping_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::open(dir.path().join("store")).unwrap();

        let escaping = Specimen::new(SpecimenId::new("../outside"), "S", "serif");
        assert!(matches!(
            store.create(escaping),
            Err(StoreError::InvalidId(_))
        ));
        assert!(!dir.path().join("outside.json").exists());
        assert!(matches!(
            store.get(&SpecimenId::new("a/b")),
            Err(StoreError::InvalidId(_))
        ));
    }

    #[test]
    fn test_json_dir_store_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.get(&SpecimenId::new("ghost")),
            Err(StoreError::NotFound(_))
        ));
    }
}
