//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::model::{CellRef, PageId, SpecimenId, SpecimenPatch};

/// Folder uploads are filed under in asset storage
pub const ASSET_FOLDER: &str = "specimens";

/// What an uploaded image becomes the background of
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetTarget {
    Page(PageId),
    Cell(CellRef),
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Write a patch to the specimen store.
    /// Sends `AppMsg::PersistCompleted` when done.
    PersistSpecimen {
        specimen_id: SpecimenId,
        patch: SpecimenPatch,
    },
    /// Upload a background image.
    /// Sends `AppMsg::UploadCompleted` when done.
    UploadAsset {
        target: AssetTarget,
        file: PathBuf,
        folder: String,
        owner_id: String,
    },
}

impl Cmd {
    /// Number of store writes this command will issue
    pub fn persist_count(&self) -> usize {
        match self {
            Cmd::PersistSpecimen { .. } => 1,
            Cmd::UploadAsset { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_persist_writes_to_store() {
        let persist = Cmd::PersistSpecimen {
            specimen_id: SpecimenId::new("s"),
            patch: SpecimenPatch::default(),
        };
        assert_eq!(persist.persist_count(), 1);

        let upload = Cmd::UploadAsset {
            target: AssetTarget::Page(PageId::new("page-1")),
            file: PathBuf::from("hero.png"),
            folder: ASSET_FOLDER.to_string(),
            owner_id: "s".to_string(),
        };
        assert_eq!(upload.persist_count(), 0);
    }
}
