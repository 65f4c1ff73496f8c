//! Presentation store.
//!
//! Persists presentations as one JSON document per opaque id. The store
//! treats the presentation as an opaque payload: it serializes and
//! deserializes but never mutates the parsed model. Capacity is capped;
//! the oldest entries by update time are evicted on save.

use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::constants::storage as consts;
use crate::enhance::types::EnhancedPresentation;
use crate::error::{Error, Result};
use crate::types::Presentation;

/// A stored presentation with its source text and bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPresentation {
    /// Opaque URL-friendly identifier.
    pub id: String,
    /// Presentation title, denormalized for listings.
    pub title: String,
    /// Author, denormalized for listings.
    pub author: String,
    /// Original PRD source text.
    pub content: String,
    /// Parsed presentation document.
    pub presentation: Presentation,
    /// AI-rendered slides, when enhancement succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<EnhancedPresentation>,
    /// Whether rendering should default to the enhanced slides.
    #[serde(default)]
    pub use_enhanced: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Listing metadata without the full document payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMetadata {
    /// Presentation title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// File-backed presentation store.
#[derive(Debug, Clone)]
pub struct PresentationStore {
    dir: PathBuf,
}

impl PresentationStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store at the platform data directory, or the `PRESO_DATA_DIR`
    /// override when provided.
    pub fn open_default(override_dir: Option<&Path>) -> Result<Self> {
        let dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_dir()
                .ok_or_else(|| Error::storage("Could not resolve a platform data directory"))?
                .join("preso")
                .join("presentations"),
        };
        Self::new(dir)
    }

    /// Save a new presentation and return its generated id.
    pub fn save(
        &self,
        content: &str,
        presentation: &Presentation,
        enhanced: Option<&EnhancedPresentation>,
        use_enhanced: bool,
    ) -> Result<String> {
        let id = generate_id();
        let now = Utc::now();

        let stored = StoredPresentation {
            id: id.clone(),
            title: presentation.meta.title.clone(),
            author: presentation.meta.author.clone(),
            content: content.to_string(),
            presentation: presentation.clone(),
            enhanced: enhanced.cloned(),
            use_enhanced,
            created_at: now,
            updated_at: now,
        };

        self.write(&stored)?;
        self.evict_over_capacity()?;
        Ok(id)
    }

    /// Update an existing presentation in place.
    ///
    /// `enhanced` of `None` keeps the previously stored enhancement.
    pub fn update(
        &self,
        id: &str,
        content: &str,
        presentation: &Presentation,
        enhanced: Option<&EnhancedPresentation>,
        use_enhanced: Option<bool>,
    ) -> Result<()> {
        let mut stored = self
            .get(id)?
            .ok_or_else(|| Error::storage(format!("No stored presentation with id {id}")))?;

        stored.title = presentation.meta.title.clone();
        stored.author = presentation.meta.author.clone();
        stored.content = content.to_string();
        stored.presentation = presentation.clone();
        if let Some(enhanced) = enhanced {
            stored.enhanced = Some(enhanced.clone());
        }
        if let Some(use_enhanced) = use_enhanced {
            stored.use_enhanced = use_enhanced;
        }
        stored.updated_at = Utc::now();

        self.write(&stored)
    }

    /// Fetch a presentation by id.
    pub fn get(&self, id: &str) -> Result<Option<StoredPresentation>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        let stored = serde_json::from_str(&raw)
            .map_err(|e| Error::parse(format!("Corrupt stored presentation {id}: {e}"), path))?;
        Ok(Some(stored))
    }

    /// All stored presentations, most recently updated first.
    ///
    /// Unreadable entries are skipped with a warning rather than failing
    /// the whole listing.
    pub fn get_all(&self) -> Result<Vec<StoredPresentation>> {
        let mut all = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<StoredPresentation>(&raw) {
                Ok(stored) => all.push(stored),
                Err(e) => tracing::warn!("Skipping unreadable entry {}: {e}", path.display()),
            }
        }
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    /// Delete a presentation; returns whether it existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    /// Check whether an id exists.
    #[must_use]
    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).exists()
    }

    /// Listing metadata for one id, without the document payload.
    pub fn metadata(&self, id: &str) -> Result<Option<StoredMetadata>> {
        Ok(self.get(id)?.map(|stored| StoredMetadata {
            title: stored.title,
            author: stored.author,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }))
    }

    fn write(&self, stored: &StoredPresentation) -> Result<()> {
        let json = serde_json::to_string_pretty(stored)?;
        fs::write(self.path_for(&stored.id), json)?;
        Ok(())
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Evict oldest-updated entries beyond the capacity cap.
    fn evict_over_capacity(&self) -> Result<()> {
        let all = self.get_all()?;
        for stale in all.iter().skip(consts::MAX_PRESENTATIONS) {
            tracing::info!("Evicting stored presentation {} ({})", stale.id, stale.title);
            self.delete(&stale.id)?;
        }
        Ok(())
    }
}

/// Generate a short URL-friendly id from a v4 UUID.
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..consts::ID_LENGTH].to_string()
}
