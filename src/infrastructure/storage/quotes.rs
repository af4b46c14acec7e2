//! Quote file loading

use rand::seq::SliceRandom;
use std::path::Path;

use crate::application::errors::StorageError;
use crate::domain::entities::QuoteRecord;

/// Immutable set of quotes loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<QuoteRecord>,
}

impl QuoteStore {
    pub fn new(quotes: Vec<QuoteRecord>) -> Self {
        Self { quotes }
    }

    /// Load a JSON array of `{"quote": .., "author": ..}` records.
    /// A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No quote file at {}, quotes disabled", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let quotes: Vec<QuoteRecord> = serde_json::from_str(&content)
            .map_err(|e| StorageError::Serialization(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded {} quotes from {}", quotes.len(), path.display());
        Ok(Self { quotes })
    }

    pub fn pick_random(&self) -> Result<&QuoteRecord, StorageError> {
        self.quotes
            .choose(&mut rand::thread_rng())
            .ok_or(StorageError::Empty)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
