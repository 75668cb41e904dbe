use crate::constants::PAGES_PER_LEAF;
use crate::layout::PageSequence;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    /// Blank leaves ahead of the first page (each leaf = 2 pages)
    pub front_flyleaves: usize,
    /// Blank leaves after the last page (each leaf = 2 pages)
    pub back_flyleaves: usize,
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading booklet options from {}", path.display());
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        log::debug!("saving booklet options to {}", path.display());
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Total blank pages contributed by flyleaves, if it fits in a `usize`
    pub fn flyleaf_pages(&self) -> Option<usize> {
        let front = self.front_flyleaves.checked_mul(PAGES_PER_LEAF)?;
        let back = self.back_flyleaves.checked_mul(PAGES_PER_LEAF)?;
        front.checked_add(back)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.flyleaf_pages().is_none() {
            log::warn!(
                "rejecting flyleaf counts {} + {}",
                self.front_flyleaves,
                self.back_flyleaves
            );
            return Err(BookletError::Config(format!(
                "Flyleaf counts {} (front) and {} (back) are too large",
                self.front_flyleaves, self.back_flyleaves
            )));
        }
        Ok(())
    }

    /// The logical page run for a document of `source_pages` pages
    pub fn page_sequence(&self, source_pages: usize) -> Result<PageSequence> {
        self.validate()?;
        let sequence = PageSequence::with_blanks(
            self.front_flyleaves * PAGES_PER_LEAF,
            source_pages,
            self.back_flyleaves * PAGES_PER_LEAF,
        );
        sequence.padded_len()?;
        Ok(sequence)
    }
}
