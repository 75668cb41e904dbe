//! Logical page sequence
//!
//! The booklet is laid out over a run of 1-based logical pages:
//! leading flyleaf pages, then the source document, then trailing flyleaf
//! pages. Padding up to a whole number of sheets follows the trailing pages.

use crate::constants::PAGES_PER_SHEET;
use crate::types::*;

/// The logical pages a booklet is built from, before padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSequence {
    /// Blank pages ahead of the document body
    pub leading_blanks: usize,
    /// Pages of the source document
    pub source_pages: usize,
    /// Blank pages after the document body
    pub trailing_blanks: usize,
}

impl PageSequence {
    /// A plain document with no flyleaves
    pub fn new(source_pages: usize) -> Self {
        Self {
            leading_blanks: 0,
            source_pages,
            trailing_blanks: 0,
        }
    }

    pub fn with_blanks(leading_blanks: usize, source_pages: usize, trailing_blanks: usize) -> Self {
        Self {
            leading_blanks,
            source_pages,
            trailing_blanks,
        }
    }

    /// Number of logical pages before padding
    pub fn logical_len(&self) -> Result<usize> {
        self.leading_blanks
            .checked_add(self.source_pages)
            .and_then(|n| n.checked_add(self.trailing_blanks))
            .ok_or_else(|| {
                BookletError::InvalidArgument(format!(
                    "page count {} with {} flyleaf pages overflows",
                    self.source_pages,
                    self.leading_blanks.saturating_add(self.trailing_blanks)
                ))
            })
    }

    /// Logical page count rounded up to a whole number of sheets
    pub fn padded_len(&self) -> Result<usize> {
        let logical = self.logical_len()?;
        logical.checked_next_multiple_of(PAGES_PER_SHEET).ok_or_else(|| {
            BookletError::InvalidArgument(format!(
                "page count {logical} is too large to pad to whole sheets"
            ))
        })
    }

    /// Map a 1-based logical page to what gets printed there
    pub fn resolve(&self, logical_page: usize) -> PageReference {
        match logical_page.checked_sub(self.leading_blanks) {
            Some(body_page) => PageReference::from_logical(body_page, self.source_pages),
            None => PageReference::Blank,
        }
    }
}
