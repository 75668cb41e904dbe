use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// A validated, non-negative page count.
///
/// Conversions from signed and floating point values reject negative and
/// fractional counts with [`BookletError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PageCount(usize);

impl PageCount {
    pub const fn new(pages: usize) -> Self {
        Self(pages)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageCount {
    type Error = BookletError;

    fn try_from(value: usize) -> Result<Self> {
        Ok(Self(value))
    }
}

impl TryFrom<u32> for PageCount {
    type Error = BookletError;

    fn try_from(value: u32) -> Result<Self> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| BookletError::InvalidArgument(format!("page count {value} is too large")))
    }
}

impl TryFrom<i64> for PageCount {
    type Error = BookletError;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(BookletError::InvalidArgument(format!(
                "page count must be non-negative, got {value}"
            )));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| BookletError::InvalidArgument(format!("page count {value} is too large")))
    }
}

impl TryFrom<i32> for PageCount {
    type Error = BookletError;

    fn try_from(value: i32) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for PageCount {
    type Error = BookletError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(BookletError::InvalidArgument(format!(
                "page count must be finite, got {value}"
            )));
        }
        if value.fract() != 0.0 {
            return Err(BookletError::InvalidArgument(format!(
                "page count must be a whole number, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(BookletError::InvalidArgument(format!(
                "page count must be non-negative, got {value}"
            )));
        }
        if value > usize::MAX as f64 {
            return Err(BookletError::InvalidArgument(format!(
                "page count {value} is too large"
            )));
        }
        Ok(Self(value as usize))
    }
}

/// What gets printed in one slot of a sheet side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageReference {
    /// Zero-based index into the source document
    Page(usize),
    /// Nothing from the source document; the printer gets an empty page
    Blank,
}

impl PageReference {
    /// Resolve a 1-based logical page number against the source page count.
    ///
    /// Anything outside `1..=total_pages` is padding and becomes `Blank`.
    pub fn from_logical(logical_page: usize, total_pages: usize) -> Self {
        if (1..=total_pages).contains(&logical_page) {
            PageReference::Page(logical_page - 1)
        } else {
            PageReference::Blank
        }
    }

    /// Zero-based source index, if this is a real page
    pub fn index(self) -> Option<usize> {
        match self {
            PageReference::Page(index) => Some(index),
            PageReference::Blank => None,
        }
    }

    /// 1-based page number as a reader would see it
    pub fn page_number(self) -> Option<usize> {
        self.index().map(|index| index + 1)
    }

    pub fn is_blank(self) -> bool {
        matches!(self, PageReference::Blank)
    }
}

impl From<Option<usize>> for PageReference {
    fn from(index: Option<usize>) -> Self {
        match index {
            Some(index) => PageReference::Page(index),
            None => PageReference::Blank,
        }
    }
}

impl From<PageReference> for Option<usize> {
    fn from(page: PageReference) -> Self {
        page.index()
    }
}

impl fmt::Display for PageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageReference::Page(index) => write!(f, "{}", index + 1),
            PageReference::Blank => write!(f, "b"),
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Horizontal position of a page on one side of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagePosition {
    Left,
    Right,
}

/// Which side of the bound booklet a page appears on after folding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSide {
    /// Right-hand page (odd logical page numbers)
    Recto,
    /// Left-hand page (even logical page numbers)
    Verso,
}

impl PageSide {
    pub fn of_logical_page(logical_page: usize) -> Self {
        if logical_page % 2 == 1 {
            PageSide::Recto
        } else {
            PageSide::Verso
        }
    }
}

/// Statistics about a booklet layout
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Page count of the source document
    pub source_pages: usize,
    /// Blank pages added as flyleaves (front and back)
    pub flyleaf_pages: usize,
    /// Logical page count after padding to whole sheets
    pub padded_pages: usize,
    /// Number of physical sheets
    pub output_sheets: usize,
    /// Printed sides (front and back of each sheet)
    pub output_pages: usize,
    /// Blank pages added for padding
    pub blank_pages_added: usize,
}
