//! Layout data types
//!
//! These types describe the finished booklet: which pages land on which
//! side of which sheet, in the order sheets are fed to the printer.

use std::fmt;

use super::order::sheet_logical_pages;
use crate::constants::PAGES_PER_SHEET;
use crate::types::*;

/// The two pages printed side by side on one face of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagePair {
    pub left: PageReference,
    pub right: PageReference,
}

impl PagePair {
    pub fn new(left: PageReference, right: PageReference) -> Self {
        Self { left, right }
    }

    pub fn get(&self, position: PagePosition) -> PageReference {
        match position {
            PagePosition::Left => self.left,
            PagePosition::Right => self.right,
        }
    }

    /// Pages in left-to-right order
    pub fn pages(&self) -> [PageReference; 2] {
        [self.left, self.right]
    }

    pub fn is_blank(&self) -> bool {
        self.left.is_blank() && self.right.is_blank()
    }
}

impl fmt::Display for PagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.left, self.right)
    }
}

/// One physical piece of paper, printed on both faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    pub front: PagePair,
    pub back: PagePair,
}

impl Sheet {
    pub fn new(front: PagePair, back: PagePair) -> Self {
        Self { front, back }
    }

    pub fn side(&self, side: SheetSide) -> &PagePair {
        match side {
            SheetSide::Front => &self.front,
            SheetSide::Back => &self.back,
        }
    }

    /// Pages in driver order: front-left, front-right, back-left, back-right
    pub fn pages(&self) -> [PageReference; PAGES_PER_SHEET] {
        [self.front.left, self.front.right, self.back.left, self.back.right]
    }

    pub fn is_blank(&self) -> bool {
        self.front.is_blank() && self.back.is_blank()
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "front{} back{}", self.front, self.back)
    }
}

/// Where a single page lands in the printed stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Position of the sheet in the feed order (0 = first sheet printed)
    pub sheet_index: usize,
    pub sheet_side: SheetSide,
    pub position: PagePosition,
    /// 1-based position in the padded logical sequence
    pub logical_page: usize,
    /// Which side of the folded booklet this page reads on
    pub page_side: PageSide,
    pub page: PageReference,
}

/// The full sheet stack for a booklet
///
/// Built once by [`crate::compute`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookletLayout {
    sheets: Vec<Sheet>,
    source_pages: usize,
    padded_pages: usize,
}

impl BookletLayout {
    pub(crate) fn from_parts(sheets: Vec<Sheet>, source_pages: usize, padded_pages: usize) -> Self {
        Self {
            sheets,
            source_pages,
            padded_pages,
        }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Page count of the source document
    pub fn source_pages(&self) -> usize {
        self.source_pages
    }

    /// Logical page count after padding (always a multiple of 4)
    pub fn padded_pages(&self) -> usize {
        self.padded_pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }

    /// Every slot of every sheet, in the order a duplex driver consumes them
    pub fn print_sequence(&self) -> Vec<PageReference> {
        self.sheets.iter().flat_map(Sheet::pages).collect()
    }

    /// Number of slots that print nothing from the source document
    pub fn blank_count(&self) -> usize {
        self.print_sequence().iter().filter(|p| p.is_blank()).count()
    }

    /// Every slot with its sheet, side, position and reading side
    pub fn placements(&self) -> Vec<Placement> {
        let mid = self.padded_pages / 2;
        let mut placements = Vec::with_capacity(self.padded_pages);

        for (sheet_index, sheet) in self.sheets.iter().enumerate() {
            let logical = sheet_logical_pages(sheet_index, mid);
            let slots = [
                (SheetSide::Front, PagePosition::Left),
                (SheetSide::Front, PagePosition::Right),
                (SheetSide::Back, PagePosition::Left),
                (SheetSide::Back, PagePosition::Right),
            ];

            for ((sheet_side, position), logical_page) in slots.into_iter().zip(logical) {
                placements.push(Placement {
                    sheet_index,
                    sheet_side,
                    position,
                    logical_page,
                    page_side: PageSide::of_logical_page(logical_page),
                    page: sheet.side(sheet_side).get(position),
                });
            }
        }

        placements
    }

    /// Find where a source page (zero-based) is printed
    pub fn find_page(&self, index: usize) -> Option<Placement> {
        self.placements()
            .into_iter()
            .find(|p| p.page == PageReference::Page(index))
    }
}

impl<'a> IntoIterator for &'a BookletLayout {
    type Item = &'a Sheet;
    type IntoIter = std::slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

impl IntoIterator for BookletLayout {
    type Item = Sheet;
    type IntoIter = std::vec::IntoIter<Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.into_iter()
    }
}

impl fmt::Display for BookletLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sheet) in self.sheets.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "Sheet{i}: {sheet}")?;
        }
        Ok(())
    }
}
