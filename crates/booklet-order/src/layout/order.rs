//! Bifold booklet page ordering
//!
//! A short-edge bound booklet is a stack of sheets, each carrying 2 pages
//! per side, folded once down the middle. The first sheet fed to the printer
//! ends up innermost, so it carries the centre spread; each following sheet
//! wraps one ring further out.
//!
//! For a padded page count `P` and `mid = P / 2`, sheet `s` carries:
//!
//! ```text
//! front: [mid - 2s,     mid + 1 + 2s]
//! back:  [mid + 2 + 2s, mid - 1 - 2s]
//! ```
//!
//! For 8 pages (`mid = 4`):
//! - Sheet 0: front [4, 5], back [6, 3]
//! - Sheet 1: front [2, 7], back [8, 1]

use super::sequence::PageSequence;
use super::types::{BookletLayout, PagePair, Sheet};
use crate::constants::PAGES_PER_SHEET;
use crate::types::*;

/// 1-based logical pages for a sheet: front-left, front-right, back-left, back-right.
///
/// `mid` is half the padded page count. The last sheet's back-right slot
/// is always logical page 1, so no slot ever falls below it.
pub(crate) fn sheet_logical_pages(sheet_index: usize, mid: usize) -> [usize; PAGES_PER_SHEET] {
    let step = 2 * sheet_index;
    [mid - step, mid + 1 + step, mid + 2 + step, mid - 1 - step]
}

/// Lay out a logical page sequence as a stack of booklet sheets
pub fn calculate_booklet_layout(sequence: &PageSequence) -> Result<BookletLayout> {
    let padded_count = sequence.padded_len()?;
    let num_sheets = padded_count / PAGES_PER_SHEET;
    let mid = padded_count / 2;

    log::debug!(
        "laying out {} pages ({} logical, {} padded) on {} sheets",
        sequence.source_pages,
        sequence.logical_len()?,
        padded_count,
        num_sheets
    );

    let sheets: Vec<Sheet> = (0..num_sheets)
        .map(|sheet_index| {
            let [front_left, front_right, back_left, back_right] =
                sheet_logical_pages(sheet_index, mid).map(|k| sequence.resolve(k));
            let sheet = Sheet::new(
                PagePair::new(front_left, front_right),
                PagePair::new(back_left, back_right),
            );
            log::trace!("sheet {sheet_index}: {sheet}");
            sheet
        })
        .collect();

    Ok(BookletLayout::from_parts(
        sheets,
        sequence.source_pages,
        padded_count,
    ))
}
