use crate::constants::{PAGES_PER_SHEET, SIDES_PER_SHEET};
use crate::options::BookletOptions;
use crate::types::*;

/// Calculate statistics for a booklet without building the layout
pub fn calculate_statistics<N>(total_pages: N, options: &BookletOptions) -> Result<BookletStatistics>
where
    N: TryInto<PageCount, Error = BookletError>,
{
    let source_pages = total_pages.try_into()?.get();
    let sequence = options.page_sequence(source_pages)?;

    let logical_pages = sequence.logical_len()?;
    let padded_pages = sequence.padded_len()?;
    let output_sheets = padded_pages / PAGES_PER_SHEET;

    Ok(BookletStatistics {
        source_pages,
        flyleaf_pages: sequence.leading_blanks + sequence.trailing_blanks,
        padded_pages,
        output_sheets,
        output_pages: output_sheets * SIDES_PER_SHEET,
        blank_pages_added: padded_pages - logical_pages,
    })
}
