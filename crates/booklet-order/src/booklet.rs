//! Booklet page-order calculation
//!
//! Entry points for turning a page count into the sheet stack a duplex
//! printer consumes.

use crate::layout::{BookletLayout, calculate_booklet_layout};
use crate::options::BookletOptions;
use crate::types::*;

/// Compute the sheet layout for a booklet of `total_pages` pages.
///
/// A count of zero yields an empty layout. Negative or fractional counts
/// fail with [`BookletError::InvalidArgument`].
///
/// ```
/// use booklet_order::{PageReference, compute};
///
/// let layout = compute(4usize).unwrap();
/// let sheet = layout.sheets()[0];
/// assert_eq!(sheet.front.left, PageReference::Page(1));
/// assert_eq!(sheet.back.right, PageReference::Page(0));
/// ```
pub fn compute<N>(total_pages: N) -> Result<BookletLayout>
where
    N: TryInto<PageCount, Error = BookletError>,
{
    compute_with_options(total_pages, &BookletOptions::default())
}

/// Compute the sheet layout with flyleaves added around the document
pub fn compute_with_options<N>(total_pages: N, options: &BookletOptions) -> Result<BookletLayout>
where
    N: TryInto<PageCount, Error = BookletError>,
{
    let total_pages = total_pages.try_into()?;

    let sequence = options.page_sequence(total_pages.get())?;
    calculate_booklet_layout(&sequence)
}
