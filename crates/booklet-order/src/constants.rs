//! Shared constants for booklet page ordering

/// Logical pages printed on one side of a sheet (2-up)
pub const PAGES_PER_SIDE: usize = 2;

/// Logical pages carried by one physical sheet (both sides)
pub const PAGES_PER_SHEET: usize = 2 * PAGES_PER_SIDE;

/// Printed sides per sheet in duplex
pub const SIDES_PER_SHEET: usize = 2;

/// Pages per leaf (front and back)
pub const PAGES_PER_LEAF: usize = 2;
