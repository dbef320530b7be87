/// Numeric rounding and formatting helpers.
///
/// This module holds the routines that shape every computed value: rounding
/// to a fixed number of decimal places to suppress binary floating-point
/// noise, and rendering a value as the decimal text handed back to callers.
pub mod num;
