//! Engine operations, grouped by concern.

mod cattle;
mod feeding;
mod financial;
mod milk;
mod reports;
