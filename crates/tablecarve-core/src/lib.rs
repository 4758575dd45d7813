//! Core of the tablecarve extractor: an in-memory sheet grid plus the
//! border-driven passes that carve it into value tables.
//!
//! The crate is I/O-free. A collaborator hands it a [`SheetGrid`] of cell
//! values, per-edge border flags and merge ranges; [`extract_tables`] hands
//! back rectangular [`ValueTable`]s ready for serialization.

pub mod border;
pub mod detect;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod pipeline;
pub mod range;
pub mod table;
pub mod value;

pub use border::{paint_adjacency_borders, paint_range, strip_unbordered_and_loose_merges};
pub use detect::find_bordered_tables;
pub use error::TableError;
pub use grid::{Borders, Cell, SheetGrid};
pub use normalize::unmerge_and_fill;
pub use pipeline::extract_tables;
pub use range::{MergeRange, TableRect};
pub use table::{ValueTable, read_table};
pub use value::{ScalarValue, datetime_to_serial, serial_to_datetime};
