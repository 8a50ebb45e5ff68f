//! Generic Data Grid
//!
//! One configurable tabular view component shared by every page: fetch-state
//! handling, drag-reorderable columns persisted per table id, single-column
//! sort, global and per-column filters, pagination and CSV export.

pub mod cell;
pub mod columns;
mod data_grid;
pub mod export;
pub mod state;

pub use cell::{CellFormat, ColumnSpec};
pub use data_grid::DataGrid;
