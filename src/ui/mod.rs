//! Output rendering: static tables and the interactive picker.

mod menu;
pub mod picker;
pub mod table;

pub use table::TextTable;
