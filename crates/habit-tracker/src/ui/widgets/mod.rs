//! Widgets drawn by the layout

pub mod dialogs;
pub mod grid;
pub mod status;
pub mod summary;
