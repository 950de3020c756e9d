//! Rendering
//!
//! `listing` turns a skill listing into an ordered display list with all
//! presentation attributes computed once; `terminal` and `html` are the
//! two front ends consuming it.

pub mod html;
pub mod listing;
pub mod terminal;

pub use listing::{display_list, DisplayRow};
