//! Drawing building blocks: styling, text and components

pub mod components;
pub mod styling;
pub mod text;
