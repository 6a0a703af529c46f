//! Helper functions shared by the loader and the page composer

mod collate;
mod date;
mod html;
mod text;

pub use collate::*;
pub use date::*;
pub use html::*;
pub use text::*;
