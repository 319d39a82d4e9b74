//! Output module for rendering query results
//!
//! This module handles turning proceedings and result pages into
//! markdown, for the terminal or a file.

mod markdown;

pub use markdown::{format_markdown, generate_markdown};
