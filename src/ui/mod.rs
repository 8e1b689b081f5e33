//! Terminal user interface.
//!
//! # Modules
//!
//! - [`display`]: Banner, conversion tables, success messages
//! - [`progress`]: Line counter for batch conversion
//! - [`prompt`]: Interactive direction, message and plug prompts

pub mod display;
pub mod progress;
pub mod prompt;
