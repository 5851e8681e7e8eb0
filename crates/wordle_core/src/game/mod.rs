//! Pure game rules: guess evaluation and fallback answer selection.
//!
//! Nothing in this module touches storage or the filesystem.

pub mod evaluate;
pub mod fallback;
