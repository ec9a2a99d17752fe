pub mod logging;
pub mod text;

pub use text::{normalize, normalize_lines, truncate_text};
