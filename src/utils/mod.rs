pub mod content;

pub use content::{extract_content, has_front_matter, split_front_matter};
