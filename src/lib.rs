//! Extract and parse the first YAML front matter block from document text.
//!
//! A front matter block opens with a `---` line and closes with a `---` or
//! `...` line; delimiter lines tolerate indentation and block-quote (`>`)
//! prefixes, and a blank line directly after the opening delimiter
//! disqualifies the block (so a horizontal rule is not mistaken for one).
//! The block's YAML must form a mapping; anything else counts as "no front
//! matter". Parse failures never propagate to the caller, they are routed
//! to a [`DiagnosticsSink`].
//!
//! ```
//! let mapping = firstmatter::first_block("---\ntitle: Hello\n---\n\nBody").unwrap();
//! assert_eq!(mapping.get("title").and_then(|v| v.as_str()), Some("Hello"));
//! ```

pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod types;
pub mod utils;

// Re-export the most common items for convenience
pub use diagnostics::{Diagnostic, DiagnosticsSink, LogSink, NullSink};
pub use error::FrontMatterError;
pub use extractor::{extract, first_block, first_block_text, Extraction};
pub use parser::parse;
pub use types::{Mapping, Value};
pub use utils::{extract_content, has_front_matter, split_front_matter};
