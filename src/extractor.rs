use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::diagnostics::{Diagnostic, DiagnosticsSink, LogSink};
use crate::types::Mapping;

lazy_static! {
    // A delimited metadata block: an opening `---` line (optionally indented
    // or block-quoted), a non-blank line immediately after it, then the
    // shortest run of content ending in a `---` or `...` line.
    static ref BLOCK_REGEX: Regex = Regex::new(
        r"(?m)^([\t >]*)(---[ \t]*\n[ \t]*[^ \t\n][\s\S]*?\n[\t >]*(?:---|\.\.\.))([ \t]*)$"
    ).unwrap();

    // The closing delimiter line at the tail of a captured block.
    static ref CLOSING_REGEX: Regex = Regex::new(r"[\t >]*(?:---|\.\.\.)$").unwrap();
}

/// Outcome of scanning a document for front matter.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// A block was found and parsed to a mapping.
    Found(Mapping),
    /// No delimited block anywhere in the document.
    NotFound,
    /// A block was found but its YAML was malformed; details went to the sink.
    Invalid,
    /// A block parsed to a scalar or sequence instead of a mapping.
    NotAMapping,
}

impl Extraction {
    /// Collapse to the parsed mapping, dropping the failure detail.
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Extraction::Found(mapping) => Some(mapping),
            _ => None,
        }
    }
}

/// Extract and parse the first front matter block in a document.
///
/// Returns the parsed mapping, or `None` when there is no block, the block
/// is malformed, or it holds something other than a mapping. Malformed
/// blocks are logged through [`LogSink`]; use [`extract`] with your own
/// sink to tell the cases apart.
pub fn first_block(text: &str) -> Option<Mapping> {
    extract(text, &LogSink).into_mapping()
}

/// Scan `text` for the first front matter block and parse it.
///
/// Parse failures are reported to `sink` and never propagated; the result
/// carries the reason extraction came up empty.
pub fn extract(text: &str, sink: &dyn DiagnosticsSink) -> Extraction {
    let code = match first_block_text(text) {
        Some(code) => code,
        None => return Extraction::NotFound,
    };

    match serde_yaml::from_str::<serde_yaml::Value>(&code) {
        Ok(serde_yaml::Value::Mapping(mapping)) => Extraction::Found(mapping),
        Ok(_) => Extraction::NotAMapping,
        Err(e) => {
            sink.report(&Diagnostic::Error(format!(
                "Error parsing front matter: {}",
                e
            )));
            Extraction::Invalid
        }
    }
}

/// Locate the first front matter block and return its text with the closing
/// delimiter line removed. The opening `---` line is kept; YAML reads it as
/// a document start marker.
pub fn first_block_text(text: &str) -> Option<String> {
    locate_first_block(text).map(|(_, code)| code)
}

/// First block match in `text`: the byte range of the whole match and the
/// block text with the closing delimiter stripped.
pub(crate) fn locate_first_block(text: &str) -> Option<(Range<usize>, String)> {
    let captures = BLOCK_REGEX.captures(text)?;
    let whole = captures.get(0)?;
    let code = CLOSING_REGEX.replace(&captures[2], "").into_owned();
    Some((whole.range(), code))
}
