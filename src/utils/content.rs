use crate::error::FrontMatterError;
use crate::extractor::locate_first_block;
use crate::types::Mapping;

/// Check if a document opens with a front matter block.
pub fn has_front_matter(content: &str) -> bool {
    matches!(locate_first_block(content), Some((range, _)) if range.start == 0)
}

/// Extract the document body without its leading front matter.
///
/// Documents that do not open with a block come back unchanged.
pub fn extract_content(content: &str) -> String {
    match locate_first_block(content) {
        Some((range, _)) if range.start == 0 => content[range.end..].trim_start().to_string(),
        _ => content.to_string(),
    }
}

/// Split a document into its leading front matter mapping and body.
///
/// Documents without a leading block yield `(None, content)` untouched. A
/// leading block that fails to parse, or parses to something other than a
/// mapping, is an error.
pub fn split_front_matter(content: &str) -> Result<(Option<Mapping>, String), FrontMatterError> {
    let (range, code) = match locate_first_block(content) {
        Some((range, code)) if range.start == 0 => (range, code),
        _ => return Ok((None, content.to_string())),
    };

    let body = content[range.end..].trim_start().to_string();
    match serde_yaml::from_str::<serde_yaml::Value>(&code)? {
        serde_yaml::Value::Mapping(mapping) => Ok((Some(mapping), body)),
        _ => Err(FrontMatterError::NotAMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_front_matter() {
        assert!(has_front_matter("---\ntitle: T\n---\nBody"));
        assert!(has_front_matter("> ---\ntitle: T\n> ---\nBody"));
        assert!(!has_front_matter("Body first.\n\n---\ntitle: T\n---\n"));
        assert!(!has_front_matter("No delimiters at all"));
    }

    #[test]
    fn test_extract_content() {
        let content = "---\ntitle: Post\n---\n\nHello world.";
        assert_eq!(extract_content(content), "Hello world.");

        let plain = "Hello world.";
        assert_eq!(extract_content(plain), plain);
    }

    #[test]
    fn test_split_front_matter() {
        let (mapping, body) =
            split_front_matter("---\ntitle: Post\n---\n\nHello world.").unwrap();
        let mapping = mapping.unwrap();

        assert_eq!(mapping.get("title").and_then(|v| v.as_str()), Some("Post"));
        assert_eq!(body, "Hello world.");
    }

    #[test]
    fn test_split_without_front_matter() {
        let (mapping, body) = split_front_matter("Hello world.").unwrap();
        assert!(mapping.is_none());
        assert_eq!(body, "Hello world.");
    }

    #[test]
    fn test_split_rejects_malformed_block() {
        let result = split_front_matter("---\nkey: [unclosed\n---\nBody");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn test_split_rejects_sequence_block() {
        let result = split_front_matter("---\n- one\n- two\n---\nBody");
        assert!(matches!(result, Err(FrontMatterError::NotAMapping)));
    }
}
