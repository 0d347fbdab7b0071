use serde::de::DeserializeOwned;

use crate::error::FrontMatterError;
use crate::extractor::first_block_text;

/// Deserialize the first front matter block into a typed value.
///
/// Returns `Ok(None)` when the document has no block at all.
pub fn parse<T: DeserializeOwned>(content: &str) -> Result<Option<T>, FrontMatterError> {
    let code = match first_block_text(content) {
        Some(code) => code,
        None => return Ok(None),
    };

    let value = serde_yaml::from_str(&code)?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct PostMeta {
        title: String,
        draft: Option<bool>,
    }

    #[test]
    fn test_parse_typed_front_matter() {
        let meta: PostMeta = parse("---\ntitle: Typed\ndraft: true\n---\nBody")
            .unwrap()
            .unwrap();

        assert_eq!(meta.title, "Typed");
        assert_eq!(meta.draft, Some(true));
    }

    #[test]
    fn test_parse_without_front_matter() {
        let meta: Option<PostMeta> = parse("Body only").unwrap();
        assert!(meta.is_none());
    }

    #[test]
    fn test_parse_mismatched_front_matter() {
        let result: Result<Option<PostMeta>, _> = parse("---\ndraft: true\n---\n");
        assert!(result.is_err());
    }
}
