use std::error::Error;
use std::fmt;

/// Error raised when a front matter block cannot be interpreted.
#[derive(Debug)]
pub enum FrontMatterError {
    /// The YAML inside the block failed to parse.
    Yaml(serde_yaml::Error),
    /// The block parsed to a scalar or sequence instead of a mapping.
    NotAMapping,
}

impl fmt::Display for FrontMatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterError::Yaml(err) => write!(f, "YAML error: {}", err),
            FrontMatterError::NotAMapping => write!(f, "front matter is not a mapping"),
        }
    }
}

impl Error for FrontMatterError {}

impl From<serde_yaml::Error> for FrontMatterError {
    fn from(err: serde_yaml::Error) -> Self {
        FrontMatterError::Yaml(err)
    }
}
