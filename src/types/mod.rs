/// Parsed front matter: a YAML mapping with arbitrary keys and values.
///
/// See [`serde_yaml::Mapping`].
pub type Mapping = serde_yaml::Mapping;

/// Any YAML value that can appear inside a front matter mapping.
pub type Value = serde_yaml::Value;
