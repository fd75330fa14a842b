use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Route through a nested host record, e.g. `["primary_ip", "address"]`.
///
/// Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawFieldPath")]
pub struct FieldPath {
    segments: Vec<String>,
}

/// Accepted YAML spellings: a list of segments or a dotted string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldPath {
    Segments(Vec<String>),
    Dotted(String),
}

impl FieldPath {
    pub fn new<I, S>(segments: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ConfigError::EmptyFieldPath);
        }
        Ok(Self { segments })
    }

    /// A path of exactly one top-level key.
    pub fn single(key: &str) -> Self {
        Self {
            segments: vec![key.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The top-level key this path starts from.
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// A path made of the first segment only.
    pub fn root_path(&self) -> FieldPath {
        Self::single(self.root())
    }
}

impl TryFrom<RawFieldPath> for FieldPath {
    type Error = ConfigError;

    fn try_from(raw: RawFieldPath) -> Result<Self, Self::Error> {
        match raw {
            RawFieldPath::Segments(segments) => FieldPath::new(segments),
            RawFieldPath::Dotted(dotted) => dotted.parse(),
        }
    }
}

impl FromStr for FieldPath {
    type Err = ConfigError;

    /// Parses a dotted path such as `rack.name`. Empty segments are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::new(s.split('.').map(str::trim).filter(|part| !part.is_empty()))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_listed_paths_are_equal() {
        let dotted: FieldPath = "rack.name".parse().unwrap();
        let listed = FieldPath::new(["rack", "name"]).unwrap();
        assert_eq!(dotted, listed);
        assert_eq!(dotted.to_string(), "rack.name");
        assert_eq!(dotted.root(), "rack");
        assert_eq!(dotted.root_path().segments(), ["rack".to_string()]);
    }

    #[test]
    fn empty_paths_are_rejected() {
        assert!(matches!(
            FieldPath::new(Vec::<String>::new()),
            Err(ConfigError::EmptyFieldPath)
        ));
        assert!("".parse::<FieldPath>().is_err());
        assert!(" . ".parse::<FieldPath>().is_err());
    }

    #[test]
    fn deserializes_both_yaml_forms() {
        let listed: FieldPath = serde_yaml::from_str("[primary_ip, address]").unwrap();
        let dotted: FieldPath = serde_yaml::from_str("primary_ip.address").unwrap();
        assert_eq!(listed, dotted);

        let empty: Result<FieldPath, _> = serde_yaml::from_str("[]");
        assert!(empty.is_err());
    }
}
