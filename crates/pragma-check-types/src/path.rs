use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source unit name as recorded by the compiler (`contracts/token/ERC20.sol`).
///
/// Normalization is minimal so that a path read from a `sources`
/// key and the same path read from an import's `absolutePath` compare equal:
/// - always forward slashes (`/`)
/// - no leading `./`
///
/// Remapped prefixes such as `@openzeppelin/` are kept verbatim.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SourcePath(String);

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourcePath {
    fn from(value: &str) -> Self {
        SourcePath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_leading_dot() {
        assert_eq!(
            SourcePath::new(r".\contracts\utils\Address.sol").as_str(),
            "contracts/utils/Address.sol"
        );
        assert_eq!(SourcePath::new("././a/b.sol").as_str(), "a/b.sol");
    }

    #[test]
    fn keeps_remapped_prefixes() {
        let p = SourcePath::new("@openzeppelin/contracts/access/Ownable.sol");
        assert_eq!(p.as_str(), "@openzeppelin/contracts/access/Ownable.sol");
        assert_eq!(p.to_string(), p.as_str());
        assert_eq!(SourcePath::from("./x.sol"), SourcePath::new("x.sol"));
    }
}
