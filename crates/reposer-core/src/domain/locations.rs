//! Resolved location tokens and path-template interpolation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::DomainError;

/// The location token every project gets for free, pointing at `./`.
pub const WEB_ROOT_TOKEN: &str = "web_root";

/// Mapping from location token to its canonical absolute directory.
///
/// Built once per invocation from the root package's `locations` option;
/// every directory in the table exists on disk by the time the table is
/// handed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTable {
    entries: BTreeMap<String, PathBuf>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(token.into(), path.into());
    }

    pub fn get(&self, token: &str) -> Option<&Path> {
        self.entries.get(token).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(token, path)| (token.as_str(), path.as_path()))
    }

    /// Substitute every `[token]` placeholder in `template` with the
    /// corresponding absolute path.
    ///
    /// A bracketed name that is token-shaped but absent from the table is
    /// `DomainError::UnknownToken` and aborts resolution of this template
    /// only. Bracketed text that is not token-shaped (spaces, slashes,
    /// empty) passes through literally, as does an unmatched `[`.
    pub fn interpolate(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('[') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let Some(close) = after.find(']') else {
                // Unmatched bracket: literal.
                out.push('[');
                rest = after;
                continue;
            };

            let candidate = &after[..close];
            if is_token_name(candidate) {
                match self.get(candidate) {
                    Some(path) => out.push_str(&path.to_string_lossy()),
                    None => {
                        return Err(DomainError::UnknownToken {
                            token: candidate.to_string(),
                            template: template.to_string(),
                        });
                    }
                }
            } else {
                out.push('[');
                out.push_str(candidate);
                out.push(']');
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_token_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
