//! Ordered mapping table from header patterns to destination files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{Classification, MappingRule};
use crate::config::{normalize_destination, DEFAULT_FALLBACK_DESTINATION, MAX_MAPPING_FILE_SIZE};
use crate::error::{Result, SplitterError};

/// Ordered list of mapping rules.
///
/// Rules are evaluated in the order they were registered and the first
/// match wins, so overlapping patterns are order-sensitive. Overlaps are
/// not detected or resolved.
#[derive(Debug, Clone)]
pub struct MappingTable {
    rules: Vec<MappingRule>,
    fallback: String,
}

/// On-disk shape of a mapping file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingFile {
    #[serde(default)]
    fallback: Option<String>,
    #[serde(default)]
    mappings: Vec<MappingEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingEntry {
    pattern: String,
    destination: String,
}

impl MappingTable {
    /// Create a new empty table with the default fallback destination.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: DEFAULT_FALLBACK_DESTINATION.to_string(),
        }
    }

    /// Set the fallback destination for unclassified content.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Result<Self> {
        self.fallback = normalize_destination(&fallback.into())?;
        Ok(self)
    }

    /// Append a rule. It is evaluated after all previously registered rules.
    pub fn register(&mut self, rule: MappingRule) {
        self.rules.push(rule);
    }

    /// Classify a header token.
    ///
    /// The token is trimmed before matching. Returns the destination of the
    /// first matching rule, or [`Classification::Unclassified`].
    #[must_use]
    pub fn classify(&self, token: &str) -> Classification<'_> {
        let header = token.trim();
        self.rules
            .iter()
            .find(|rule| rule.matches(header))
            .map_or(Classification::Unclassified, |rule| {
                Classification::Destination(&rule.destination)
            })
    }

    /// Destination for a section, falling back for unclassified headers
    /// and for the header-less leading section.
    #[must_use]
    pub fn destination_for(&self, header: Option<&str>) -> &str {
        header
            .and_then(|h| self.classify(h).destination())
            .unwrap_or(self.fallback.as_str())
    }

    /// Destination used for unclassified content.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &MappingRule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse a table from a YAML mapping document.
    ///
    /// ```
    /// use css_splitter::mapping::{Classification, MappingTable};
    ///
    /// let table = MappingTable::from_yaml_str(
    ///     "mappings:\n  - pattern: 'Footer'\n    destination: css/layout/footer.css\n",
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     table.classify("/* Footer */"),
    ///     Classification::Destination("css/layout/footer.css")
    /// );
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: MappingFile = serde_yaml_ng::from_str(yaml)?;

        let mut table = Self::new();
        if let Some(fallback) = file.fallback {
            table = table.with_fallback(fallback)?;
        }
        for entry in file.mappings {
            table.register(MappingRule::new(&entry.pattern, entry.destination)?);
        }

        Ok(table)
    }

    /// Load a table from a YAML mapping file.
    pub fn load(path: &Path) -> Result<Self> {
        let read_error = |source: std::io::Error| SplitterError::ReadMapping {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(read_error)?.len();
        if size > MAX_MAPPING_FILE_SIZE {
            return Err(SplitterError::MappingTooLarge {
                size,
                max: MAX_MAPPING_FILE_SIZE,
            });
        }

        let yaml = fs::read_to_string(path).map_err(read_error)?;
        let table = Self::from_yaml_str(&yaml)?;

        tracing::debug!(
            path = %path.display(),
            rules = table.len(),
            "Loaded mapping table"
        );

        Ok(table)
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new()
    }
}
