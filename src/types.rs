use crate::error::{Result, TrimError};
use serde::Serialize;
use std::collections::BTreeSet;

/// Set of property keys kept by the filter
///
/// Always non-empty: construction with no keys fails with
/// [`TrimError::EmptyAllowList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    keys: BTreeSet<String>,
}

impl AllowList {
    /// Build an allow-list from any collection of keys
    ///
    /// Keys are trimmed; empty keys are ignored. Duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use geojson_trim::AllowList;
    ///
    /// let allow = AllowList::new(["GEOID", "owner_1", "GEOID"]).unwrap();
    /// assert_eq!(allow.len(), 2);
    /// assert!(allow.contains("GEOID"));
    /// assert!(!allow.contains("foo"));
    /// ```
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: BTreeSet<String> = keys
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keys.is_empty() {
            return Err(TrimError::EmptyAllowList);
        }

        Ok(Self { keys })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// Summary of one filter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Features visited (including those without properties)
    pub features: usize,
    /// Properties retained across all features
    pub kept: usize,
    /// Properties removed across all features
    pub dropped: usize,
}

/// Result of a missing-value scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    /// Property key that was checked
    pub field: String,
    /// Features scanned
    pub total: usize,
    /// Zero-based indices of features where the field is missing
    pub missing_indices: Vec<usize>,
}

impl MissingReport {
    pub fn count(&self) -> usize {
        self.missing_indices.len()
    }
}
