use crate::error::{Result, TrimError};
use crate::io::OutputStyle;
use crate::types::AllowList;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in allow-lists for the dashboard data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Parcel attributes shown for properties without a homestead exemption
    WithoutExemption,
    /// Tract id, prediction and object id used by the reduced tract layer
    TractReduced,
}

const WITHOUT_EXEMPTION_KEYS: &[&str] = &[
    "X_pred_1",
    "locatin",
    "owner_1",
    "cnss_tr",
    "dominant_language",
    "dominant_pct",
    "sm_ddrs",
    "rntl_lc",
    "cmmrcl_",
    "avg_mr_",
    "GEOID",
    "ownr_c_",
    "lmtd_n_",
    "pp_dnst",
    "mdn_ncm",
];

const TRACT_REDUCED_KEYS: &[&str] = &["GEOID", "_pred1", "objectid"];

impl Preset {
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Preset::WithoutExemption => WITHOUT_EXEMPTION_KEYS,
            Preset::TractReduced => TRACT_REDUCED_KEYS,
        }
    }
}

/// Parse an allow-list key file: one key per line, `#` starts a comment line
pub fn parse_key_file(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Collects allow-list keys from several sources and builds an [`AllowList`]
///
/// Sources are combined as a union.
///
/// # Examples
/// ```
/// use geojson_trim::config::{AllowListBuilder, Preset};
///
/// let allow = AllowListBuilder::new()
///     .preset(Preset::TractReduced)
///     .keys(["owner_1"])
///     .build()
///     .unwrap();
///
/// assert!(allow.contains("GEOID"));
/// assert!(allow.contains("owner_1"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct AllowListBuilder {
    keys: Vec<String>,
}

impl AllowListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(mut self, preset: Preset) -> Self {
        self.keys.extend(preset.keys().iter().map(|k| k.to_string()));
        self
    }

    /// Add keys; each entry may itself be a comma-separated list
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in keys {
            self.keys
                .extend(entry.as_ref().split(',').map(|k| k.trim().to_string()));
        }
        self
    }

    /// Add keys read from a key file
    pub fn key_file(mut self, path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TrimError::io(path, e))?;
        self.keys.extend(parse_key_file(&text));
        Ok(self)
    }

    pub fn build(self) -> Result<AllowList> {
        AllowList::new(self.keys)
    }
}

/// Everything one filter run needs
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub allow: AllowList,
    pub style: OutputStyle,
}

impl FilterConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, allow: AllowList) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            allow,
            style: OutputStyle::default(),
        }
    }

    pub fn style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }
}
