//! # geojson-trim
//!
//! A library for trimming GeoJSON feature properties down to an allow-list,
//! and for counting features whose value for a property is missing.
//!
//! ## Example
//!
//! ```no_run
//! use geojson_trim::config::{AllowListBuilder, FilterConfig, Preset};
//!
//! let allow = AllowListBuilder::new()
//!     .preset(Preset::WithoutExemption)
//!     .build()
//!     .unwrap();
//!
//! let config = FilterConfig::new("parcels.geojson", "parcels_trimmed.geojson", allow);
//! let stats = geojson_trim::filter_file(&config).unwrap();
//! println!("Dropped {} properties", stats.dropped);
//!
//! let report = geojson_trim::count_missing_file("parcels_trimmed.geojson".as_ref(), "owner_1").unwrap();
//! println!("Missing owners: {}", report.count());
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod transform;
pub mod types;

use std::path::Path;

// Re-export commonly used items
pub use config::FilterConfig;
pub use error::{Result, TrimError};
pub use transform::{count_missing, is_missing, retain_allowed_properties};
pub use types::{AllowList, FilterStats, MissingReport};

/// Read `config.input`, trim every feature's properties, write `config.output`
///
/// The output file is only created once the whole document has been parsed,
/// filtered and serialized; on any error it is left untouched.
pub fn filter_file(config: &FilterConfig) -> Result<FilterStats> {
    let mut document = io::read_document(&config.input)?;
    let stats = retain_allowed_properties(&mut document, &config.allow)?;
    io::write_document(&config.output, &document, config.style)?;
    Ok(stats)
}

/// Read a document and count features whose `field` property is missing or blank
pub fn count_missing_file(input: &Path, field: &str) -> Result<MissingReport> {
    let document = io::read_document(input)?;
    count_missing(&document, field)
}
