//! JSON configuration
//!
//! The whole [`SegmentOptions`] tree can be loaded from a JSON file.
//! Missing fields keep their defaults, so a file only needs the knobs it
//! changes:
//!
//! ```json
//! { "black_threshold": 110, "grid": { "strategy": "nested" } }
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{SegError, SegResult};
use crate::pipeline::SegmentOptions;

/// Parse options from a JSON string and validate them.
pub fn options_from_json(json: &str) -> SegResult<SegmentOptions> {
    let options: SegmentOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
}

/// Load options from a JSON file.
///
/// # Errors
///
/// [`SegError::ConfigIo`] if the file cannot be read,
/// [`SegError::ConfigParse`] if it is not valid JSON for the options tree,
/// [`SegError::InvalidParameter`] if a value is out of range.
pub fn load_options<P: AsRef<Path>>(path: P) -> SegResult<SegmentOptions> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SegError::ConfigIo {
        path: path.display().to_string(),
        source,
    })?;
    let options = options_from_json(&text)?;
    debug!("loaded segmentation options from {}", path.display());
    Ok(options)
}

/// Serialize options as pretty-printed JSON.
pub fn options_to_json(options: &SegmentOptions) -> SegResult<String> {
    Ok(serde_json::to_string_pretty(options)?)
}
