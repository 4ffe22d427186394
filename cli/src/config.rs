//! Settings of the command line tool.
//!
//! All settings are optional. They are read from a JSON file given with `--config`:
//!
//! ```json
//! {
//!   "output": "edges.png",
//!   "suffix": "_filtered",
//!   "row_alignment": 4,
//!   "format": "png",
//!   "opaque_output": false
//! }
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ToolError;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Where to write the filtered image. Derived from the input path when absent.
    pub output: Option<PathBuf>,
    /// Appended to the file stem of the input to derive the output path.
    pub suffix: String,
    /// Rows of the decoded buffer start at multiples of this many bytes.
    pub row_alignment: usize,
    pub format: OutputFormat,
    /// Replace the alpha of the filtered image with full opacity.
    ///
    /// The filter sums alpha like any other channel, so opaque inputs produce mostly
    /// transparent outputs. This only affects the saved file.
    pub opaque_output: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            output: None,
            suffix: "_filtered".to_owned(),
            row_alignment: 4,
            format: OutputFormat::Png,
            opaque_output: false,
        }
    }
}

impl ToolConfig {
    /// The path of the filtered image for a given input.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!(
            "{stem}{}.{}",
            self.suffix,
            self.format.extension()
        ))
    }
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ToolConfig, ToolError> {
    let data = fs::read_to_string(path).map_err(|e| ToolError::Config {
        path: path.to_owned(),
        reason: format!("failed to read: {e}"),
    })?;
    parse_config(&data).map_err(|reason| ToolError::Config {
        path: path.to_owned(),
        reason,
    })
}

pub fn parse_config(data: &str) -> Result<ToolConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("failed to parse: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, ToolConfig::default());
        assert_eq!(config.row_alignment, 4);
        assert_eq!(config.format, OutputFormat::Png);
    }

    #[test]
    fn partial() {
        let config = parse_config(r#"{ "format": "bmp", "opaque_output": true }"#).unwrap();
        assert_eq!(config.format, OutputFormat::Bmp);
        assert!(config.opaque_output);
        assert_eq!(config.suffix, "_filtered");
    }

    #[test]
    fn rejects_unknown() {
        assert!(parse_config(r#"{ "kernel": [1, 0, -1] }"#).is_err());
        assert!(parse_config(r#"{ "format": "jpeg" }"#).is_err());
    }

    #[test]
    fn derived_output() {
        let config = ToolConfig::default();
        let output = config.output_path(Path::new("shots/cat.jpeg"));
        assert_eq!(output, Path::new("shots/cat_filtered.png"));

        let config = ToolConfig {
            output: Some(PathBuf::from("edges.bmp")),
            ..ToolConfig::default()
        };
        assert_eq!(config.output_path(Path::new("cat.png")), Path::new("edges.bmp"));
    }
}
