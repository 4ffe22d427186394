//! The `directional-filter` tool: decode an image, run the directional edge filter, save it.
//!
//! ```text
//! directional-filter [--config <file.json>] <image>
//! ```
//!
//! See [`config`] for the settings file.
use std::ffi::OsString;
use std::path::PathBuf;

use directional_canvas::{filter, Frame};

pub mod acquire;
pub mod config;
pub mod error;
pub mod io;

use self::config::{load_config, ToolConfig};
use self::error::ToolError;

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub paths: Vec<PathBuf>,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ToolError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if arg == "--config" {
                let path = args.next().ok_or(ToolError::Usage)?;
                parsed.config = Some(path.into());
            } else if arg == "--help" || arg == "-h" {
                return Err(ToolError::Usage);
            } else {
                parsed.paths.push(arg.into());
            }
        }

        Ok(parsed)
    }
}

/// Filter the single image named by `args`, returning the path that was written.
pub fn run(args: &Args) -> Result<PathBuf, ToolError> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ToolConfig::default(),
    };

    let path = acquire::single_file(&args.paths)?;
    let decoded = acquire::decode(path)?;
    let frame = io::to_frame(decoded, config.row_alignment)?;

    let geometry = *frame.geometry();
    let edges = filter(frame.as_bytes(), &geometry)?;
    let edges = Frame::with_bytes(geometry, edges)?;

    let output = config.output_path(path);
    let image = io::to_image(&edges, config.opaque_output)?;
    io::save(&image, &output, config.format.image_format())?;

    log::info!("Wrote {}", output.display());
    Ok(output)
}
