use std::io;
use std::path::PathBuf;

use directional_canvas::layout::LayoutError;
use directional_canvas::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("usage: directional-filter [--config <file.json>] <image>")]
    Usage,

    #[error("Not a file! {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Too many files! Expected one image, got {0}")]
    TooManyFiles(usize),

    #[error("File already in use! {}", .path.display())]
    InUse { path: PathBuf, source: io::Error },

    #[error("Not an image! {}", .path.display())]
    NotAnImage {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Unsupported pixel layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("Filter rejected the decoded image: {0}")]
    Filter(#[from] FilterError),

    #[error("Failed to encode the filtered image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}
