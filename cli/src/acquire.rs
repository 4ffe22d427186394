//! Validation of the user supplied path, then decoding.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::ToolError;

/// Accept exactly one path naming a readable image file.
pub fn single_file(paths: &[PathBuf]) -> Result<&Path, ToolError> {
    match paths {
        [] => Err(ToolError::Usage),
        [path] if path.is_file() => Ok(path.as_path()),
        [path] => Err(ToolError::NotAFile(path.clone())),
        more => Err(ToolError::TooManyFiles(more.len())),
    }
}

/// Open and decode the image, guessing its format from the content.
pub fn decode(path: &Path) -> Result<DynamicImage, ToolError> {
    let file = File::open(path).map_err(|source| ToolError::InUse {
        path: path.to_owned(),
        source,
    })?;

    let not_an_image = |source: image::ImageError| ToolError::NotAnImage {
        path: path.to_owned(),
        source,
    };

    let reader = image::io::Reader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|err| not_an_image(image::ImageError::IoError(err)))?;
    let image = reader.decode().map_err(not_an_image)?;

    log::info!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}
