use std::path::Path;

use gospoil_application::{ApplicationError, PosterDecoder};
use gospoil_domain::DecodedPoster;
use image::io::Reader as ImageReader;

/// Decodes cached posters and shrinks them to fit the display box. Smaller
/// images are kept at their own size.
#[derive(Debug, Default)]
pub struct ImageCratePosterDecoder;

impl PosterDecoder for ImageCratePosterDecoder {
    fn decode_poster(
        &self,
        path: &Path,
        max_width: u32,
        max_height: u32,
    ) -> Result<DecodedPoster, ApplicationError> {
        let image = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?
            .decode()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let image = if image.width() > max_width || image.height() > max_height {
            image.thumbnail(max_width, max_height)
        } else {
            image
        };

        let rgba = image.to_rgba8();
        Ok(DecodedPoster {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}
