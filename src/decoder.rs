use image::RgbImage;
use log::debug;

use crate::error::PantryError;

/// Decode an uploaded byte buffer into an RGB pixel grid.
///
/// Accepts the common photographic formats (JPEG, PNG). Truncated or
/// unsupported buffers fail with [`PantryError::Decode`]; no partial grids
/// are ever returned.
pub fn decode(bytes: &[u8]) -> Result<RgbImage, PantryError> {
    let decoded = image::load_from_memory(bytes)?;
    let grid = decoded.to_rgb8();
    debug!("Decoded image: {}x{}", grid.width(), grid.height());
    Ok(grid)
}
