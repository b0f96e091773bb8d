use async_trait::async_trait;
use image::RgbImage;
use log::debug;

use crate::error::PantryError;
use crate::model::IngredientSet;
use crate::recognizers::IngredientRecognizer;

const MAX_LABELS: usize = 5;

/// Whole-image color heuristic. Guesses ingredients from the mean intensity
/// of each channel; a stand-in for a trained model, kept for deployments
/// without a detection backend.
pub struct ColorHeuristic;

impl ColorHeuristic {
    /// Mean intensity per channel over the full grid, as (r, g, b).
    /// A zero-pixel grid averages to zero rather than dividing by zero.
    fn mean_channels(image: &RgbImage) -> (f64, f64, f64) {
        let pixel_count = (image.width() as u64) * (image.height() as u64);
        if pixel_count == 0 {
            return (0.0, 0.0, 0.0);
        }

        let mut sums = [0u64; 3];
        for pixel in image.pixels() {
            sums[0] += pixel.0[0] as u64;
            sums[1] += pixel.0[1] as u64;
            sums[2] += pixel.0[2] as u64;
        }

        (
            sums[0] as f64 / pixel_count as f64,
            sums[1] as f64 / pixel_count as f64,
            sums[2] as f64 / pixel_count as f64,
        )
    }

    fn guess(image: &RgbImage) -> IngredientSet {
        let (red, green, blue) = Self::mean_channels(image);
        debug!("Channel means: r={red:.1} g={green:.1} b={blue:.1}");

        let mut labels = IngredientSet::new();
        if red > 100.0 {
            for name in ["tomato", "apple", "red pepper"] {
                labels.insert(name);
            }
        }
        if green > 100.0 {
            for name in ["lettuce", "cucumber", "green pepper"] {
                labels.insert(name);
            }
        }
        // Blue is rare in food imagery, so the bar is lower
        if blue > 80.0 {
            labels.insert("blueberry");
        }

        // Pantry staples, always suggested
        for name in ["onion", "garlic", "potato", "carrot"] {
            labels.insert(name);
        }

        let capped = labels.capped(MAX_LABELS);
        if capped.is_empty() {
            ["onion", "garlic", "tomato"].into_iter().collect()
        } else {
            capped
        }
    }
}

#[async_trait]
impl IngredientRecognizer for ColorHeuristic {
    fn strategy_name(&self) -> &str {
        "color"
    }

    async fn recognize(&self, image: &RgbImage) -> Result<IngredientSet, PantryError> {
        Ok(Self::guess(image))
    }
}
