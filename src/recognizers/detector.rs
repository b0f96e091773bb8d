use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbImage};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::io::Cursor;
use std::time::Duration;

use crate::config::DetectorConfig;
use crate::error::{inference_error, PantryError};
use crate::model::IngredientSet;
use crate::recognizers::IngredientRecognizer;

/// Remote object-detection backend. The pretrained model runs behind an
/// inference service; this handle is built once at startup and shared
/// read-only across requests.
pub struct ObjectDetector {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    confidence: f64,
}

impl ObjectDetector {
    /// Create a new detector from configuration
    pub fn new(config: &DetectorConfig) -> Result<Self, PantryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| PantryError::Inference(format!("failed to build HTTP client: {e}")))?;

        Ok(ObjectDetector {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.resolved_api_key(),
            confidence: config.confidence,
        })
    }

    #[doc(hidden)]
    pub fn with_endpoint(endpoint: String, confidence: f64, timeout: Duration) -> Self {
        ObjectDetector {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            api_key: None,
            confidence,
        }
    }

    /// Re-encode the pixel grid as PNG for transport.
    fn encode_png(image: &RgbImage) -> Result<Vec<u8>, PantryError> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| PantryError::Inference(format!("failed to encode pixel grid: {e}")))?;
        Ok(buf.into_inner())
    }
}

#[async_trait]
impl IngredientRecognizer for ObjectDetector {
    fn strategy_name(&self) -> &str {
        "detector"
    }

    async fn recognize(&self, image: &RgbImage) -> Result<IngredientSet, PantryError> {
        let png = Self::encode_png(image)?;
        let encoded = STANDARD.encode(&png);

        debug!(
            "Submitting {}x{} grid to detection backend",
            image.width(),
            image.height()
        );

        let mut request = self
            .client
            .post(format!("{}/v1/detect", self.endpoint))
            .json(&json!({
                "image": encoded,
                "confidence": self.confidence,
            }));
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(inference_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PantryError::Inference(format!(
                "detection backend returned {status}: {body}"
            )));
        }

        let payload: Value = response.json().await.map_err(inference_error)?;
        debug!("Detection response: {payload:?}");

        let predictions = payload["predictions"]
            .as_array()
            .ok_or_else(|| PantryError::Inference("malformed detection payload".to_string()))?;

        // Labels from boxes surviving the confidence threshold, deduplicated
        // and alphabetical. No cap.
        let labels: IngredientSet = predictions
            .iter()
            .filter(|p| p["confidence"].as_f64().unwrap_or(0.0) >= self.confidence)
            .filter_map(|p| p["label"].as_str())
            .collect();

        Ok(labels)
    }
}
