use thiserror::Error;

/// Errors that can occur in the ingredient-to-recipe pipeline
#[derive(Error, Debug)]
pub enum PantryError {
    /// Uploaded bytes are not a decodable raster image
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The detection backend failed or returned a malformed payload
    #[error("Ingredient detection failed: {0}")]
    Inference(String),

    /// The recipe catalog returned a non-success status or malformed payload
    #[error("Recipe catalog error: {0}")]
    Catalog(String),

    /// An outbound call exceeded its deadline
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Recognizer strategy name not known to the factory
    #[error("Unknown recognizer strategy: {0}")]
    UnknownRecognizer(String),
}

/// Coarse classification used by callers (e.g. an HTTP layer) to pick a
/// status family without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller's input was unusable (400-class)
    BadInput,
    /// A remote collaborator was unreachable or misbehaved (502/504-class)
    UpstreamUnavailable,
    /// A referenced entity does not exist (404-class)
    NotFound,
    /// Everything else (500-class)
    Internal,
}

impl PantryError {
    pub fn class(&self) -> ErrorClass {
        match self {
            PantryError::Decode(_) => ErrorClass::BadInput,
            PantryError::Inference(_) | PantryError::Catalog(_) | PantryError::Timeout(_) => {
                ErrorClass::UpstreamUnavailable
            }
            PantryError::Config(_) | PantryError::UnknownRecognizer(_) => ErrorClass::Internal,
        }
    }
}

/// Map a reqwest failure from the catalog client, keeping timeouts distinct.
pub(crate) fn catalog_error(err: reqwest::Error) -> PantryError {
    if err.is_timeout() {
        PantryError::Timeout(err.to_string())
    } else {
        PantryError::Catalog(err.to_string())
    }
}

/// Map a reqwest failure from the detection backend, keeping timeouts distinct.
pub(crate) fn inference_error(err: reqwest::Error) -> PantryError {
    if err.is_timeout() {
        PantryError::Timeout(err.to_string())
    } else {
        PantryError::Inference(err.to_string())
    }
}
