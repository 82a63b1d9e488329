use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;

/// Output of the upstream image-analysis model for one product photo.
/// Immutable once produced; this engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageAnalysisResult {
    /// Product name as recognized from the image.
    pub product_name: String,
    /// Category label (e.g. "apparel", "electronics"). May be unrecognized.
    pub category: String,
    /// Free-text description of what the model saw.
    pub description: String,
    /// Model confidence in the recognition.
    pub confidence: Confidence,
    /// Optional HS-code guess from the model.
    pub hs_code_guess: Option<String>,
    /// Keywords extracted from the image, used to build evidence queries.
    #[serde(default)]
    pub keywords: Vec<String>,
}
