//! Test fixture loader for golden datasets and integration scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use landed_core::models::{ImageAnalysisResult, MarketEstimate};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A full market estimate: price range, one scheduled HS candidate,
/// suppliers, and import history.
pub fn full_market_estimate() -> MarketEstimate {
    load_fixture("market/full_estimate.json")
}

/// A market estimate with conflicting HS candidates.
pub fn ambiguous_market_estimate() -> MarketEstimate {
    load_fixture("market/ambiguous_estimate.json")
}

/// Image analysis for a recognized apparel product.
pub fn apparel_analysis() -> ImageAnalysisResult {
    load_fixture("analysis/knit_pullover.json")
}

/// Image analysis for an unrecognized category with no HS guess.
pub fn confectionery_analysis() -> ImageAnalysisResult {
    load_fixture("analysis/confectionery.json")
}
