//! Test fixtures for the fatigue workspace: feature-row builders, synthetic weekly
//! series, an in-memory store with failure injection, and a JSON scenario loader.

pub mod builders;
pub mod memory_store;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use builders::{monday, week, weekly_series, FeatureRowBuilder};
pub use memory_store::InMemoryStore;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    loop {
        let candidate = path.join("crates").join("test-fixtures");
        if candidate.exists() {
            return candidate;
        }
        let sibling = path.join("test-fixtures");
        if sibling.join("scenarios").exists() {
            return sibling;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
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
