use std::path::PathBuf;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the static matrix data asset.
    pub catalog_path: PathBuf,
    /// Path portion of the listing URL (query strings are appended to this).
    pub listing_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            catalog_path: std::env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/matrices.json")),
            listing_path: std::env::var("LISTING_PATH")
                .unwrap_or_else(|_| "/matrices".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/matrices.json"),
            listing_path: "/matrices".to_string(),
        }
    }
}
