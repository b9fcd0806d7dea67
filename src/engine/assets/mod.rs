// Asset management
//
// Finds, parses, and caches the diorama's on-disk assets: OBJ models with
// their materials, and the background audio track.

mod loader;
mod manager;

pub use loader::{AssetLoader, AssetType, CpuMesh};
pub use manager::AssetManager;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("greeter.obj".to_string());
        assert_eq!(err.to_string(), "Asset not found: greeter.obj");
    }
}
