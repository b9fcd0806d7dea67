// Central asset management

use super::{AssetError, AssetLoader, AssetType, CpuMesh};
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads and caches everything the diorama needs from disk.
///
/// Models are cached by name so scene assembly can ask for the same mesh
/// any number of times and pay the OBJ parse once.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Loaded models by file name
    models: HashMap<String, Arc<CpuMesh>>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            models: HashMap::new(),
        }
    }

    /// Load a model from disk, or return the cached copy
    pub fn load_model(&mut self, name: &str) -> Result<Arc<CpuMesh>> {
        if let Some(model) = self.models.get(name) {
            return Ok(model.clone());
        }

        let model = Arc::new(self.loader.load_model(name)?);
        self.models.insert(name.to_string(), model.clone());
        Ok(model)
    }

    /// Resolve the path of an audio asset, verifying it exists
    pub fn audio_path(&self, name: &str) -> Result<PathBuf> {
        let path = self.loader.resolve_path(AssetType::Audio, name);
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }
        Ok(path)
    }

    /// Check if an asset exists
    pub fn asset_exists(&self, asset_type: AssetType, name: &str) -> bool {
        self.loader.exists(asset_type, name)
    }

    /// Get the number of cached models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}
