// Asset loading functionality

use super::AssetError;
use crate::engine::renderer::ModelVertex;
use anyhow::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Model,
    Texture,
    Audio,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Model => "models",
            AssetType::Texture => "textures",
            AssetType::Audio => "audio",
        }
    }

    /// Get supported file extensions for this asset type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AssetType::Model => &["obj"],
            AssetType::Texture => &["png", "jpg", "jpeg"],
            AssetType::Audio => &["ogg", "mp3"],
        }
    }
}

/// A mesh as loaded from disk, ready to upload to the GPU
#[derive(Debug, Clone)]
pub struct CpuMesh {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    /// Diffuse map, if the material references one that decodes
    pub diffuse: Option<image::DynamicImage>,
    /// Flat color fallback when no diffuse map is available
    pub base_color: [u8; 4],
}

/// Asset loader responsible for finding and loading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Check if an asset exists
    pub fn exists(&self, asset_type: AssetType, name: &str) -> bool {
        self.resolve_path(asset_type, name).exists()
    }

    /// Load an OBJ model, merging all of its groups into one mesh
    pub fn load_model(&self, name: &str) -> Result<CpuMesh> {
        let path = self.resolve_path(AssetType::Model, name);
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        let (models, materials) = tobj::load_obj(
            &path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|e| AssetError::LoadError(format!("Failed to parse {}: {}", name, e)))?;

        if models.is_empty() {
            return Err(AssetError::LoadError(format!("{} contains no geometry", name)).into());
        }

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut material_id = None;

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len() as u32;
            let vertex_count = mesh.positions.len() / 3;

            for i in 0..vertex_count {
                let normal = if mesh.normals.len() >= (i + 1) * 3 {
                    [
                        mesh.normals[3 * i],
                        mesh.normals[3 * i + 1],
                        mesh.normals[3 * i + 2],
                    ]
                } else {
                    [0.0, 1.0, 0.0]
                };
                let tex_coords = if mesh.texcoords.len() >= (i + 1) * 2 {
                    // OBJ texture space has v growing upward
                    [mesh.texcoords[2 * i], 1.0 - mesh.texcoords[2 * i + 1]]
                } else {
                    [0.0, 0.0]
                };
                vertices.push(ModelVertex {
                    position: [
                        mesh.positions[3 * i],
                        mesh.positions[3 * i + 1],
                        mesh.positions[3 * i + 2],
                    ],
                    normal,
                    tex_coords,
                });
            }

            indices.extend(mesh.indices.iter().map(|&i| base + i));
            if material_id.is_none() {
                material_id = mesh.material_id;
            }
        }

        let (diffuse, base_color) = self.resolve_material(&path, materials, material_id);

        debug!(
            "Loaded model {} ({} vertices, {} indices)",
            name,
            vertices.len(),
            indices.len()
        );

        Ok(CpuMesh {
            vertices,
            indices,
            diffuse,
            base_color,
        })
    }

    /// Pick the diffuse map or flat color out of the OBJ's material set
    fn resolve_material(
        &self,
        model_path: &Path,
        materials: Result<Vec<tobj::Material>, tobj::LoadError>,
        material_id: Option<usize>,
    ) -> (Option<image::DynamicImage>, [u8; 4]) {
        let materials = match materials {
            Ok(materials) => materials,
            Err(e) => {
                warn!("Ignoring unreadable material library: {}", e);
                return (None, [255, 255, 255, 255]);
            }
        };

        let Some(material) = material_id.and_then(|id| materials.get(id)) else {
            return (None, [255, 255, 255, 255]);
        };

        if let Some(texture_name) = &material.diffuse_texture {
            // Texture paths in MTL files are relative to the OBJ
            let texture_path = model_path
                .parent()
                .map(|dir| dir.join(texture_name))
                .unwrap_or_else(|| PathBuf::from(texture_name));
            match image::open(&texture_path) {
                Ok(img) => return (Some(img), [255, 255, 255, 255]),
                Err(e) => warn!(
                    "Failed to load diffuse map {}: {}",
                    texture_path.display(),
                    e
                ),
            }
        }

        let base_color = material
            .diffuse
            .map(|[r, g, b]| {
                [
                    (r * 255.0) as u8,
                    (g * 255.0) as u8,
                    (b * 255.0) as u8,
                    255,
                ]
            })
            .unwrap_or([255, 255, 255, 255]);

        (None, base_color)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_directories() {
        assert_eq!(AssetType::Model.default_directory(), "models");
        assert_eq!(AssetType::Texture.default_directory(), "textures");
        assert_eq!(AssetType::Audio.default_directory(), "audio");
    }

    #[test]
    fn test_asset_type_extensions() {
        assert!(AssetType::Model.extensions().contains(&"obj"));
        assert!(AssetType::Texture.extensions().contains(&"png"));
        assert!(AssetType::Audio.extensions().contains(&"ogg"));
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/diorama/assets");
        let path = loader.resolve_path(AssetType::Model, "greeter.obj");

        assert_eq!(path.to_str().unwrap(), "/diorama/assets/models/greeter.obj");
    }

    #[test]
    fn test_missing_model_is_not_found() {
        let loader = AssetLoader::new(".");
        let err = loader.load_model("definitely_missing.obj").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
