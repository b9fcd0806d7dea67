// GPU mesh upload and lookup

use super::texture::Texture;
use crate::engine::assets::CpuMesh;
use anyhow::Result;
use std::collections::HashMap;
use wgpu::util::DeviceExt;

/// Handle to an uploaded mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(usize);

/// A mesh resident on the GPU: geometry buffers plus its diffuse texture
/// bind group
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub texture_bind_group: wgpu::BindGroup,
}

/// Uploads CPU meshes and owns the resulting GPU resources
pub struct MeshLibrary {
    meshes: Vec<Mesh>,
    name_to_handle: HashMap<String, MeshHandle>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            name_to_handle: HashMap::new(),
        }
    }

    /// Upload a loaded mesh, creating its texture bind group. Re-uploading
    /// a name returns the existing handle.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture_layout: &wgpu::BindGroupLayout,
        name: &str,
        cpu: &CpuMesh,
    ) -> Result<MeshHandle> {
        if let Some(&handle) = self.name_to_handle.get(name) {
            return Ok(handle);
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Vertex Buffer")),
            contents: bytemuck::cast_slice(&cpu.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{name} Index Buffer")),
            contents: bytemuck::cast_slice(&cpu.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let texture = match &cpu.diffuse {
            Some(img) => Texture::from_image(device, queue, img, Some(name))?,
            None => Texture::from_color(device, queue, cpu.base_color, Some(name))?,
        };

        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{name} Texture Bind Group")),
            layout: texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(Mesh {
            vertex_buffer,
            index_buffer,
            index_count: cpu.indices.len() as u32,
            texture_bind_group,
        });
        self.name_to_handle.insert(name.to_string(), handle);

        Ok(handle)
    }

    /// Get a mesh by handle
    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0)
    }

    /// Look up a previously uploaded mesh by name
    pub fn handle(&self, name: &str) -> Option<MeshHandle> {
        self.name_to_handle.get(name).copied()
    }

    /// Get the number of uploaded meshes
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new()
    }
}
