//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! The renderer exchanges geometry as flat interleaved triples; the
//! conversion happens once at the boundary so the preprocessing passes
//! can sweep one channel at a time.

use serde::{Deserialize, Serialize};
use umbra_types::{UmbraError, UmbraResult};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// Position and normal data is stored in separate per-channel contiguous
/// arrays. The index buffer is optional: `None` means the mesh is a raw
/// triangle soup where every three consecutive vertices form a triangle,
/// which is how optimized shadow casters usually arrive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasterMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices — each triangle is [v0, v1, v2], stored flat.
    /// `None` for non-indexed triangle soups.
    pub indices: Option<Vec<u32>>,
}

impl CasterMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns true when the mesh carries an index buffer.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Returns the number of triangles.
    ///
    /// For a non-indexed mesh this is the vertex count divided by three;
    /// [`CasterMesh::validate`] guarantees the division is exact.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> glam::Vec3 {
        glam::Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> glam::Vec3 {
        glam::Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Sets the normal of vertex `i`.
    #[inline]
    pub fn set_normal(&mut self, i: usize, x: f32, y: f32, z: f32) {
        self.normal_x[i] = x;
        self.normal_y[i] = y;
        self.normal_z[i] = z;
    }

    /// Returns the three vertex indices of triangle `t`.
    ///
    /// For a non-indexed mesh the corners are the identity triple
    /// `[3t, 3t+1, 3t+2]`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        match &self.indices {
            Some(indices) => [indices[base], indices[base + 1], indices[base + 2]],
            None => [base as u32, base as u32 + 1, base as u32 + 2],
        }
    }

    /// Creates an empty non-indexed mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: None,
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - The mesh has at least one vertex
    /// - All SoA arrays have the same length
    /// - Indexed: index count is a multiple of 3 and every index is in range
    /// - Non-indexed: vertex count is a multiple of 3
    pub fn validate(&self) -> UmbraResult<()> {
        let n = self.pos_x.len();

        if n == 0 {
            return Err(UmbraError::InvalidMesh("Mesh has no vertices".into()));
        }
        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(UmbraError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(UmbraError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        match &self.indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(UmbraError::InvalidMesh(
                        "Index count is not divisible by 3".into(),
                    ));
                }
                for (i, &idx) in indices.iter().enumerate() {
                    if idx as usize >= n {
                        return Err(UmbraError::InvalidMesh(format!(
                            "Index {} at position {} is out of range (vertex count: {})",
                            idx, i, n
                        )));
                    }
                }
            }
            None => {
                if n % 3 != 0 {
                    return Err(UmbraError::InvalidMesh(format!(
                        "Non-indexed vertex count ({}) is not divisible by 3",
                        n
                    )));
                }
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved position and normal triples.
    ///
    /// Converts from the renderer's `[x0, y0, z0, x1, y1, z1, ...]`
    /// attribute layout to SoA. An empty `normals` slice zero-fills the
    /// normal channels (callers that only build volumes never supply
    /// normals; the builder recomputes them anyway).
    pub fn from_interleaved(
        positions: &[f32],
        normals: &[f32],
        indices: Option<&[u32]>,
    ) -> UmbraResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(UmbraError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n);

        for i in 0..n {
            mesh.pos_x.push(positions[i * 3]);
            mesh.pos_y.push(positions[i * 3 + 1]);
            mesh.pos_z.push(positions[i * 3 + 2]);
        }

        if normals.len() == positions.len() {
            for i in 0..n {
                mesh.normal_x.push(normals[i * 3]);
                mesh.normal_y.push(normals[i * 3 + 1]);
                mesh.normal_z.push(normals[i * 3 + 2]);
            }
        } else if normals.is_empty() {
            mesh.normal_x.resize(n, 0.0);
            mesh.normal_y.resize(n, 0.0);
            mesh.normal_z.resize(n, 0.0);
        } else {
            return Err(UmbraError::InvalidMesh(format!(
                "Interleaved normals length ({}) does not match positions ({})",
                normals.len(),
                positions.len()
            )));
        }

        mesh.indices = indices.map(|ix| ix.to_vec());

        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the positions as a flat interleaved `[x, y, z, ...]` buffer.
    pub fn positions_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count() * 3);
        for i in 0..self.vertex_count() {
            out.push(self.pos_x[i]);
            out.push(self.pos_y[i]);
            out.push(self.pos_z[i]);
        }
        out
    }

    /// Returns the normals as a flat interleaved `[x, y, z, ...]` buffer.
    pub fn normals_interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count() * 3);
        for i in 0..self.vertex_count() {
            out.push(self.normal_x[i]);
            out.push(self.normal_y[i]);
            out.push(self.normal_z[i]);
        }
        out
    }

    /// Expands an indexed mesh into a non-indexed triangle soup.
    ///
    /// Every triangle gets its own three vertices with cloned attribute
    /// data, so corners can later be assigned flat normals or duplicated
    /// without aliasing shared vertices. A mesh that is already
    /// non-indexed comes back as a plain clone.
    ///
    /// Indices must be in range (see [`CasterMesh::validate`]); an
    /// out-of-range index panics like any slice access.
    pub fn to_non_indexed(&self) -> CasterMesh {
        let indices = match &self.indices {
            Some(indices) => indices,
            None => return self.clone(),
        };

        let mut soup = CasterMesh::with_capacity(indices.len());
        for &index in indices {
            let i = index as usize;
            soup.pos_x.push(self.pos_x[i]);
            soup.pos_y.push(self.pos_y[i]);
            soup.pos_z.push(self.pos_z[i]);
            soup.normal_x.push(self.normal_x[i]);
            soup.normal_y.push(self.normal_y[i]);
            soup.normal_z.push(self.normal_z[i]);
        }
        soup
    }
}
