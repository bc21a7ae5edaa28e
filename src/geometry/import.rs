//! Corner-based import geometry.
//!
//! Cubes are given by two opposite corners, faces carry an explicit
//! `[u1, v1, u2, v2]` rectangle, and rotation is a single angle around one
//! axis. [`ImportGeometry::to_model`] converts into the native model format.
//!
//! Import coordinates span `0..16` on every axis. Model coordinates are
//! centered on the block, so conversion moves cube origins, rotation origins
//! and bone pivots by `-8` on x and z. The y axis is left alone.

use serde::{Deserialize, Serialize};

use super::{
    Bone, Cube, CubeUv, FaceUv, FaceUvMap, Geometry, GeometryDescription, GeometryFile,
    GEOMETRY_FORMAT_VERSION,
};
use crate::common::{BlockFace, Vec3};
use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Offset between the import grid and the block-centered model grid on x and z.
const BLOCK_CENTER: f64 = 8.0;

fn centered(point: Vec3) -> Vec3 {
    [point[0] - BLOCK_CENTER, point[1], point[2] - BLOCK_CENTER]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportGeometryFile {
    pub format_version: String,

    #[serde(rename = "minecraft:geometry")]
    pub geometries: Vec<ImportGeometry>,
}

impl ImportGeometryFile {
    #[must_use]
    pub fn new(geometry: ImportGeometry) -> Self {
        Self {
            format_version: GEOMETRY_FORMAT_VERSION.to_string(),
            geometries: vec![geometry],
        }
    }

    /// Converts every geometry, keeping the format version.
    #[must_use]
    pub fn to_model(&self) -> GeometryFile {
        GeometryFile {
            format_version: self.format_version.clone(),
            geometries: self.geometries.iter().map(ImportGeometry::to_model).collect(),
        }
    }
}

impl ContentFile for ImportGeometryFile {
    const KIND: ContentKind = ContentKind::ImportGeometry;
    const LAYOUT: FileLayout = FileLayout::GEOMETRY;

    fn identifier(&self) -> Option<&str> {
        self.geometries
            .first()
            .map(|g| g.description.identifier.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportGeometry {
    pub description: GeometryDescription,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bones: Vec<ImportBone>,
}

impl ImportGeometry {
    #[must_use]
    pub fn to_model(&self) -> Geometry {
        Geometry {
            description: self.description.clone(),
            bones: self.bones.iter().map(ImportBone::to_model).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportBone {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cubes: Vec<ImportCube>,
}

impl ImportBone {
    fn to_model(&self) -> Bone {
        Bone {
            name: self.name.clone(),
            parent: self.parent.clone(),
            pivot: self.pivot.map(centered),
            rotation: self.rotation,
            cubes: self.cubes.iter().map(ImportCube::to_model).collect(),
            ..Bone::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Rotation of a cube around one axis through `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeRotation {
    /// Degrees.
    pub angle: f64,
    pub axis: Axis,
    pub origin: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFace {
    /// `[u1, v1, u2, v2]` in texture pixels.
    pub uv: [f64; 4],

    /// Texture variable such as `#side`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,

    /// Clockwise UV rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cullface: Option<BlockFace>,
}

impl ImportFace {
    fn to_model(&self) -> FaceUv {
        let [u1, v1, u2, v2] = self.uv;
        FaceUv {
            uv: [u1, v1],
            uv_size: Some([u2 - u1, v2 - v1]),
            material_instance: self
                .texture
                .as_deref()
                .map(|t| t.trim_start_matches('#').to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportFaces {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<ImportFace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<ImportFace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<ImportFace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub west: Option<ImportFace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<ImportFace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<ImportFace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportCube {
    pub from: Vec3,
    pub to: Vec3,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<CubeRotation>,

    #[serde(default)]
    pub faces: ImportFaces,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflate: Option<f64>,
}

impl ImportCube {
    /// Lower corner and extent, whichever order the corners were given in.
    #[must_use]
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let origin = std::array::from_fn(|i| self.from[i].min(self.to[i]));
        let size = std::array::from_fn(|i| (self.to[i] - self.from[i]).abs());
        (origin, size)
    }

    fn to_model(&self) -> Cube {
        let (origin, size) = self.bounds();
        let faces = &self.faces;
        let mapped = FaceUvMap {
            north: faces.north.as_ref().map(ImportFace::to_model),
            south: faces.south.as_ref().map(ImportFace::to_model),
            east: faces.east.as_ref().map(ImportFace::to_model),
            west: faces.west.as_ref().map(ImportFace::to_model),
            up: faces.up.as_ref().map(ImportFace::to_model),
            down: faces.down.as_ref().map(ImportFace::to_model),
        };
        let uv = (mapped != FaceUvMap::default()).then_some(CubeUv::PerFace(mapped));

        let (pivot, rotation) = match self.rotation {
            Some(r) => {
                let mut angles = [0.0; 3];
                angles[r.axis.index()] = r.angle;
                (Some(centered(r.origin)), Some(angles))
            }
            None => (None, None),
        };

        Cube {
            origin: centered(origin),
            size,
            uv,
            pivot,
            rotation,
            inflate: self.inflate,
            mirror: None,
        }
    }
}
