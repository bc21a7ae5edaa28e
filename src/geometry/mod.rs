//! Geometry models (`*.geo.json`).
//!
//! Two on-disk formats are modelled: the native model format below, and the
//! corner-based [`import`] format, which converts into it.

pub mod import;

pub use import::{
    Axis, CubeRotation, ImportBone, ImportCube, ImportFace, ImportFaces, ImportGeometry,
    ImportGeometryFile,
};

use serde::{Deserialize, Serialize};

use crate::common::{Vec2, Vec3};
use crate::map::OrderedMap;
use crate::shorthand::Shorthand;
use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Format version written by [`GeometryFile::new`].
pub const GEOMETRY_FORMAT_VERSION: &str = "1.12.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryFile {
    pub format_version: String,

    #[serde(rename = "minecraft:geometry")]
    pub geometries: Vec<Geometry>,
}

impl GeometryFile {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            format_version: GEOMETRY_FORMAT_VERSION.to_string(),
            geometries: vec![geometry],
        }
    }
}

impl ContentFile for GeometryFile {
    const KIND: ContentKind = ContentKind::Geometry;
    const LAYOUT: FileLayout = FileLayout::GEOMETRY;

    /// The file is named after its first geometry.
    fn identifier(&self) -> Option<&str> {
        self.geometries
            .first()
            .map(|g| g.description.identifier.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDescription {
    /// `geometry.<name>`, optionally `geometry.<name>:geometry.<parent>`.
    pub identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_bounds_width: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_bounds_height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_bounds_offset: Option<Vec3>,
}

impl GeometryDescription {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            texture_width: None,
            texture_height: None,
            visible_bounds_width: None,
            visible_bounds_height: None,
            visible_bounds_offset: None,
        }
    }

    #[must_use]
    pub const fn with_texture_size(mut self, width: u32, height: u32) -> Self {
        self.texture_width = Some(width);
        self.texture_height = Some(height);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub description: GeometryDescription,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bones: Vec<Bone>,
}

impl Geometry {
    /// Looks a bone up by name.
    #[must_use]
    pub fn bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// Bones naming a parent that does not exist in this geometry.
    #[must_use]
    pub fn orphan_bones(&self) -> Vec<&str> {
        self.bones
            .iter()
            .filter(|b| b.parent.as_deref().is_some_and(|p| self.bone(p).is_none()))
            .map(|b| b.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocatorDetail {
    pub offset: Vec3,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_inherited_scale: Option<bool>,
}

/// A locator offset, or an offset with rotation.
pub type Locator = Shorthand<Vec3, LocatorDetail>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflate: Option<f64>,

    /// Molang expression binding the bone to an item slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cubes: Vec<Cube>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locators: Option<OrderedMap<Locator>>,
}

impl Bone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub origin: Vec3,
    pub size: Vec3,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<CubeUv>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,
}

/// Box UV (`[u, v]` of the unwrapped net) or per-face mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CubeUv {
    Box(Vec2),
    PerFace(FaceUvMap),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceUvMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<FaceUv>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<FaceUv>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<FaceUv>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub west: Option<FaceUv>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<FaceUv>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<FaceUv>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceUv {
    pub uv: Vec2,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_size: Option<Vec2>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_instance: Option<String>,
}
