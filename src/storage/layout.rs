//! File-name derivation.
//!
//! Each content kind declares a [`FileLayout`] describing how its output
//! path is computed from the record's identifier. The save operation itself
//! is shared by all kinds.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::ValidationError;
use crate::identifier::Identifier;

/// Prefix of geometry identifiers (`geometry.<name>`).
pub const GEOMETRY_PREFIX: &str = "geometry.";

/// The content families this crate can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Block,
    Item,
    Entity,
    Feature,
    Geometry,
    ImportGeometry,
    Manifest,
}

impl ContentKind {
    /// Returns a short stable name suitable for logging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Item => "item",
            Self::Entity => "entity",
            Self::Feature => "feature",
            Self::Geometry => "geometry",
            Self::ImportGeometry => "import_geometry",
            Self::Manifest => "manifest",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the base file name is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// The name segment of a `<namespace>:<name>` identifier.
    IdentifierName,
    /// The `<name>` of a `geometry.<name>` identifier; a `:parent` suffix is dropped.
    GeometryName,
    /// A fixed base name that ignores the identifier.
    Fixed(&'static str),
}

/// Per-kind path derivation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLayout {
    pub naming: Naming,
    /// Extension without the leading dot.
    pub extension: &'static str,
    /// Whether `/` in the name creates nested directories.
    pub allow_nested: bool,
}

impl FileLayout {
    /// `<name>.json` from a `ns:name` identifier.
    pub const IDENTIFIER: Self = Self {
        naming: Naming::IdentifierName,
        extension: "json",
        allow_nested: false,
    };

    /// Like [`FileLayout::IDENTIFIER`] but `ns:dir/name` lands in `dir/name.json`.
    pub const NESTED_IDENTIFIER: Self = Self {
        naming: Naming::IdentifierName,
        extension: "json",
        allow_nested: true,
    };

    /// `<name>.geo.json` from a `geometry.name` identifier.
    pub const GEOMETRY: Self = Self {
        naming: Naming::GeometryName,
        extension: "geo.json",
        allow_nested: false,
    };

    /// Always `manifest.json`.
    pub const MANIFEST: Self = Self {
        naming: Naming::Fixed("manifest"),
        extension: "json",
        allow_nested: false,
    };

    /// Computes the output path relative to the output directory.
    pub fn relative_path(
        &self,
        kind: ContentKind,
        identifier: Option<&str>,
    ) -> Result<PathBuf, ValidationError> {
        let base = match self.naming {
            Naming::Fixed(name) => name.to_string(),
            Naming::IdentifierName => {
                let raw = identifier.ok_or(ValidationError::MissingIdentifier { kind })?;
                Identifier::parse(raw)?.name().to_string()
            }
            Naming::GeometryName => {
                let raw = identifier.ok_or(ValidationError::MissingIdentifier { kind })?;
                geometry_name(raw)?.to_string()
            }
        };

        let segments = checked_segments(&base)?;
        if segments.len() > 1 && !self.allow_nested {
            return Err(ValidationError::NestedPathNotAllowed { name: base, kind });
        }

        let mut path = PathBuf::new();
        let (file, dirs) = segments
            .split_last()
            .ok_or_else(|| ValidationError::UnsafeFileName { name: base.clone() })?;
        for dir in dirs {
            path.push(dir);
        }
        path.push(format!("{file}.{}", self.extension));
        Ok(path)
    }
}

/// Extracts `<name>` from `geometry.<name>` or `geometry.<name>:geometry.<parent>`.
fn geometry_name(identifier: &str) -> Result<&str, ValidationError> {
    let own = identifier.split(':').next().unwrap_or_default();
    match own.strip_prefix(GEOMETRY_PREFIX) {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ValidationError::MalformedGeometryIdentifier {
            identifier: identifier.to_string(),
        }),
    }
}

/// Splits a name on `/`, rejecting anything that could leave the output directory.
fn checked_segments(name: &str) -> Result<Vec<&str>, ValidationError> {
    let unsafe_name = || ValidationError::UnsafeFileName {
        name: name.to_string(),
    };

    if name.contains('\\') || name.contains('\0') {
        return Err(unsafe_name());
    }
    let segments: Vec<&str> = name.split('/').collect();
    if segments
        .iter()
        .any(|s| s.trim().is_empty() || *s == "." || *s == "..")
    {
        return Err(unsafe_name());
    }
    Ok(segments)
}

/// A top-level content file that knows where it is written.
///
/// Implemented by every `*File` record; the save operation is generic over it.
pub trait ContentFile: Serialize {
    const KIND: ContentKind;
    const LAYOUT: FileLayout;

    /// The identifier the file name is derived from, if the layout needs one.
    fn identifier(&self) -> Option<&str>;

    /// Output path relative to the output directory.
    fn relative_path(&self) -> Result<PathBuf, ValidationError> {
        Self::LAYOUT.relative_path(Self::KIND, self.identifier())
    }
}
