//! Pack manifests (`manifest.json`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::map::OrderedMap;
use crate::shorthand::Shorthand;
use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Manifest schema version written by [`Manifest::new`].
pub const MANIFEST_FORMAT_VERSION: u32 = 2;

/// `[major, minor, patch]`, or a semver string for script modules.
pub type Version = Shorthand<[u32; 3], String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    Data,
    Resources,
    Script,
    SkinPack,
    WorldTemplate,
    ClientData,
    Interface,
    Javascript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackScope {
    World,
    Global,
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub uuid: Uuid,
    pub version: Version,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_engine_version: Option<Version>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_game_version: Option<Version>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_template_options: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_scope: Option<PackScope>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "type")]
    pub module_type: ModuleType,

    pub uuid: Uuid,
    pub version: Version,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Script language, e.g. `javascript`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Script entry point relative to the pack root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl Module {
    pub fn new(module_type: ModuleType, uuid: Uuid) -> Self {
        Self {
            module_type,
            uuid,
            version: Shorthand::Short([1, 0, 0]),
            description: None,
            language: None,
            entry: None,
        }
    }

    /// A JavaScript module starting at `entry`.
    pub fn script(uuid: Uuid, entry: impl Into<String>) -> Self {
        Self {
            language: Some("javascript".to_string()),
            entry: Some(entry.into()),
            ..Self::new(ModuleType::Script, uuid)
        }
    }
}

/// Another pack by UUID, or a script API module by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    Pack { uuid: Uuid, version: Version },
    Module { module_name: String, version: Version },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Tool name to the versions that touched the pack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_with: Option<OrderedMap<Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub header: Header,
    pub modules: Vec<Module>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,

    /// Experimental engine features, e.g. `script_eval`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Manifest {
    /// A version 1.0.0 pack with one module of `module_type`.
    ///
    /// The header UUID is random; the module UUID is derived from it so a
    /// manifest rebuilt from the same header keeps a stable module id.
    pub fn new(name: impl Into<String>, module_type: ModuleType) -> Self {
        Self::with_uuid(name, Uuid::new_v4(), module_type)
    }

    pub fn with_uuid(name: impl Into<String>, uuid: Uuid, module_type: ModuleType) -> Self {
        let module_uuid = Uuid::new_v5(&uuid, module_type_key(module_type).as_bytes());
        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            header: Header {
                name: name.into(),
                description: None,
                uuid,
                version: Shorthand::Short([1, 0, 0]),
                min_engine_version: None,
                base_game_version: None,
                lock_template_options: None,
                pack_scope: None,
            },
            modules: vec![Module::new(module_type, module_uuid)],
            dependencies: None,
            capabilities: None,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_min_engine_version(mut self, version: [u32; 3]) -> Self {
        self.header.min_engine_version = Some(Shorthand::Short(version));
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.get_or_insert_with(Vec::new).push(dependency);
        self
    }

    /// Adds a dependency on `other` at its current header version.
    #[must_use]
    pub fn depending_on(self, other: &Self) -> Self {
        self.with_dependency(Dependency::Pack {
            uuid: other.header.uuid,
            version: other.header.version.clone(),
        })
    }

    /// Whether any module has the given type.
    #[must_use]
    pub fn has_module(&self, module_type: ModuleType) -> bool {
        self.modules.iter().any(|m| m.module_type == module_type)
    }
}

impl ContentFile for Manifest {
    const KIND: ContentKind = ContentKind::Manifest;
    const LAYOUT: FileLayout = FileLayout::MANIFEST;

    fn identifier(&self) -> Option<&str> {
        None
    }
}

fn module_type_key(module_type: ModuleType) -> &'static str {
    match module_type {
        ModuleType::Data => "data",
        ModuleType::Resources => "resources",
        ModuleType::Script => "script",
        ModuleType::SkinPack => "skin_pack",
        ModuleType::WorldTemplate => "world_template",
        ModuleType::ClientData => "client_data",
        ModuleType::Interface => "interface",
        ModuleType::Javascript => "javascript",
    }
}
