//! # bedrock-addon - Typed Bedrock add-on content files
//!
//! Strongly typed records for the JSON files that make up a Bedrock add-on
//! (blocks, items, entities, world generation features, geometry models and
//! pack manifests), and a persistence helper that writes a record to the file
//! its identifier names.
//!
//! ## Core Concepts
//!
//! - **Content file**: a top-level record (`BlockFile`, `ItemFile`, ...) that
//!   knows its [`ContentKind`] and how its file name is derived
//! - **Component map**: ordered built-in and custom components of a block,
//!   item or entity
//! - **Shorthand**: fields accepting either a short scalar or a full object
//! - **Save**: derive `<out_dir>/<name>.json` from `namespace:name`, create
//!   missing directories, write 2-space-indented JSON
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bedrock_addon::block::{Block, BlockComponent, BlockFile};
//! use bedrock_addon::storage::save;
//!
//! let file = BlockFile::new(
//!     Block::new("mymod:custom_stone")
//!         .with_component(BlockComponent::DestructibleByMining(true.into())),
//! );
//!
//! // writes out/blocks/custom_stone.json
//! let path = save(&file, "out/blocks").await?;
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// Shared shapes
pub mod common;
pub mod component;
pub mod error;
pub mod filter;
pub mod identifier;
pub mod map;
pub mod shorthand;

// Content kinds
pub mod block;
pub mod entity;
pub mod feature;
pub mod geometry;
pub mod item;
pub mod manifest;

// Persistence
pub mod storage;

// Re-export primary types at crate root for convenience
pub use component::{Component, ComponentEntry, ComponentMap, Permutation};
pub use error::{AddonError, AddonResult, ValidationError, WriteError};
pub use filter::{Filter, FilterTest};
pub use identifier::Identifier;
pub use map::OrderedMap;
pub use shorthand::{Named, OneOrMany, Shorthand, Toggle};

pub use block::BlockFile;
pub use entity::EntityFile;
pub use feature::{Feature, FeatureFile, FeatureKind};
pub use geometry::{GeometryFile, ImportGeometryFile};
pub use item::ItemFile;
pub use manifest::Manifest;

#[cfg(feature = "async")]
pub use storage::{save, SaveHandle};
pub use storage::{save_blocking, ContentFile, ContentKind, ContentWriter, WriterConfig};
