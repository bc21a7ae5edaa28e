//! Persistence of content files.
//!
//! Saving is a single generic operation over [`ContentFile`]:
//!
//! ```text
//!   record ──► FileLayout ──► <out_dir>/<name>.json
//!                 │
//!                 └─ identifier "ns:name" → name
//! ```
//!
//! The path is derived from the identifier embedded in the record, the
//! record is rendered as 2-space-indented JSON, missing directories are
//! created, and the outcome is returned to the caller.

mod config;
mod layout;
mod writer;

pub use config::WriterConfig;
pub use layout::{ContentFile, ContentKind, FileLayout, Naming, GEOMETRY_PREFIX};
pub use writer::{ContentWriter, PreparedWrite};

#[cfg(feature = "async")]
pub use writer::SaveHandle;

use std::path::{Path, PathBuf};

use crate::error::AddonResult;

/// Saves a record under `out_dir` with the default configuration.
///
/// # Returns
/// The path of the written file.
///
/// # Errors
/// - If the record's identifier cannot be turned into a file name
/// - If the directory cannot be created or the file cannot be written
///
/// # Example
/// ```rust,ignore
/// use bedrock_addon::storage::save;
///
/// // "mymod:custom_stone" → out/blocks/custom_stone.json
/// let path = save(&block_file, "out/blocks").await?;
/// ```
#[cfg(feature = "async")]
pub async fn save<F: ContentFile>(record: &F, out_dir: impl AsRef<Path>) -> AddonResult<PathBuf> {
    ContentWriter::default().save(record, out_dir).await
}

/// Blocking counterpart of [`save`].
pub fn save_blocking<F: ContentFile>(
    record: &F,
    out_dir: impl AsRef<Path>,
) -> AddonResult<PathBuf> {
    ContentWriter::default().save_blocking(record, out_dir)
}
