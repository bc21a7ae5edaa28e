//! The save operation shared by all content kinds.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::config::WriterConfig;
use super::layout::ContentFile;
use crate::error::{AddonResult, WriteError};

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedWrite {
    pub path: PathBuf,
    pub contents: String,
}

/// Writes content files as pretty-printed JSON under an output directory.
///
/// # Example
/// ```rust,ignore
/// use bedrock_addon::storage::{ContentWriter, WriterConfig};
///
/// let writer = ContentWriter::new(WriterConfig::default());
/// let path = writer.save(&block_file, "out/blocks").await?;
/// assert!(path.ends_with("custom_stone.json"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentWriter {
    config: WriterConfig,
}

impl ContentWriter {
    #[must_use]
    pub const fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Renders a record as 2-space-indented JSON.
    pub fn render<F: ContentFile>(&self, record: &F) -> Result<String, WriteError> {
        let mut text = serde_json::to_string_pretty(record).map_err(|source| {
            WriteError::Serialize {
                kind: F::KIND,
                source,
            }
        })?;
        if self.config.trailing_newline {
            text.push('\n');
        }
        Ok(text)
    }

    /// Validates the record's identifier, derives the target path and renders it.
    ///
    /// Nothing is written; both save variants start here.
    pub fn prepare<F: ContentFile>(&self, record: &F, out_dir: &Path) -> AddonResult<PreparedWrite> {
        let path = out_dir.join(record.relative_path()?);
        let contents = self.render(record)?;
        debug!(kind = %F::KIND, path = %path.display(), "prepared content file");
        Ok(PreparedWrite { path, contents })
    }

    /// Saves a record without an async runtime.
    pub fn save_blocking<F: ContentFile>(
        &self,
        record: &F,
        out_dir: impl AsRef<Path>,
    ) -> AddonResult<PathBuf> {
        let prepared = self.prepare(record, out_dir.as_ref())?;
        write_blocking(&self.config, prepared)
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

fn write_blocking(config: &WriterConfig, prepared: PreparedWrite) -> AddonResult<PathBuf> {
    let PreparedWrite { path, contents } = prepared;

    if let Some(dir) = parent_dir(&path) {
        if config.create_missing_dirs && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            info!(dir = %dir.display(), "created output directory");
        }
    }

    if !config.overwrite && path.exists() {
        return Err(WriteError::AlreadyExists { path }.into());
    }

    std::fs::write(&path, contents.as_bytes()).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote content file");
    Ok(path)
}

#[cfg(feature = "async")]
mod nonblocking {
    use std::path::{Path, PathBuf};

    use tokio::fs;
    use tokio::runtime::Handle;
    use tokio::task::JoinHandle;
    use tracing::{debug, info, warn};

    use super::{parent_dir, ContentWriter, PreparedWrite};
    use crate::error::{AddonError, AddonResult, WriteError};
    use crate::storage::config::WriterConfig;
    use crate::storage::layout::ContentFile;

    /// Handle to a save running in the background.
    #[derive(Debug)]
    pub struct SaveHandle {
        state: HandleState,
    }

    #[derive(Debug)]
    enum HandleState {
        Running(JoinHandle<AddonResult<PathBuf>>),
        /// The task never started.
        Failed(AddonError),
    }

    impl SaveHandle {
        /// Waits for the save to finish.
        pub async fn wait(self) -> AddonResult<PathBuf> {
            match self.state {
                HandleState::Running(task) => match task.await {
                    Ok(result) => result,
                    Err(e) => Err(WriteError::TaskFailed {
                        message: e.to_string(),
                    }
                    .into()),
                },
                HandleState::Failed(e) => Err(e),
            }
        }

        #[must_use]
        pub fn is_finished(&self) -> bool {
            match &self.state {
                HandleState::Running(task) => task.is_finished(),
                HandleState::Failed(_) => true,
            }
        }
    }

    impl ContentWriter {
        /// Saves a record, yielding while the file system work is in flight.
        pub async fn save<F: ContentFile>(
            &self,
            record: &F,
            out_dir: impl AsRef<Path>,
        ) -> AddonResult<PathBuf> {
            let prepared = self.prepare(record, out_dir.as_ref())?;
            write(&self.config, prepared).await
        }

        /// Starts a save in the background and returns immediately.
        ///
        /// Failures are logged at warn level whether or not the handle is
        /// awaited, so dropping the handle gives fire-and-forget behavior.
        /// Outside a tokio runtime nothing is written and the handle resolves
        /// to [`WriteError::TaskFailed`].
        pub fn spawn_save<F: ContentFile>(
            &self,
            record: &F,
            out_dir: impl AsRef<Path>,
        ) -> SaveHandle {
            let prepared = self.prepare(record, out_dir.as_ref());
            let config = self.config.clone();
            let kind = F::KIND;

            let runtime = match Handle::try_current() {
                Ok(runtime) => runtime,
                Err(e) => {
                    warn!(kind = %kind, error = %e, "background save not started");
                    let failed = WriteError::TaskFailed {
                        message: e.to_string(),
                    };
                    return SaveHandle {
                        state: HandleState::Failed(failed.into()),
                    };
                }
            };

            let task = runtime.spawn(async move {
                let result = match prepared {
                    Ok(prepared) => write(&config, prepared).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = &result {
                    warn!(kind = %kind, error = %e, "background save failed");
                }
                result
            });
            SaveHandle {
                state: HandleState::Running(task),
            }
        }
    }

    async fn write(config: &WriterConfig, prepared: PreparedWrite) -> AddonResult<PathBuf> {
        let PreparedWrite { path, contents } = prepared;

        if let Some(dir) = parent_dir(&path) {
            let exists = fs::try_exists(dir).await.unwrap_or(false);
            if config.create_missing_dirs && !exists {
                fs::create_dir_all(dir)
                    .await
                    .map_err(|source| WriteError::CreateDirectory {
                        path: dir.to_path_buf(),
                        source,
                    })?;
                info!(dir = %dir.display(), "created output directory");
            }
        }

        if !config.overwrite && fs::try_exists(&path).await.unwrap_or(false) {
            return Err(WriteError::AlreadyExists { path }.into());
        }

        fs::write(&path, contents.as_bytes())
            .await
            .map_err(|source| WriteError::Write {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote content file");
        Ok(path)
    }
}

#[cfg(feature = "async")]
pub use nonblocking::SaveHandle;

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;
    use crate::error::{AddonError, ValidationError};
    use crate::storage::layout::{ContentKind, FileLayout};

    #[derive(Serialize)]
    struct Note {
        id: String,
        weight: f64,
    }

    impl ContentFile for Note {
        const KIND: ContentKind = ContentKind::Item;
        const LAYOUT: FileLayout = FileLayout::IDENTIFIER;

        fn identifier(&self) -> Option<&str> {
            Some(&self.id)
        }
    }

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            weight: 0.25,
        }
    }

    #[test]
    fn render_uses_two_space_indent() {
        let text = ContentWriter::default().render(&note("a:b")).unwrap();
        assert_eq!(text, "{\n  \"id\": \"a:b\",\n  \"weight\": 0.25\n}");
    }

    #[test]
    fn render_trailing_newline_is_opt_in() {
        let writer = ContentWriter::new(WriterConfig {
            trailing_newline: true,
            ..WriterConfig::default()
        });
        assert!(writer.render(&note("a:b")).unwrap().ends_with("}\n"));
    }

    #[test]
    fn prepare_joins_output_dir() {
        let prepared = ContentWriter::default()
            .prepare(&note("mymod:thing"), Path::new("out/items"))
            .unwrap();
        assert_eq!(prepared.path, Path::new("out/items").join("thing.json"));
    }

    #[test]
    fn prepare_rejects_bad_identifier() {
        let err = ContentWriter::default()
            .prepare(&note("brokenid"), Path::new("out"))
            .unwrap_err();
        assert!(matches!(
            err,
            AddonError::Validation(ValidationError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn save_blocking_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b").join("c");
        let path = ContentWriter::default()
            .save_blocking(&note("mymod:thing"), &out)
            .unwrap();
        assert_eq!(path, out.join("thing.json"));
        assert!(path.is_file());
    }

    #[test]
    fn save_blocking_without_dir_creation_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ContentWriter::new(WriterConfig::existing_dirs_only());
        let err = writer
            .save_blocking(&note("mymod:thing"), dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, AddonError::Write(WriteError::Write { .. })));
    }

    #[test]
    fn save_blocking_respects_no_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ContentWriter::new(WriterConfig::no_overwrite());
        writer.save_blocking(&note("mymod:thing"), dir.path()).unwrap();
        let err = writer
            .save_blocking(&note("mymod:thing"), dir.path())
            .unwrap_err();
        assert!(matches!(err, AddonError::Write(WriteError::AlreadyExists { .. })));
    }

    #[cfg(feature = "async")]
    #[test]
    fn spawn_save_outside_a_runtime_reports_task_failure() {
        let dir = tempfile::tempdir().unwrap();
        let handle = ContentWriter::default().spawn_save(&note("mymod:late"), dir.path());
        assert!(handle.is_finished());

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let err = runtime.block_on(handle.wait()).unwrap_err();
        assert!(matches!(err, AddonError::Write(WriteError::TaskFailed { .. })));
        assert!(!dir.path().join("late.json").exists());
    }
}
