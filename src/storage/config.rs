//! Writer configuration.

/// Configuration for [`ContentWriter`](super::ContentWriter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Create the target directory (and missing ancestors) before writing.
    pub create_missing_dirs: bool,
    /// Replace an existing file at the target path.
    pub overwrite: bool,
    /// Append `\n` after the closing brace.
    pub trailing_newline: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            create_missing_dirs: true,
            overwrite: true,
            trailing_newline: false,
        }
    }
}

impl WriterConfig {
    /// Refuse to touch files that already exist.
    #[must_use]
    pub fn no_overwrite() -> Self {
        Self {
            overwrite: false,
            ..Self::default()
        }
    }

    /// Write only into directories that already exist.
    #[must_use]
    pub fn existing_dirs_only() -> Self {
        Self {
            create_missing_dirs: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_save() {
        let cfg = WriterConfig::default();
        assert!(cfg.create_missing_dirs);
        assert!(cfg.overwrite);
        assert!(!cfg.trailing_newline);
    }

    #[test]
    fn presets_change_one_flag() {
        assert!(!WriterConfig::no_overwrite().overwrite);
        assert!(WriterConfig::no_overwrite().create_missing_dirs);
        assert!(!WriterConfig::existing_dirs_only().create_missing_dirs);
    }
}
