use crate::config::Config;
use crate::error::{read_error, write_error, CleanupError, ErrorRecord, Result};
use crate::scanner::SourceScanner;
use crate::stripper::DebugCallStripper;
use crate::styles::{extract_classes, remove_unused_rules, UsageChecker};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Aggregate outcome of one cleanup run. Always returned, even when nothing
/// was touched; callers decide whether accumulated errors fail their pipeline.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupStats {
    pub console_logs_removed: u64,
    pub css_classes_removed: u64,
    pub files_processed: u64,
    pub errors: Vec<ErrorRecord>,
    pub warnings: Vec<ErrorRecord>,
}

pub struct CleanupEngine {
    config: Config,
    dry_run: bool,
}

impl CleanupEngine {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Run both passes without writing anything back.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Clean the project rooted at `root`: strip debug calls from script
    /// sources, then drop unused CSS rules from stylesheets, rewriting only
    /// files whose content actually changed.
    ///
    /// Fatal validation errors abort before any mutation and come back as the
    /// sole entry in `errors`; per-file failures are recorded and the batch
    /// continues.
    pub fn clean(&self, root: impl AsRef<Path>) -> CleanupStats {
        let mut stats = CleanupStats::default();

        let root = match validate_root(root.as_ref()) {
            Ok(root) => root,
            Err(err) => {
                stats.errors.push(err.record());
                return stats;
            }
        };

        let src = root.join("src");
        if !src.is_dir() {
            // Cleanup is optional functionality; a project without src is
            // skipped, not failed.
            stats
                .warnings
                .push(CleanupError::SrcDirMissing(src).record());
            return stats;
        }

        let mut extensions = self.config.source_extensions.clone();
        extensions.extend(self.config.stylesheet_extensions.iter().cloned());

        let scanner = SourceScanner::new(src, self.config.ignore_dirs.clone());
        let discovery = scanner.discover(&extensions);
        stats.warnings.extend(discovery.warnings);

        let (sources, stylesheets) = self.partition(discovery.files);
        tracing::info!(
            "cleaning {} source files and {} stylesheets",
            sources.len(),
            stylesheets.len()
        );

        let stripper = DebugCallStripper::new(&self.config.debug_fn);
        for path in &sources {
            match self.strip_file(&stripper, path) {
                Ok((removed, changed)) => {
                    stats.console_logs_removed += removed;
                    if changed {
                        stats.files_processed += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    stats.errors.push(err.record());
                }
            }
        }

        // One checker (and one content cache) for the whole stylesheet pass,
        // so each source file is read at most once no matter how many classes
        // get looked up.
        let mut checker = UsageChecker::new(sources);
        for path in &stylesheets {
            match self.clean_stylesheet(path, &mut checker) {
                Ok((removed, changed)) => {
                    stats.css_classes_removed += removed;
                    if changed {
                        stats.files_processed += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    stats.errors.push(err.record());
                }
            }
        }

        stats
    }

    fn partition(&self, files: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let is_stylesheet = |path: &Path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext = ext.to_ascii_lowercase();
                    self.config
                        .stylesheet_extensions
                        .iter()
                        .any(|allowed| *allowed == ext)
                })
                .unwrap_or(false)
        };

        files.into_iter().partition(|path| !is_stylesheet(path))
    }

    fn strip_file(&self, stripper: &DebugCallStripper, path: &Path) -> Result<(u64, bool)> {
        let original = read_text(path)?;
        let outcome = stripper.strip(&original);

        let changed = outcome.text != original;
        if changed && !self.dry_run {
            fs::write(path, &outcome.text).map_err(|err| write_error(path, err))?;
            tracing::debug!(
                "stripped {} debug calls from {}",
                outcome.removed,
                path.display()
            );
        }

        Ok((outcome.removed, changed))
    }

    fn clean_stylesheet(&self, path: &Path, checker: &mut UsageChecker) -> Result<(u64, bool)> {
        let original = read_text(path)?;

        // The class sets are recomputed before and after purely for the count
        // delta; several selectors can reduce to the same class token.
        let before = extract_classes(&original);
        let cleaned = remove_unused_rules(&original, &mut |class| checker.is_used(class));
        let after = extract_classes(&cleaned);

        let removed = before.len().saturating_sub(after.len()) as u64;
        let changed = cleaned != original;
        if changed && !self.dry_run {
            fs::write(path, &cleaned).map_err(|err| write_error(path, err))?;
            tracing::debug!(
                "removed {} unused classes from {}",
                removed,
                path.display()
            );
        }

        Ok((removed, changed))
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| read_error(path, err))
}

fn validate_root(root: &Path) -> Result<PathBuf> {
    let resolved = match fs::canonicalize(root) {
        Ok(resolved) => resolved,
        Err(err) => {
            return Err(match err.kind() {
                std::io::ErrorKind::NotFound => CleanupError::RootNotFound(root.to_path_buf()),
                std::io::ErrorKind::PermissionDenied => {
                    CleanupError::PermissionDenied(root.to_path_buf())
                }
                _ => CleanupError::DirScan {
                    path: root.to_path_buf(),
                    message: err.to_string(),
                },
            });
        }
    };

    if !resolved.is_dir() {
        return Err(CleanupError::RootNotADirectory(resolved));
    }

    Ok(resolved)
}
