use crate::error::{CleanupError, ErrorRecord};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files matching the requested extensions, plus any non-fatal traversal
/// warnings collected on the way.
#[derive(Debug, Clone)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ErrorRecord>,
}

pub struct SourceScanner {
    root: PathBuf,
    ignore_dirs: Vec<String>,
    install_dir: Option<PathBuf>,
}

impl SourceScanner {
    pub fn new(root: PathBuf, ignore_dirs: Vec<String>) -> Self {
        // The tool must never rewrite its own source when a project releases it.
        let install_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self {
            root,
            ignore_dirs,
            install_dir,
        }
    }

    /// Override the installation directory excluded from discovery.
    pub fn with_install_dir(mut self, dir: PathBuf) -> Self {
        self.install_dir = Some(dir);
        self
    }

    /// Walk the root and collect files matching `extensions`
    /// (case-insensitive). Ignored directories are pruned at any depth;
    /// unreadable directories contribute a warning instead of aborting the
    /// traversal.
    pub fn discover(&self, extensions: &[String]) -> Discovery {
        let mut files = Vec::new();
        let mut warnings = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored_dir(entry.path(), entry.file_type().is_dir()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warnings.push(scan_warning(err));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.matches_extension(path, extensions) {
                continue;
            }

            if let Some(install_dir) = &self.install_dir {
                if path.starts_with(install_dir) {
                    continue;
                }
            }

            files.push(path.to_path_buf());
        }

        tracing::debug!(
            "discovered {} files under {}",
            files.len(),
            self.root.display()
        );

        Discovery { files, warnings }
    }

    fn is_ignored_dir(&self, path: &Path, is_dir: bool) -> bool {
        if !is_dir {
            return false;
        }

        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => self.ignore_dirs.iter().any(|ignored| ignored == name),
            None => false,
        }
    }

    fn matches_extension(&self, path: &Path, extensions: &[String]) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => {
                let ext = ext.to_ascii_lowercase();
                extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

fn scan_warning(err: walkdir::Error) -> ErrorRecord {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("<unknown>"));

    let error = match err.io_error().map(|io| io.kind()) {
        Some(std::io::ErrorKind::PermissionDenied) => CleanupError::PermissionDenied(path),
        _ => CleanupError::DirScan {
            path,
            message: err.to_string(),
        },
    };

    error.record()
}
