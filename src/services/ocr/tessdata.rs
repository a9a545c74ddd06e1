//! Locating the Tesseract language-data directory.
//!
//! Candidates are checked on every call because a Tesseract install or the
//! bundled folder can appear or vanish between runs.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the language-data folder, both in installs and next to the executable
pub const TESSDATA_DIR_NAME: &str = "tessdata";

#[cfg(windows)]
const INSTALL_SUBDIR: &[&str] = &["Tesseract-OCR", TESSDATA_DIR_NAME];
#[cfg(not(windows))]
const INSTALL_SUBDIR: &[&str] = &[TESSDATA_DIR_NAME];

/// A tessdata directory that existed when it was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TessdataLocation {
    path: PathBuf,
    source: CandidateSource,
}

impl TessdataLocation {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> CandidateSource {
        self.source
    }

    /// Re-check the directory; it may have been removed since resolution
    pub fn still_exists(&self) -> bool {
        self.path.is_dir()
    }

    /// Check for `<language>.traineddata`
    pub fn has_language(&self, language: &str) -> bool {
        self.path.join(format!("{}.traineddata", language)).is_file()
    }
}

/// Where a candidate directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// Set by the user in the configuration
    Configured,
    /// The platform's well-known Tesseract install
    Installation,
    /// `tessdata` next to the running executable
    Bundled,
}

/// Platform lookups the resolver depends on
pub trait InstallLocations: Send + Sync {
    /// Roots the OCR package installs under, most likely first
    fn install_roots(&self) -> Vec<PathBuf>;

    /// Directory containing the running executable
    fn executable_dir(&self) -> Option<PathBuf>;
}

/// The real platform lookups
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocations;

impl InstallLocations for SystemLocations {
    fn install_roots(&self) -> Vec<PathBuf> {
        platform_install_roots()
    }

    fn executable_dir(&self) -> Option<PathBuf> {
        env::current_exe()
            .ok()
            .and_then(|path| path.parent().map(Path::to_path_buf))
    }
}

#[cfg(windows)]
fn platform_install_roots() -> Vec<PathBuf> {
    env::var_os("PROGRAMFILES")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .into_iter()
        .collect()
}

// Apple Silicon Homebrew, then Intel Homebrew and MacPorts-style prefixes
#[cfg(target_os = "macos")]
fn platform_install_roots() -> Vec<PathBuf> {
    ["/opt/homebrew/share", "/usr/local/share", "/opt/local/share"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

// Debian/Ubuntu version directories, then Fedora/Arch and source builds
#[cfg(all(unix, not(target_os = "macos")))]
fn platform_install_roots() -> Vec<PathBuf> {
    [
        "/usr/share/tesseract-ocr/5",
        "/usr/share/tesseract-ocr/4.00",
        "/usr/share",
        "/usr/local/share",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(any(windows, unix)))]
fn platform_install_roots() -> Vec<PathBuf> {
    Vec::new()
}

/// Well-known tessdata directory under an install root
pub fn well_known_dir(root: &Path) -> PathBuf {
    INSTALL_SUBDIR
        .iter()
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Resolves the tessdata directory in priority order
#[derive(Clone)]
pub struct TessdataResolver {
    locations: Arc<dyn InstallLocations>,
    configured: Option<PathBuf>,
}

impl TessdataResolver {
    pub fn new(locations: Arc<dyn InstallLocations>, configured: Option<PathBuf>) -> Self {
        Self {
            locations,
            configured,
        }
    }

    /// All candidates in priority order, existing or not
    pub fn candidates(&self) -> Vec<(CandidateSource, PathBuf)> {
        let roots = self.locations.install_roots();
        let mut candidates = Vec::with_capacity(roots.len() + 2);

        if let Some(dir) = &self.configured {
            candidates.push((CandidateSource::Configured, dir.clone()));
        }
        for root in &roots {
            candidates.push((CandidateSource::Installation, well_known_dir(root)));
        }
        if let Some(exe_dir) = self.locations.executable_dir() {
            candidates.push((CandidateSource::Bundled, exe_dir.join(TESSDATA_DIR_NAME)));
        }

        candidates
    }

    /// First candidate that exists on disk, `None` when none does
    pub fn resolve(&self) -> Option<TessdataLocation> {
        for (source, path) in self.candidates() {
            if path.is_dir() {
                tracing::debug!(?source, path = %path.display(), "Resolved tessdata directory");
                return Some(TessdataLocation { path, source });
            }

            tracing::trace!(?source, path = %path.display(), "tessdata candidate missing");
        }

        tracing::warn!("No tessdata directory found in any expected location");
        None
    }
}
