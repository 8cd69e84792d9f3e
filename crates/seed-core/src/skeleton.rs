//! Skeleton kinds and the paths each skeleton writes

use crate::error::ScaffoldError;
use crate::root::OutputRoot;
use std::fmt;
use std::path::{Path, PathBuf};

/// The project kinds offered by the menu, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonKind {
    Server,
    Cli,
    Library,
}

impl SkeletonKind {
    pub const ALL: [SkeletonKind; 3] = [
        SkeletonKind::Server,
        SkeletonKind::Cli,
        SkeletonKind::Library,
    ];

    /// Map a menu position to its kind
    pub fn from_position(position: usize) -> Result<Self, ScaffoldError> {
        Self::ALL
            .get(position)
            .copied()
            .ok_or(ScaffoldError::InvalidPosition(position))
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkeletonKind::Server => "server",
            SkeletonKind::Cli => "cli",
            SkeletonKind::Library => "library",
        }
    }
}

impl fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySkeleton {
    pub root: PathBuf,
    pub lib_go: PathBuf,
    pub test_go: PathBuf,
}

impl LibrarySkeleton {
    pub fn new(root: &OutputRoot, base: &Path) -> Self {
        let dir = root.resolve(base);
        let stem = root.file_stem();
        Self {
            lib_go: dir.join(format!("{}.go", stem)),
            test_go: dir.join(format!("{}_test.go", stem)),
            root: dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliSkeleton {
    pub root: PathBuf,
    pub main_go: PathBuf,
}

impl CliSkeleton {
    pub fn new(root: &OutputRoot, base: &Path) -> Self {
        let dir = root.resolve(base);
        Self {
            main_go: dir.join("main.go"),
            root: dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSkeleton {
    pub root: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub index_html: PathBuf,
    pub index_css: PathBuf,
    pub index_js: PathBuf,
    pub main_go: PathBuf,
}

impl ServerSkeleton {
    pub fn new(root: &OutputRoot, base: &Path) -> Self {
        let dir = root.resolve(base);
        let templates_dir = dir.join("templates");
        let static_dir = dir.join("static");
        Self {
            index_html: templates_dir.join("index.html"),
            index_css: static_dir.join("index.css"),
            index_js: static_dir.join("index.js"),
            main_go: dir.join("main.go"),
            templates_dir,
            static_dir,
            root: dir,
        }
    }
}
