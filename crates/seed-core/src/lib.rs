//! Seed Core - Shared library for skeleton project generation
//!
//! This library writes fixed project skeletons (server, CLI, library) from
//! templates embedded at compile time. Binaries supply a [`ProductConfig`]
//! for the wording around the generated files and pick a skeleton through
//! the interactive menu.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Filesystem primitives, output roots, skeleton descriptors
//! - **Layer 2: Generators** - One generator per [`SkeletonKind`], plus the menu loop over a [`menu::KeySource`]
//! - **Layer 3: Terminal Interface** - crossterm raw key capture (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the raw terminal key source and [`run`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use seed_core::{generate, OutputRoot, SkeletonKind};
//!
//! let root = OutputRoot::parse("myapp");
//! generate(SkeletonKind::Server, &root, Path::new(""), &MyConfig, &mut std::io::stdout())?;
//! ```

pub mod error;
pub mod fs;
pub mod generate;
pub mod menu;
pub mod product;
pub mod root;
pub mod screen;
pub mod skeleton;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{FsError, ScaffoldError};
pub use generate::generate;
pub use menu::{plant, select, MenuKey, MenuState};
pub use product::ProductConfig;
pub use root::OutputRoot;
pub use skeleton::{CliSkeleton, LibrarySkeleton, ServerSkeleton, SkeletonKind};

#[cfg(feature = "tui")]
pub use tui::run;
