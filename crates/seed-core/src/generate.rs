//! Skeleton generators
//!
//! Each generator creates the output root (unless it is the current
//! directory), creates every entry of its skeleton in a fixed order, fills
//! the files with their templates and prints setup instructions. The first
//! failing step aborts the run; nothing already written is rolled back.

use crate::error::{Result, ScaffoldError};
use crate::fs::{ensure_dir_created, ensure_file_created, overwrite_file};
use crate::product::ProductConfig;
use crate::root::OutputRoot;
use crate::screen;
use crate::skeleton::{CliSkeleton, LibrarySkeleton, ServerSkeleton, SkeletonKind};
use crate::templates;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Generate the skeleton for `kind` under `root`, resolved against `base`
///
/// Returns the files written, in creation order.
pub fn generate<C: ProductConfig, W: Write>(
    kind: SkeletonKind,
    root: &OutputRoot,
    base: &Path,
    config: &C,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    match kind {
        SkeletonKind::Server => generate_server(root, base, config, out),
        SkeletonKind::Cli => generate_cli(root, base, config, out),
        SkeletonKind::Library => generate_library(root, base, config, out),
    }
}

pub fn generate_library<C: ProductConfig, W: Write>(
    root: &OutputRoot,
    base: &Path,
    config: &C,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    create_root(root, base)?;
    let skeleton = LibrarySkeleton::new(root, base);

    ensure_file_created(&skeleton.lib_go)?;
    ensure_file_created(&skeleton.test_go)?;

    overwrite_file(&skeleton.lib_go, templates::library::LIB_GO)?;
    overwrite_file(&skeleton.test_go, templates::library::LIB_TEST_GO)?;

    print_instructions(SkeletonKind::Library, root, config, out)?;

    Ok(vec![skeleton.lib_go, skeleton.test_go])
}

pub fn generate_cli<C: ProductConfig, W: Write>(
    root: &OutputRoot,
    base: &Path,
    config: &C,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    create_root(root, base)?;
    let skeleton = CliSkeleton::new(root, base);

    ensure_file_created(&skeleton.main_go)?;
    overwrite_file(&skeleton.main_go, templates::cli::MAIN_GO)?;

    print_instructions(SkeletonKind::Cli, root, config, out)?;

    Ok(vec![skeleton.main_go])
}

pub fn generate_server<C: ProductConfig, W: Write>(
    root: &OutputRoot,
    base: &Path,
    config: &C,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    create_root(root, base)?;
    let skeleton = ServerSkeleton::new(root, base);

    ensure_dir_created(&skeleton.templates_dir)?;
    ensure_dir_created(&skeleton.static_dir)?;
    ensure_file_created(&skeleton.index_html)?;
    ensure_file_created(&skeleton.index_js)?;
    ensure_file_created(&skeleton.index_css)?;
    ensure_file_created(&skeleton.main_go)?;

    overwrite_file(&skeleton.index_html, templates::server::INDEX_HTML)?;
    overwrite_file(&skeleton.index_css, templates::server::INDEX_CSS)?;
    overwrite_file(&skeleton.index_js, templates::server::INDEX_JS)?;
    overwrite_file(&skeleton.main_go, templates::server::MAIN_GO)?;

    print_instructions(SkeletonKind::Server, root, config, out)?;

    Ok(vec![
        skeleton.index_html,
        skeleton.index_js,
        skeleton.index_css,
        skeleton.main_go,
    ])
}

fn create_root(root: &OutputRoot, base: &Path) -> Result<()> {
    if root.is_current_dir() {
        return Ok(());
    }

    // Permission failures land here too; the message stays the same
    ensure_dir_created(&root.resolve(base)).map_err(|_| ScaffoldError::RootExists {
        root: root.to_string(),
    })
}

fn print_instructions<C: ProductConfig, W: Write>(
    kind: SkeletonKind,
    root: &OutputRoot,
    config: &C,
    out: &mut W,
) -> Result<()> {
    let steps = config.next_steps(kind, root);

    let mut text = String::new();
    text.push_str(config.instructions_heading(kind));
    text.push_str("\n\n");
    for (i, step) in steps.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, step));
    }
    text.push('\n');
    text.push_str(&config.farewell());
    text.push('\n');

    screen::clear(out).map_err(ScaffoldError::Output)?;
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(ScaffoldError::Output)
}
