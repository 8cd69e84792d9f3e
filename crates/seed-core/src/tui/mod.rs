//! Interactive skeleton menu on a raw terminal
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod terminal;

pub use terminal::{map_key, restore, RawTerminal};

use crate::menu;
use crate::product::ProductConfig;
use crate::root::OutputRoot;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// Run the skeleton menu on the real terminal and generate the choice
/// under `root`, relative to the working directory
pub fn run<C: ProductConfig>(config: &C, root: &OutputRoot) -> Result<()> {
    let terminal = RawTerminal::open().context("failed to capture keyboard input")?;
    let mut stdout = io::stdout();

    menu::plant(terminal, root, Path::new(""), config, &mut stdout)?;

    Ok(())
}
