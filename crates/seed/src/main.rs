//! seed CLI - Skeleton project generation for Go

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use seed_core::{OutputRoot, ProductConfig};
use std::ffi::OsString;

/// seed product configuration
#[derive(Clone)]
pub struct SeedConfig;

impl ProductConfig for SeedConfig {
    fn name(&self) -> &'static str {
        "seed"
    }

    fn display_name(&self) -> &'static str {
        "seed"
    }

    fn cli_description(&self) -> &'static str {
        "seed - generate skeleton projects with ease"
    }

    fn usage(&self) -> Vec<String> {
        vec![
            self.cli_description().to_string(),
            format!("run '{} plant' to get started", self.name()),
        ]
    }

    fn module_init_command(&self) -> &'static str {
        "go mod init github.com/github-name/repo-name"
    }

    fn dependency_command(&self) -> &'static str {
        "go mod tidy"
    }

    fn farewell(&self) -> String {
        format!("thank you for using {} 🌱", self.display_name())
    }
}

#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = "seed - generate skeleton projects with ease")]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick a skeleton from an interactive menu and generate it
    Plant(PlantArgs),
    /// Anything else prints the usage lines
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Parser, Debug)]
pub struct PlantArgs {
    /// Directory to generate the skeleton in; "." uses the current directory
    #[arg(default_value = ".")]
    pub output: String,

    /// Anything after the output directory is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Parse the command line
///
/// Only `--help` and `--version` surface as clap errors; any other rejected
/// input falls back to printing the usage lines.
fn parse_args<I, T>(itr: I) -> std::result::Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(itr) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(e)
        }
        Err(_) => Ok(Args { command: None }),
    }
}

fn print_usage<C: ProductConfig>(config: &C) {
    for line in config.usage() {
        println!("{}", line);
    }
}

fn run(args: Args, config: &SeedConfig) -> Result<()> {
    match args.command {
        Some(Command::Plant(plant_args)) => {
            let root = OutputRoot::parse(&plant_args.output);
            let result = seed_core::run(config, &root);

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stdout().show_cursor();

            result
        }
        Some(Command::Unknown(_)) | None => {
            print_usage(config);
            Ok(())
        }
    }
}

fn main() {
    // Ensure the terminal leaves raw mode and shows the cursor on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        seed_core::tui::restore();
        let _ = console::Term::stdout().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C only arrives as a signal outside the menu's raw mode
    ctrlc::set_handler(move || {
        seed_core::tui::restore();
        let _ = console::Term::stdout().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let config = SeedConfig;

    if let Err(e) = run(args, &config) {
        println!("{} {:#}", "error:".red(), e);
        std::process::exit(1);
    }
}
