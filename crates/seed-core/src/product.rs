//! Product configuration trait for CLI binaries
//!
//! The core only knows how to lay files out. Everything the user reads
//! around that (usage text, setup commands, the closing line) comes from
//! the binary's implementation of this trait.

use crate::root::OutputRoot;
use crate::skeleton::SkeletonKind;

/// Configuration trait for the product shipping the generators
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the binary name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Lines printed when no action is given
    fn usage(&self) -> Vec<String>;

    /// Command that initializes a module in the generated project
    fn module_init_command(&self) -> &'static str;

    /// Command that installs the generated project's dependencies
    fn dependency_command(&self) -> &'static str;

    /// Closing line printed after the instructions
    fn farewell(&self) -> String {
        format!("thank you for using {}", self.name())
    }

    /// Heading printed above the setup steps
    fn instructions_heading(&self, kind: SkeletonKind) -> &'static str {
        match kind {
            SkeletonKind::Library => "to initialize the project, run:",
            SkeletonKind::Cli | SkeletonKind::Server => "to install required packages run:",
        }
    }

    /// Generate the setup instructions after a skeleton was written
    fn next_steps(&self, kind: SkeletonKind, root: &OutputRoot) -> Vec<String> {
        let mut steps = Vec::new();

        if !root.is_current_dir() {
            steps.push(format!("cd {}", root.display_name()));
        }

        steps.push(self.module_init_command().to_string());

        // Libraries ship without third-party imports
        if kind != SkeletonKind::Library {
            steps.push(self.dependency_command().to_string());
        }

        steps
    }
}
