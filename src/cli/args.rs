//! CLI argument definitions using clap

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::address::Address;
use crate::edit::Placement;

/// Structural editor for plain-text outlines: reads an outline on stdin,
/// applies one operation, writes the result to stdout
#[derive(Parser, Debug)]
#[command(name = "otln")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Echo the outline unchanged
    Show,

    /// Insert a new note relative to an address
    Add {
        /// Target address, e.g. .0.2 (`.` targets the root with --prepend/--append)
        address: Address,

        #[command(flatten)]
        placement: PlacementArgs,

        /// Text of the new note
        text: String,
    },

    /// Replace the text of the note at an address
    Edit {
        /// Target address
        address: Address,

        /// Replacement text
        text: String,
    },

    /// Move a subtree relative to another address
    Move {
        /// Source address
        source: Address,

        #[command(flatten)]
        placement: PlacementArgs,

        /// Destination address
        destination: Address,
    },

    /// Remove the subtree at an address
    Delete {
        /// Target address
        address: Address,
    },
}

/// Exactly one placement flag per add/move invocation.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PlacementArgs {
    /// Insert as sibling before the target
    #[arg(long)]
    pub before: bool,

    /// Insert as sibling after the target
    #[arg(long)]
    pub after: bool,

    /// Insert as first child of the target
    #[arg(long)]
    pub prepend: bool,

    /// Insert as last child of the target
    #[arg(long)]
    pub append: bool,
}

impl PlacementArgs {
    pub fn placement(&self) -> Placement {
        if self.before {
            Placement::Before
        } else if self.after {
            Placement::After
        } else if self.prepend {
            Placement::Prepend
        } else {
            Placement::Append
        }
    }
}
