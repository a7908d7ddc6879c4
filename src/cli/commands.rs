//! Command dispatch: one parsed invocation, one atomic outline transform.

use std::io::Read;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::edit;
use crate::errors::OutlineError;
use crate::parser::{serialize, OutlineParser};

/// Reads stdin, runs the requested operation, and returns the text for
/// stdout. The caller only writes on success, so a failed operation never
/// produces partial output.
pub fn execute_command(cli: &Cli) -> CliResult<String> {
    let Some(command) = &cli.command else {
        return Ok(String::new());
    };
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(OutlineError::from)?;
    run_operation(&input, command)
}

/// Applies one operation to the outline text. Pure apart from logging,
/// which keeps the whole engine testable without a process boundary.
#[instrument(level = "debug", skip(input))]
pub fn run_operation(input: &str, command: &Commands) -> CliResult<String> {
    let mut outline = OutlineParser::new().parse(input)?;
    debug!("parsed {} node(s)", outline.len());

    match command {
        Commands::Show => {}
        Commands::Add {
            address,
            placement,
            text,
        } => {
            ensure_single_line(text)?;
            edit::add(&mut outline, address, placement.placement(), text)?;
        }
        Commands::Edit { address, text } => {
            ensure_single_line(text)?;
            edit::edit(&mut outline, address, text)?;
        }
        Commands::Move {
            source,
            placement,
            destination,
        } => {
            edit::move_subtree(&mut outline, source, placement.placement(), destination)?;
        }
        Commands::Delete { address } => {
            edit::delete(&mut outline, address)?;
        }
    }

    Ok(serialize(&outline))
}

/// A note is one line by construction; reject text that would break the
/// serialization format before it reaches the tree.
fn ensure_single_line(text: &str) -> CliResult<()> {
    if text.contains('\n') {
        return Err(CliError::InvalidArgs(
            "note text must not contain line breaks".to_string(),
        ));
    }
    Ok(())
}
