use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::component::TreeDisplay;
use crate::render::RecordBuffer;
use crate::scene::demo_map;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Draw { origin_x, origin_y }) => _draw(*origin_x, *origin_y),
        Some(Commands::Find { name }) => _find(name),
        Some(Commands::Tree) => _tree(),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn _draw(origin_x: i64, origin_y: i64) -> CliResult<()> {
    debug!("origin: ({}, {})", origin_x, origin_y);
    let map = demo_map();

    let mut buffer = RecordBuffer::new();
    map.draw(origin_x, origin_y, &mut buffer);

    let mut stdout = io::stdout().lock();
    for record in buffer.records() {
        writeln!(stdout, "{}", record)?;
    }
    Ok(())
}

#[instrument]
fn _find(name: &str) -> CliResult<()> {
    debug!("name: {:?}", name);
    let map = demo_map();

    // Absence is a normal outcome, not an error
    match map.find_child(name) {
        Some(found) => output::success(&format!("Found: {} {}", found.kind(), found)),
        None => output::failure("Not found"),
    }
    Ok(())
}

#[instrument]
fn _tree() -> CliResult<()> {
    let map = demo_map();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", map.to_tree_string())?;
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
