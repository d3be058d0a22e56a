//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Composite map hierarchies: recursive drawing and name lookup
#[derive(Parser, Debug)]
#[command(name = "rsmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the demo map recursively, one line per visited component
    Draw {
        /// Draw origin x coordinate
        #[arg(short = 'x', long, default_value_t = 0, env = "RSMAP_ORIGIN_X")]
        origin_x: i64,

        /// Draw origin y coordinate
        #[arg(short = 'y', long, default_value_t = 0, env = "RSMAP_ORIGIN_Y")]
        origin_y: i64,
    },

    /// Search the demo map for a component by name
    Find {
        /// Component name to look up
        name: String,
    },

    /// Show the demo map hierarchy as a tree
    Tree,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
