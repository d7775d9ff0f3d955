use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "attrmodel")]
#[command(about = "Populate and validate schema-driven models from JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read settings from this TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List model classes and their attributes
    #[command(alias = "ls")]
    Classes,

    /// Build models from JSON and print them flattened
    Populate {
        /// Model class handle (e.g. Section, EntryType, Tag)
        handle: String,

        /// JSON file holding an object or an array of objects (stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Set an attribute on every model (VALUE is JSON, or a plain string)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate models built from JSON
    #[command(alias = "check")]
    Validate {
        /// Model class handle
        handle: String,

        /// JSON file holding an object or an array of objects (stdin if omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}
