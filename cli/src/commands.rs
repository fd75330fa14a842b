pub mod inventory;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nbinv_common::config::{CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
use nbinv_common::inventory::Request;

/// Ansible calls dynamic inventory scripts with `--list` or `--host <name>`,
/// so both are top-level flags rather than subcommands.
#[derive(Parser, Debug)]
#[command(name = "nbinv")]
#[command(about = "NetBox as a dynamic inventory for Ansible.")]
#[command(version)]
pub struct CommandLine {
    /// Path of the YAML configuration
    #[arg(short = 'c', long, env = CONFIG_FILE_ENV, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Print all hosts with their vars as Ansible dynamic inventory
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print the vars of a single host
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn request(&self) -> Request {
        match (&self.host, self.list) {
            (Some(name), _) => Request::Host(name.clone()),
            (None, true) => Request::List,
            (None, false) => Request::Nothing,
        }
    }
}
