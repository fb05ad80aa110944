use clap::{Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "hypy", about = "Hyper-V client: credential and connection settings")]
pub struct Cli {
    /// User name (overrides credentials.user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Password, or one of: prompt, save, load (overrides credentials.pass)
    #[arg(short, long, global = true)]
    pub pass: Option<String>,

    /// Domain (overrides credentials.domain)
    #[arg(short, long, global = true)]
    pub domain: Option<String>,

    /// Hyper-V host (overrides credentials.host)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Connection protocol (overrides options.protocol)
    #[arg(long, global = true)]
    pub protocol: Option<String>,

    /// Increase verbosity (-v = DEBUG, -vv = TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            user: self.user.clone(),
            pass: self.pass.clone(),
            domain: self.domain.clone(),
            host: self.host.clone(),
            protocol: self.protocol.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a starter ~/.hypy.conf
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Resolve and print the session configuration (the password is never shown)
    Show,
}
