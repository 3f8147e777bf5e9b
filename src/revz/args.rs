use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "revz")]
#[command(about = "Strategy notes keyed by topic aliases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global store
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the note for one alias
    #[command(alias = "l")]
    Lookup {
        /// The alias to resolve (e.g. u, understanding)
        alias: String,
    },

    /// List every topic with its aliases
    #[command(alias = "ls")]
    List,

    /// Interactive prompt (the default when no command is given)
    #[command(alias = "i")]
    Repl,

    /// Write the stock skills.json and settings.json
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Show or change settings
    Config {
        /// Setting name (currently only "dark")
        key: Option<String>,

        /// New value
        value: Option<String>,
    },

    /// Print the resolved store file paths
    Path,
}
