use clap::Parser;

use crate::addon::SAVED_VARIABLES;

#[derive(Parser, Debug, Clone)]
#[command(name = "helloworld")]
#[command(about = "A tiny note-taking addon driven by /hw slash commands")]
pub struct AppArgs {
    #[arg(long, help = "Data directory (or set HELLOWORLD_DATA_DIR, default: data)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = SAVED_VARIABLES, help = "Saved variables record name")]
    pub record: String,

    #[arg(long, help = "Keep saved variables in memory only")]
    pub ephemeral: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Run one /hw command and exit, e.g. `write buy milk`"
    )]
    pub command: Vec<String>,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns the one-shot command as a single line, if one was given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
