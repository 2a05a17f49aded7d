//! Command-line entry point for `openit`.

use anyhow::Result;
use clap::Parser;

use openit::{config::Config, editor::EditorKind, error::LaunchError, launch};

#[derive(Parser)]
#[command(
    name = "openit",
    about = "Smart-open a file or project workspace in the right editor"
)]
struct Cli {
    /// File or directory to open (default is the current directory)
    #[arg(value_name = "NAME", default_value = ".")]
    name: String,

    /// Don't activate the application (only works with subl)
    #[arg(long, short = 'b')]
    background: bool,

    /// Open with Visual Studio Code
    #[arg(long, group = "editor")]
    code: bool,

    /// Open with Sublime Text 3
    #[arg(long, group = "editor")]
    subl: bool,
}

impl Cli {
    /// The editor an explicit flag selected, if any.
    fn explicit_editor(&self) -> Option<EditorKind> {
        if self.code {
            Some(EditorKind::VsCode)
        } else if self.subl {
            Some(EditorKind::SublimeText3)
        } else {
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("openit: {err:#}");
            std::process::exit(exit_code(&err));
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let kind = match cli.explicit_editor() {
        Some(kind) => kind,
        None => {
            let config = Config::load()?;
            launch::choose_editor(&cli.name, config.default_editor()?)
        }
    };
    let planned = launch::plan(kind, &cli.name, cli.background)?;
    launch::run(&planned)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LaunchError>()
        .map_or(1, LaunchError::exit_code)
}
