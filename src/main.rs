// hello-base: small command line front end over the path and listener helpers.
// Usage: hello-base [--config FILE] [--log FILTER] <command>

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hello_base::settings::{self, Settings, SettingsError};
use hello_base::{logging, AbsPath, BoundListener, PathError, Port};

#[derive(Parser, Debug)]
#[command(name = "hello-base", version, about = "Absolute path and listener tools")]
struct Cli {
    /// Settings file to use instead of the per-user one.
    #[arg(long, global = true)]
    config: Option<String>,

    /// `tracing` filter, like `hello_base=debug`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a path, its name, its parent and what is on disk there.
    Show { path: String },
    /// Print PATH with SEGMENT added to the end.
    Add { path: String, segment: String },
    /// Print the folder above PATH.
    Up { path: String },
    /// Make sure a folder exists at PATH, creating parents as needed.
    Ensure { path: String },
    /// Move or rename SRC to DST.
    Mv { src: String, dst: String },
    /// Delete a file or empty folder.
    Rm { path: String },
    /// Bind a listening socket, report the port, then close it.
    Listen {
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load(cli.config.as_deref())?;
    logging::init(cli.log.as_deref().or(settings.log_filter.as_deref()));

    let resolve = |s: &str| resolve_path(s, &settings);
    match cli.command {
        Command::Show { path } => {
            let p = resolve(&path)?;
            println!("path: {p}");
            println!("name: {}", p.name());
            match p.up() {
                Ok(parent) => println!("parent: {parent}"),
                Err(_) => println!("parent: (root)"),
            }
            println!("kind: {}", p.kind().as_str());
        }
        Command::Add { path, segment } => println!("{}", resolve(&path)?.add(&segment)?),
        Command::Up { path } => println!("{}", resolve(&path)?.up()?),
        Command::Ensure { path } => resolve(&path)?.ensure_folder()?,
        Command::Mv { src, dst } => resolve(&src)?.move_to(&resolve(&dst)?)?,
        Command::Rm { path } => resolve(&path)?.delete()?,
        Command::Listen { port } => {
            let port = port.map(Port).unwrap_or(settings.listen_port);
            let server = BoundListener::bind(port)?;
            println!("listening on port {}", server.port());
            server.close();
            println!("closed");
        }
    }
    Ok(())
}

fn load(config: Option<&str>) -> Result<Settings> {
    match config {
        Some(file) => {
            let file = AbsPath::new(file).with_context(|| format!("--config {file}"))?;
            Ok(settings::load_settings_from(&file)?)
        }
        None => match settings::load_settings() {
            // No per-user config dir is not fatal for a CLI run.
            Err(SettingsError::NoConfigDir) => Ok(Settings::default()),
            other => Ok(other?),
        },
    }
}

// Relative arguments are taken from `home_folder` when one is configured.
fn resolve_path(arg: &str, settings: &Settings) -> Result<AbsPath> {
    match (AbsPath::new(arg), &settings.home_folder) {
        (Ok(p), _) => Ok(p),
        (Err(PathError::NotAbsolute(_)), Some(home)) => Ok(home.add(arg)?),
        (Err(e), None) => Err(e).with_context(|| format!("`{arg}` is not an absolute path")),
        (Err(e), Some(_)) => Err(e.into()),
    }
}
