use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    error::Result,
    ioutils::project_name_from_dir,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    runner::ProcessRunner,
    scaffold::{Mode, Scaffolder},
};

/// Command-line arguments structure for react-forge.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new React project into a freshly created directory
    New(NewArgs),
    /// Scaffold into the current directory and record a snapshot baseline
    Init(InitArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct NewArgs {
    /// Name of the project directory to create
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Enable verbose logging output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Enable verbose logging output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command line arguments and returns the Cli structure.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Maps the `-v` occurrence count to a log level filter.
///
/// The per-step progress messages log at info, so they are visible without
/// any flag.
pub fn get_log_level_from_verbose(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Scaffolds a new project into a freshly created directory named after the
/// positional argument.
pub fn run_new(args: NewArgs) -> Result<()> {
    let engine: Box<dyn TemplateRenderer> = Box::new(MiniJinjaRenderer::new());
    let runner = ProcessRunner;

    let target_dir = PathBuf::from(&args.name);
    let scaffolder =
        Scaffolder::new(engine.as_ref(), &runner, target_dir, &args.name, Mode::NewProject);
    scaffolder.scaffold()?;

    println!("Scaffolding completed successfully in {}.", scaffolder.target_dir().display());
    Ok(())
}

/// Scaffolds into the current working directory. The project name is the
/// resolved basename of that directory.
pub fn run_init(_args: InitArgs) -> Result<()> {
    let engine: Box<dyn TemplateRenderer> = Box::new(MiniJinjaRenderer::new());
    let runner = ProcessRunner;

    let target_dir = std::env::current_dir()?;
    let project_name = project_name_from_dir(&target_dir)?;
    let scaffolder =
        Scaffolder::new(engine.as_ref(), &runner, target_dir, &project_name, Mode::InPlace);
    scaffolder.scaffold()?;

    println!("Scaffolding completed successfully in {}.", scaffolder.target_dir().display());
    Ok(())
}
