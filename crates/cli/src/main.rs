use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// cppack - a minimal local build tool for C++ projects
#[derive(Parser)]
#[command(name = "cppack")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the project
  #[command(alias = "compile")]
  Build {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    dir: String,
  },

  /// Run the built executable
  #[command(alias = "start")]
  Run {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    dir: String,
  },
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  let exit_code = match cli.command {
    Commands::Build { dir } => cmd::cmd_build(&dir, cli.verbose),
    Commands::Run { dir } => cmd::cmd_run(&dir),
  };

  std::process::exit(exit_code);
}
