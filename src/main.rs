//! supertiny - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use supertiny::util::config::{load_config, load_project_config, ToolConfig};
use supertiny::util::logger::{self, LogLevel};
use supertiny::{compile_file, Compiler, TransformStrategy, NAME, VERSION};

/// Translate Lisp-style call expressions into C-style calls
#[derive(Parser, Debug)]
#[command(name = "supertiny")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (DEBUG logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./supertiny.toml when present)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Transform strategy: visitor or recursive
    #[arg(long, value_name = "STRATEGY", global = true)]
    strategy: Option<TransformStrategy>,

    /// Log every traversal event (TRACE logging)
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a source file and print the result
    Compile {
        /// Source file to compile
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compile code given on the command line
    Eval {
        /// Code to compile
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print an intermediate stage as JSON
    Dump {
        /// Stage to print
        #[arg(long, value_enum, default_value_t = Stage::Ast)]
        stage: Stage,

        /// Code to compile
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print version information
    Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Stage {
    Tokens,
    Ast,
    Target,
}

/// File config first, then CLI flags on top
fn resolve_config(args: &Args) -> Result<ToolConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            load_project_config(&cwd)?
        }
    };

    if let Some(strategy) = args.strategy {
        config.compile.transform = strategy;
    }
    if args.trace {
        config.compile.trace_traversal = true;
        config.log.level = LogLevel::Trace;
    } else if args.verbose {
        config.log.level = config.log.level.min(LogLevel::Debug);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    logger::init_with_level(config.log.level);

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Transform strategy: {}", config.compile.transform);
    }

    match args.command {
        Commands::Compile { file } => {
            let output = compile_file(&file, config.compile)
                .with_context(|| format!("Failed to compile: {}", file.display()))?;
            println!("{}", output);
        }
        Commands::Eval { code } => {
            let output = Compiler::with_config(config.compile)
                .compile(&code)
                .context("Failed to compile code")?;
            println!("{}", output);
        }
        Commands::Dump { stage, code } => {
            let compiler = Compiler::with_config(config.compile);
            let tokens = compiler.lex(&code)?;
            let json = match stage {
                Stage::Tokens => serde_json::to_string_pretty(&tokens)?,
                Stage::Ast => serde_json::to_string_pretty(&compiler.parse(&tokens)?)?,
                Stage::Target => {
                    let ast = compiler.parse(&tokens)?;
                    serde_json::to_string_pretty(&compiler.transform(&ast))?
                }
            };
            println!("{}", json);
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
