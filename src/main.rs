use clap::{Parser as ClapParser, Subcommand};
use filterparams::cli::{self, CheckOptions, CliError};
use std::io::{self, BufRead};

const ENV_LOG: &str = "FILTERPARAMS_LOG";

#[derive(ClapParser)]
#[command(name = "filterparams")]
#[command(about = "Turn filter[...] query arguments into a filter tree and sort directives")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse key=value query arguments and print the result as JSON
    Check {
        /// Decoded key=value pairs (read from stdin, one per line, if not provided)
        pairs: Vec<String>,

        /// Enabled operation, repeatable (all built-ins if not provided)
        #[arg(short, long = "operation", env = "FILTERPARAMS_OPERATIONS", value_delimiter = ',')]
        operations: Vec<String>,

        /// Operation for params that don't name one
        #[arg(short, long, env = "FILTERPARAMS_DEFAULT_OPERATION")]
        default_operation: Option<String>,

        /// Print no filter instead of failing when nothing is declared
        #[arg(long)]
        allow_empty: bool,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Parse a binding expression and print its canonical form
    Binding {
        /// The binding expression
        expression: String,
    },

    /// Show documentation, optionally for one topic
    Docs {
        /// Topic name (omit to list topics)
        topic: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            pairs,
            operations,
            default_operation,
            allow_empty,
            pretty,
        } => run_check(pairs, operations, default_operation, allow_empty, pretty),
        Commands::Binding { expression } => {
            cli::execute_binding(&expression).map(|canonical| println!("{}", canonical))
        }
        Commands::Docs { topic: None } => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Docs { topic: Some(topic) } => {
            cli::get_doc_topic(&topic).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    pairs: Vec<String>,
    operations: Vec<String>,
    default_operation: Option<String>,
    allow_empty: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let pairs = if pairs.is_empty() && !atty::is(atty::Stream::Stdin) {
        io::stdin()
            .lock()
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        pairs
    };

    let options = CheckOptions {
        pairs,
        operations,
        default_operation,
        allow_empty,
        pretty,
    };

    println!("{}", cli::execute_check(&options)?);
    Ok(())
}
