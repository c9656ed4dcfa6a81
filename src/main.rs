use clap::{Parser as ClapParser, Subcommand};
use curvelang::cli::{self, CliError, EvalOptions, EvalResult, ReplOptions, TableOptions};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CURVE_LOG=debug`.
const LOG_ENV: &str = "CURVE_LOG";

#[derive(ClapParser)]
#[command(name = "curve")]
#[command(about = "Curve - evaluate compact prefix formulas for growth and cost curves")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula once
    Eval {
        /// The formula to evaluate
        #[arg(allow_hyphen_values = true)]
        formula: String,

        /// First input, read by '('
        #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
        l: f32,

        /// Second input, read by ')'
        #[arg(short, long, default_value_t = 5.0, allow_negative_numbers = true)]
        v: f32,

        /// Reject malformed formulas instead of treating the broken parts as 0
        #[arg(long)]
        strict: bool,

        /// Only check the formula, don't evaluate
        #[arg(long)]
        syntax_only: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a formula for a range of L
    Table {
        /// The formula to evaluate
        #[arg(allow_hyphen_values = true)]
        formula: String,

        /// First value of L
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        from: f32,

        /// Last value of L
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        to: f32,

        /// Distance between values of L
        #[arg(long, default_value_t = 1.0)]
        step: f32,

        /// Second input, read by ')'
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        v: f32,

        /// Reject malformed formulas instead of treating the broken parts as 0
        #[arg(long)]
        strict: bool,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed form of a formula with every separator spelled out
    Tree {
        /// The formula to parse
        #[arg(allow_hyphen_values = true)]
        formula: String,
    },

    /// Read formulas from stdin and print their results
    Repl {
        /// Initial first input
        #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
        l: f32,

        /// Initial second input
        #[arg(short, long, default_value_t = 5.0, allow_negative_numbers = true)]
        v: f32,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'curve docs' to list categories)
        category: String,
    },

    /// Short tutorial
    Onboard,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            formula,
            l,
            v,
            strict,
            syntax_only,
            json,
        } => run_eval(
            EvalOptions {
                formula,
                l,
                v,
                strict,
                syntax_only,
            },
            json,
        ),
        Commands::Table {
            formula,
            from,
            to,
            step,
            v,
            strict,
            json,
        } => run_table(
            TableOptions {
                formula,
                from,
                to,
                step,
                v,
                strict,
            },
            json,
        ),
        Commands::Tree { formula } => cli::check_source_len(&formula).map(|()| {
            println!("{}", curvelang::parse(&formula));
        }),
        Commands::Repl { l, v } => {
            let options = ReplOptions {
                l,
                v,
                interactive: atty::is(atty::Stream::Stdin),
            };
            cli::run_repl(io::stdin().lock(), io::stdout().lock(), &options)
        }
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
        Commands::Onboard => {
            print!("{}", cli::get_onboarding_content());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(options: EvalOptions, json: bool) -> Result<(), CliError> {
    match cli::execute_eval(&options)? {
        EvalResult::SyntaxValid => println!("Syntax is valid"),
        EvalResult::Success(evaluation) => {
            if json {
                let value = cli::evaluation_to_json(&evaluation);
                println!("{}", serde_json::to_string(&value)?);
            } else {
                println!("{}", evaluation.result);
            }
        }
    }
    Ok(())
}

fn run_table(options: TableOptions, json: bool) -> Result<(), CliError> {
    let rows = cli::execute_table(&options)?;

    if json {
        let value = cli::table_to_json(&rows);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{:>12}  {}", "L", "result")?;
    for row in rows {
        writeln!(out, "{:>12}  {}", row.l, row.result)?;
    }
    Ok(())
}
