use clap::{Args, Parser, Subcommand};
use log::debug;
use profiler_sql::*;
use std::io::{self, Read};
use std::process::ExitCode;

/// Generate profiling metric SQL for a database dialect
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a JSON profile request to SQL
    Compile(CompileArgs),
    /// Compile one regex count metric to SQL
    Metric(MetricArgs),
    /// List the supported dialects
    Dialects,
}

#[derive(Debug, Args)]
struct DialectArgs {
    /// The SQL dialect to generate
    #[arg(short, long, default_value = "bigquery")]
    dialect: String,
    /// Quote every identifier, even ones which don't need it
    #[arg(long)]
    quote_all: bool,
}

#[derive(Debug, Args)]
struct CompileArgs {
    #[command(flatten)]
    dialect: DialectArgs,
    /// The profile request JSON. If empty, stdin will be used.
    request: Option<String>,
}

#[derive(Debug, Args)]
struct MetricArgs {
    #[command(flatten)]
    dialect: DialectArgs,
    /// Table to profile
    #[arg(short, long)]
    table: String,
    /// Column whose values are tested against the pattern
    #[arg(short, long)]
    column: String,
    /// Regular expression to search for
    #[arg(short, long)]
    expression: String,
    /// Count the rows which do not match instead
    #[arg(long)]
    negate: bool,
}

fn get_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}

fn get_compiler(args: &DialectArgs) -> Result<Compiler, String> {
    let dialect = args
        .dialect
        .parse::<DialectName>()
        .map_err(|e| e.to_string())?;
    let mut options = Options::from(dialect);
    if args.quote_all {
        options.identifier_quoting = IdentifierQuoting::Always;
    }
    debug!("using the {dialect} dialect");
    Ok(Compiler::new(options))
}

fn compile(args: CompileArgs) -> Result<String, String> {
    let compiler = get_compiler(&args.dialect)?;
    let request = match args.request {
        Some(request) => request,
        None => get_stdin()?,
    };
    compiler.compile(&request).map_err(|e| e.to_string())
}

fn metric(args: MetricArgs) -> Result<String, String> {
    let compiler = get_compiler(&args.dialect)?;
    let column = ColumnRef::new(args.column);
    let metric: Box<dyn Metric> = if args.negate {
        Box::new(NotMatchRegexCount::new(column, args.expression))
    } else {
        Box::new(MatchRegexCount::new(column, args.expression))
    };
    compiler
        .compile_metrics(&args.table, &[metric])
        .map_err(|e| e.to_string())
}

fn dialects() -> Result<String, String> {
    Ok(DialectName::ALL
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    let result = match args.command {
        Command::Compile(args) => compile(args),
        Command::Metric(args) => metric(args),
        Command::Dialects => dialects(),
    };
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
