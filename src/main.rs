use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use colored::Colorize;
use log::{debug, info, LevelFilter};

use lowc::{
    ast::{
        json::{program_from_str, program_to_json},
        statements::Stmt,
    },
    compiler::compiler::{compile_program, parse_source},
    display_error,
    errors::errors::Error,
};

#[derive(ClapParser)]
#[command(name = "lowc", about = "Lowers a small typed language to C source")]
struct Cli {
    /// Source file, or a JSON AST when it ends in `.json`
    input: PathBuf,
    /// Where to write the C output (default: input with a `.c` extension)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Treat the input as a JSON AST regardless of its extension
    #[arg(long)]
    from_json: bool,
    /// Also write the parsed AST as JSON to this path
    #[arg(long)]
    emit_ast: Option<PathBuf>,
    /// Print the C output instead of writing a file
    #[arg(long)]
    stdout: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

enum Failure {
    Compile(Error),
    Io(String),
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Failure::Compile(error)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Error reading file '{}': {}", cli.input.display(), e).red()
            );
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());

    match run(&cli, &source, &file_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Compile(e)) => {
            display_error(&e, &source, &file_name);
            ExitCode::FAILURE
        }
        Err(Failure::Io(message)) => {
            eprintln!("{}", message.red());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, source: &str, file_name: &str) -> Result<(), Failure> {
    let start = Instant::now();
    let program = load_program(cli, source, file_name)?;

    if let Some(ast_path) = &cli.emit_ast {
        write_file(ast_path, &pretty_json(&program))?;
    }

    let compile_start = Instant::now();
    let compiled = compile_program(&program)?;
    info!("Compiled in {:?}", compile_start.elapsed());

    if cli.stdout {
        print!("{}", compiled);
    } else {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| cli.input.with_extension("c"));
        write_file(&output, &compiled)?;
    }

    info!("Total time: {:?}", start.elapsed());
    Ok(())
}

fn load_program(cli: &Cli, source: &str, file_name: &str) -> Result<Vec<Stmt>, Error> {
    let is_json = cli.from_json || cli.input.extension().is_some_and(|ext| ext == "json");

    if is_json {
        debug!("Loading {} as a JSON AST", file_name);
        let load_start = Instant::now();
        let program = program_from_str(source)?;
        info!("Loaded AST in {:?}", load_start.elapsed());
        Ok(program)
    } else {
        parse_source(source, file_name)
    }
}

fn pretty_json(program: &[Stmt]) -> String {
    let json = program_to_json(program);
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

fn write_file(path: &Path, contents: &str) -> Result<(), Failure> {
    fs::write(path, contents)
        .map_err(|e| Failure::Io(format!("Error writing file '{}': {}", path.display(), e)))?;
    info!("Wrote {}", path.display());
    Ok(())
}
