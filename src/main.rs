use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser as ClapParser;
use frontend::{
    display_error,
    errors::errors::Error,
    lexer::lexer::{source_name, tokenize_file},
    parser::parser::{parse_with_options, ParseOptions, TruncationPolicy},
    read_excerpt_source,
};
use log::info;

#[derive(ClapParser, Debug)]
#[command(name = "frontend", about = "Tokenizes and parses a source file")]
struct Cli {
    /// Source file to read.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the parsed AST.
    #[arg(long)]
    ast: bool,

    /// Do not print the token stream.
    #[arg(long = "quiet-tokens")]
    quiet_tokens: bool,

    /// Reject tokens that cannot start a statement, and truncated input.
    #[arg(long)]
    strict: bool,

    /// Fail instead of recovering when input ends inside a definition.
    #[arg(long = "fail-on-truncation")]
    fail_on_truncation: bool,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let mut options = if self.strict {
            ParseOptions::strict()
        } else {
            ParseOptions::default()
        };

        if self.fail_on_truncation {
            options.truncation = TruncationPolicy::Fail;
        }

        options
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let start = Instant::now();

    let tokens = match tokenize_file(&cli.file) {
        Ok(tokens) => tokens,
        Err(error) => {
            report(&error, &cli.file);
            return ExitCode::FAILURE;
        }
    };

    info!("tokenized in {:?}", start.elapsed());

    if !cli.quiet_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let file_name = Rc::new(source_name(&cli.file));
    let (parser, ast) = parse_with_options(tokens, file_name, cli.parse_options());

    info!("parsed in {:?}", parse_start.elapsed());

    let ast = match ast {
        Ok(ast) => ast,
        Err(error) => {
            report(&error, &cli.file);
            return ExitCode::FAILURE;
        }
    };

    if parser.is_truncated() {
        eprintln!("warning: input ended inside a definition, the AST is incomplete");
    }

    if cli.ast {
        println!("{:#?}", ast);
    }

    info!("total time: {:?}", start.elapsed());
    ExitCode::SUCCESS
}

fn report(error: &Error, path: &Path) {
    display_error(error, &read_excerpt_source(path));
}
