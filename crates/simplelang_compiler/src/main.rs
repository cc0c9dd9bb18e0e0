use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use simplelang_compiler::cli::{Cli, Command, Emit};
use simplelang_compiler::{dump_ast, dump_tokens};
use simplelang_session::diagnostics::PrettyDiagnosticEmitter;
use simplelang_session::sourcemap::Source;
use simplelang_session::{ErrorsEmitted, Session};

#[derive(thiserror::Error, Debug)]
enum DriverError {
    #[error("could not read `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("could not write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("errors while compiling")]
    HadErrors,
}

impl From<ErrorsEmitted> for DriverError {
    fn from(_: ErrorsEmitted) -> Self {
        Self::HadErrors
    }
}

type DriverResult<T> = Result<T, DriverError>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(cli.log_level())
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> DriverResult<()> {
    match cli.command {
        Command::Build {
            input,
            source,
            output,
            emit,
        } => {
            let source = if source {
                Source::new("<unnamed>", input)
            } else {
                Source::from_file(&input).map_err(|source| DriverError::Read {
                    path: input.clone(),
                    source,
                })?
            };

            tracing::info!(name = %source.name, ?emit, "building");

            let mut session = Session::new(PrettyDiagnosticEmitter::default());

            let text = match emit {
                Emit::Asm => simplelang_compiler::compile_in_session(&mut session, source)?
                    .to_string(),
                Emit::Tokens => dump_tokens(&source.source),
                Emit::Ast => {
                    let result = dump_ast(&source.source);
                    let source_id = session.sources.insert(source);

                    match result {
                        Ok(tree) => tree,
                        Err(err) => {
                            session.report(err, &source_id)?;
                            return Err(DriverError::HadErrors);
                        }
                    }
                }
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .map_err(|source| DriverError::Write { path, source })?;
                }
                None => print!("{text}"),
            }

            Ok(())
        }
    }
}
