use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;
use sh_ast::{Policy, Span, UnitKind};
use sh_rewrite::{emit, selfcheck, EmitOptions};

#[derive(Parser)]
#[command(name = "sharpen", about = "Rewrite C++ with arrow functions, ?? and ?-> into standard C++")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Desugar a source file and emit standard C++.
    Rewrite {
        /// Input file (stdin if omitted or `-`).
        input: Option<PathBuf>,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Do not prepend the `first_not_null` helper definition.
        #[arg(long)]
        no_prelude: bool,
        /// Skip the built-in self-check that runs before rewriting.
        #[arg(long)]
        skip_selfcheck: bool,
    },
    /// Run the built-in self-check and report the result.
    Check,
    /// Classify the input and dump its top-level units as JSON.
    Tokens {
        /// Input file (stdin if omitted or `-`).
        input: Option<PathBuf>,
        /// Which greedy units the classifier may produce.
        #[arg(long, value_enum, default_value_t = PolicyArg::Bare)]
        policy: PolicyArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Signatures and instructions.
    Full,
    /// Signatures only.
    Signature,
    /// Single units only.
    Bare,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Full => Policy::FULL,
            PolicyArg::Signature => Policy::SIGNATURE,
            PolicyArg::Bare => Policy::BARE,
        }
    }
}

#[derive(Serialize)]
struct TokenRecord<'s> {
    kind: UnitKind,
    span: Span,
    text: &'s str,
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rewrite {
            input,
            output,
            no_prelude,
            skip_selfcheck,
        } => {
            if !skip_selfcheck {
                let checked = selfcheck::run()?;
                info!("self-check passed ({checked} cases)");
            }

            let source = read_input(input.as_deref())?;
            let options = EmitOptions {
                prelude: !no_prelude,
            };
            let output_str = emit(&source, &options);

            match &output {
                Some(path) => std::fs::write(path, &output_str)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(output_str.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Check => {
            let checked = selfcheck::run()?;
            eprintln!("OK: {checked} cases");
        }
        Commands::Tokens { input, policy } => {
            let source = read_input(input.as_deref())?;
            let records: Vec<TokenRecord> = sh_lexer::units(&source, policy.into())
                .map(|unit| TokenRecord {
                    kind: unit.kind,
                    span: unit.span,
                    text: unit.text(&source),
                })
                .collect();
            let json = serde_json::to_string_pretty(&records)?;
            println!("{json}");
        }
    }

    Ok(())
}
