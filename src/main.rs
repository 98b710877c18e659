use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

mod cli;

use cli::{Command, DecodeArgs, DemoArgs, EncodeArgs, OutputArgs, RootArgs};
use tablesuite::config;
use tablesuite::credentials::{Env, RuntimeCredentials};
use tablesuite::decode::decode_file;
use tablesuite::model::Sequence;
use tablesuite::{demo, encode, listing, output};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Encode(args) => cmd_encode(args),
        Command::Decode(args) => cmd_decode(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

/// `--verbose` forces debug; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_encode(args: EncodeArgs) -> Result<()> {
    let sequence = read_sequence(&args.steps)?;
    let lines = encode::render(&sequence);
    emit(&args.output, &lines)
}

fn cmd_decode(args: DecodeArgs) -> Result<()> {
    let cases = decode_file(&args.file, args.raw)?;
    if args.json {
        println!("{}", listing::format_json(&cases)?);
    } else {
        println!("Parsing file: '{}'...", args.file.display());
        print!("{}", listing::format_text(&cases));
        println!("...done.");
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let config = config::load_or_default(args.config.as_deref())?;
    let runtime = RuntimeCredentials::parse(&args.users, &config.credential_separator)?;
    let env: Env = args.env.parse()?;
    let sequence = demo::build_demo(&config, &runtime, env)?;
    emit(&args.output, &encode::render(&sequence))
}

fn read_sequence(path: &Path) -> Result<Sequence> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse steps JSON {}", path.display()))
}

/// Write to `--out`, a temp file, or stdout when neither is given.
fn emit(target: &OutputArgs, lines: &[String]) -> Result<()> {
    if let Some(out) = &target.out {
        output::write_lines(out, lines)?;
        println!("Wrote suite file to {}", out.display());
    } else if let Some(prefix) = &target.temp_prefix {
        let path = output::write_temp_html(prefix, lines)?;
        println!("{}", path.display());
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}
