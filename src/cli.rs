//! CLI argument parsing for encoding, decoding, and the bundled demo suite.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "tablesuite",
    version,
    about = "Generate recorder HTML test suites and read them back as authoring calls",
    after_help = "Examples:\n  tablesuite encode --steps login.json --out login.html\n  tablesuite decode login.html\n  tablesuite decode login.html --json\n  tablesuite demo --env dev --user demoUser:dev:secret",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log decoded rows and folded idioms to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
    Demo(DemoArgs),
}

/// Where rendered suite lines go.
#[derive(Parser, Debug)]
pub struct OutputArgs {
    /// Output path for the suite file (replaced if present)
    #[arg(long, value_name = "PATH", conflicts_with = "temp_prefix")]
    pub out: Option<PathBuf>,

    /// Write to a new temp file `<PREFIX>XXXXXX.html` instead of --out
    #[arg(long, value_name = "PREFIX")]
    pub temp_prefix: Option<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Render a JSON step sequence into recorder suite markup")]
pub struct EncodeArgs {
    /// JSON array of steps: [{"name": "...", "arg1": "...", "arg2": "..."}]
    #[arg(long, value_name = "PATH")]
    pub steps: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
#[command(about = "List the authoring calls recorded in a suite file")]
pub struct DecodeArgs {
    /// Suite file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Skip folding comment blocks and highlight idioms
    #[arg(long)]
    pub raw: bool,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Render the bundled example suite")]
pub struct DemoArgs {
    /// Generator config JSON (highlight pause, sleep base, credential separator)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Password override: user:password or user:env:password (repeatable)
    #[arg(long = "user", value_name = "ENTRY")]
    pub users: Vec<String>,

    /// Target environment: lcl, dev, test, or prod
    #[arg(long, default_value = "test")]
    pub env: String,

    #[command(flatten)]
    pub output: OutputArgs,
}
