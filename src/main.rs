use std::io;

use anyhow::Result;
use bstkv::cli::{Args, CLI};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config();

    let mut cli = CLI::open(&config)?;
    cli.run(args.operation.into(), &mut io::stdout().lock())
}
