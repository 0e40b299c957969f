use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = cmd::Cli::parse();
    cmd::run(cli)
}
