use clap::Parser;

use gsc_cli::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gsc_cli::cli::init_tracing(&cli);
    gsc_cli::cli::run(cli)
}
