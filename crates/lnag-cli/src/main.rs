use clap::Parser;
use lnag_cli::{Cli, init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
