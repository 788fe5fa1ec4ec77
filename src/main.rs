use clap::Parser;
use miette::Result;
use panel::cli::Cli;
use panel::output::{LineReportHandler, Printer};

fn main() -> Result<()> {
    LineReportHandler::install()?;

    if panel::cli::wants_help(std::env::args().skip(1)) {
        println!("{}", panel::cli::usage());
        return Ok(());
    }

    let cli = Cli::parse();
    let printer = Printer::new();

    panel::cli::build::run(cli.build, &printer)?;

    Ok(())
}
