use clap::Parser;

use repo_cloc::cli::Cli;
use repo_cloc::commands::{report_failure, run_languages, run_scan};
use repo_cloc::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let exit_code = match cli.validate() {
        Err(e) => report_failure(&e, &cli),
        Ok(()) if cli.print_languages => run_languages(&cli),
        Ok(()) => run_scan(&cli),
    };

    std::process::exit(exit_code);
}
