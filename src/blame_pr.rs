use std::path::PathBuf;
use std::process;

use clap::Parser;
use getpr::cli::{GlobalArgs, emit_url, help_styles, report_error};
use getpr::github::PrMatchers;
use getpr::logging;
use getpr::picker::SkimSelector;
use getpr::resolve::pull_request_url_for_line;

/// Pick a line of a file and print the pull request that last changed it
#[derive(Parser)]
#[command(name = "blame-pr", version, styles = help_styles())]
#[command(after_long_help = "\
The pull request number is read from the commit message, so this works for
commits merged with a merge commit (\"Merge pull request #42 from ...\") or
squashed (\"Subject (#42)\"). Add patterns for other conventions with
`pr-patterns` in the config file.")]
struct Cli {
    /// File to blame
    file: PathBuf,

    #[command(flatten)]
    global: GlobalArgs,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    logging::init(cli.global.verbose);

    if let Err(e) = run(&cli) {
        process::exit(report_error(&e));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.global.load_config()?;
    let matchers = PrMatchers::with_patterns(&config.pr_patterns)?;
    let repo = cli.global.repository();

    let url = pull_request_url_for_line(
        &repo,
        &cli.file,
        &SkimSelector,
        &matchers,
        config.remote(cli.global.remote.as_deref()),
    )?;

    emit_url(&url, config.open(cli.global.open))
}
