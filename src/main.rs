use std::process;

use clap::{CommandFactory, Parser};
use getpr::cli::{GlobalArgs, emit_url, help_styles, report_error};
use getpr::github::{HttpTransport, resolve_token};
use getpr::logging;
use getpr::resolve::{pull_request_for_commit, target_repository};

/// Find the pull request that introduced a commit
#[derive(Parser)]
#[command(name = "getpr", version, styles = help_styles())]
#[command(override_usage = "getpr [OPTIONS] [OWNER/REPO] <COMMIT>")]
#[command(after_long_help = "\
Without OWNER/REPO, the repository is read from the push URL of the remote.

Examples

  getpr 737302e                         # Repository from origin
  getpr skanehira/github-blame 737302e  # Explicit repository
  getpr --open HEAD~3                   # Also open it in the browser

Authentication: GITHUB_TOKEN, or a token in $HOME/.github_token")]
struct Cli {
    /// [OWNER/REPO] COMMIT
    #[arg(value_name = "ARGS", num_args = 0..=2)]
    args: Vec<String>,

    #[command(flatten)]
    global: GlobalArgs,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    logging::init(cli.global.verbose);

    if cli.args.is_empty() {
        let _ = Cli::command().print_help();
        return;
    }

    if let Err(e) = run(&cli) {
        process::exit(report_error(&e));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (slug, commit) = match cli.args.as_slice() {
        [commit] => (None, commit.as_str()),
        [slug, commit] => (Some(slug.as_str()), commit.as_str()),
        _ => anyhow::bail!("Expected [OWNER/REPO] <COMMIT>"),
    };

    let config = cli.global.load_config()?;
    let repo = cli.global.repository();
    let target = target_repository(&repo, slug, config.remote(cli.global.remote.as_deref()))?;

    let token = resolve_token()?;
    let transport = HttpTransport::new(config.api_url(), token);
    let pull_request = pull_request_for_commit(&transport, &target, commit)?;

    emit_url(&pull_request.url, config.open(cli.global.open))
}
