//! Command-line arguments shared by `getpr` and `blame-pr`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use clap::builder::styling::{AnsiColor, Color, Styles};

use crate::config::UserConfig;
use crate::git::Repository;

/// Help colors for both binaries.
pub fn help_styles() -> Styles {
    let bold = |color| {
        anstyle::Style::new()
            .bold()
            .fg_color(Some(Color::Ansi(color)))
    };
    Styles::styled()
        .header(bold(AnsiColor::Green))
        .usage(bold(AnsiColor::Green))
        .literal(bold(AnsiColor::Cyan))
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(bold(AnsiColor::Red))
        .valid(bold(AnsiColor::Green))
        .invalid(bold(AnsiColor::Yellow))
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Working directory for this command
    #[arg(short = 'C', value_name = "path", help_heading = "Global Options")]
    pub directory: Option<PathBuf>,

    /// User config file path
    #[arg(long, value_name = "path", help_heading = "Global Options")]
    pub config: Option<PathBuf>,

    /// Remote whose push URL names the repository [default: origin]
    #[arg(long, value_name = "name")]
    pub remote: Option<String>,

    /// Open the pull request in the default browser
    #[arg(long)]
    pub open: bool,

    /// Show debug info (-v), or also trace output (-vv)
    #[arg(
        long,
        short = 'v',
        action = clap::ArgAction::Count,
        help_heading = "Global Options"
    )]
    pub verbose: u8,
}

impl GlobalArgs {
    /// The user config: `--config` when given, else the default location.
    pub fn load_config(&self) -> anyhow::Result<UserConfig> {
        match &self.config {
            Some(path) => UserConfig::load_explicit(path),
            None => UserConfig::load(),
        }
        .context("Failed to load config")
    }

    /// Repository at `-C`, or the current directory.
    pub fn repository(&self) -> Repository {
        match &self.directory {
            Some(path) => Repository::at(path),
            None => Repository::current(),
        }
    }
}

/// Print the URL and optionally hand it to the default browser.
///
/// The URL always reaches stdout first, so a browser failure still leaves
/// the answer on screen.
pub fn emit_url(url: &str, open: bool) -> anyhow::Result<()> {
    crate::styling::println!("{url}");
    if open {
        open_in_browser(url)?;
    }
    Ok(())
}

fn open_in_browser(url: &str) -> anyhow::Result<()> {
    crate::styling::eprintln!(
        "{}",
        crate::styling::info_message(color_print::cformat!("Opening <bold>{url}</>"))
    );
    open::that(url).map_err(|e| {
        crate::Error::BrowserOpenFailed {
            url: url.to_string(),
            error: e.to_string(),
        }
        .into()
    })
}

/// Report an error on stderr and return the exit code.
pub fn report_error(err: &anyhow::Error) -> i32 {
    use crate::Error;
    use crate::styling::{eprintln, error_message};

    match err.downcast_ref::<Error>() {
        // Styled already
        Some(git_err) if err.chain().count() == 1 => eprintln!("{git_err}"),
        _ => eprintln!("{}", error_message(format!("{err:#}"))),
    }
    crate::exit_code(err)
}
