//! External command execution
//!
//! Every subprocess getpr spawns (`git blame`, `git log`, `git remote`) goes
//! through [`run`], so that all of them are logged the same way:
//!
//! ```text
//! $ git blame src/lib.rs [/path/to/repo]
//! [getpr-trace] context=/path/to/repo cmd="git blame src/lib.rs" dur=12.3ms ok=true
//! ```

use std::borrow::Cow;
use std::process::Command;
use std::time::Instant;

use shell_escape::escape;

/// Render a command as a copy-pasteable shell string.
///
/// Arguments containing spaces or shell metacharacters are quoted, so the
/// string can be shown in error messages and reproduced by the user.
pub fn display_command(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    std::iter::once(program)
        .chain(cmd.get_args().map(|a| a.to_string_lossy()))
        .map(|part| escape(Cow::Owned(part.into_owned())).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute a command with timing and debug logging.
///
/// The `context` parameter is typically the repository path for git commands.
pub fn run(cmd: &mut Command, context: Option<&str>) -> std::io::Result<std::process::Output> {
    let cmd_str = display_command(cmd);

    match context {
        Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
        None => log::debug!("$ {}", cmd_str),
    }

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let ctx = context.map(|c| format!("context={c} ")).unwrap_or_default();
    match &result {
        Ok(output) => log::debug!(
            "[getpr-trace] {}cmd=\"{}\" dur={:.1}ms ok={}",
            ctx,
            cmd_str,
            duration_ms,
            output.status.success()
        ),
        Err(e) => log::debug!(
            "[getpr-trace] {}cmd=\"{}\" dur={:.1}ms err=\"{}\"",
            ctx,
            cmd_str,
            duration_ms,
            e
        ),
    }

    result
}
