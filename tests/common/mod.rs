//! Shared fixtures for integration tests: isolated binary invocations,
//! scratch git repositories, and a local GraphQL endpoint.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::thread;

use tempfile::TempDir;

pub const NULL_DEVICE: &str = "/dev/null";

pub const PR_URL: &str = "https://github.com/skanehira/github-blame/pull/7";

/// A `getpr` invocation with an isolated environment.
///
/// - Host `GIT_*`, `GETPR_*` and `GITHUB_TOKEN` variables are cleared
/// - `HOME` points at `home`, so no real token file is read
/// - Color is disabled, so stderr can be matched as plain text
/// - Terminal width set to 150 columns (`COLUMNS=150`), so help text wraps
///   the same everywhere
#[must_use]
pub fn getpr_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_getpr"));
    configure_cli_command(&mut cmd, home);
    cmd
}

#[must_use]
pub fn blame_pr_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_blame-pr"));
    configure_cli_command(&mut cmd, home);
    cmd
}

pub fn configure_cli_command(cmd: &mut Command, home: &Path) {
    for (key, _) in std::env::vars() {
        if key.starts_with("GIT_") || key.starts_with("GETPR_") || key == "GITHUB_TOKEN" {
            cmd.env_remove(&key);
        }
    }
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd.env("GETPR_CONFIG_PATH", home.join("getpr.toml"));
    for key in ["HTTP_PROXY", "HTTPS_PROXY", "ALL_PROXY", "http_proxy", "https_proxy", "all_proxy"] {
        cmd.env_remove(key);
    }
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.env("NO_COLOR", "1");
    cmd.env("COLUMNS", "150");
    cmd.env("RUST_LOG", "warn");
    configure_git_cmd(cmd);
}

/// Isolated git config and deterministic timestamps.
pub fn configure_git_cmd(cmd: &mut Command) {
    cmd.env("GIT_CONFIG_GLOBAL", NULL_DEVICE);
    cmd.env("GIT_CONFIG_SYSTEM", NULL_DEVICE);
    cmd.env("GIT_AUTHOR_NAME", "Test User");
    cmd.env("GIT_AUTHOR_EMAIL", "test@example.com");
    cmd.env("GIT_COMMITTER_NAME", "Test User");
    cmd.env("GIT_COMMITTER_EMAIL", "test@example.com");
    cmd.env("GIT_AUTHOR_DATE", "2020-11-02T23:28:33+09:00");
    cmd.env("GIT_COMMITTER_DATE", "2020-11-02T23:28:33+09:00");
    cmd.env("LC_ALL", "C");
    cmd.env("GIT_TERMINAL_PROMPT", "0");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A scratch git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().unwrap(),
        };
        repo.git(&["init", "-q", "-b", "main"]);
        repo
    }

    /// A repository whose `origin` pushes to skanehira/github-blame.
    pub fn with_origin() -> Self {
        let repo = Self::new();
        repo.git(&[
            "remote",
            "add",
            "origin",
            "git@github.com:skanehira/github-blame.git",
        ]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(self.path());
        configure_git_cmd(&mut cmd);
        let output = cmd.output().unwrap();
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            stderr(&output)
        );
        stdout(&output)
    }

    /// Write and commit `file`, returning the full commit id.
    pub fn commit_file(&self, file: &str, contents: &str, message: &str) -> String {
        std::fs::write(self.path().join(file), contents).unwrap();
        self.git(&["add", file]);
        self.git(&["commit", "-q", "-m", message]);
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }
}

/// A request received by [`MockGraphql`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    /// Header names lowercased
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A local HTTP endpoint answering every request with the same response.
pub struct MockGraphql {
    url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGraphql {
    pub fn start(status: u16, body: serde_json::Value) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/graphql", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);
        let body = body.to_string();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                if let Some(request) = read_request(&stream) {
                    captured.lock().unwrap().push(request);
                }
                let reason = match status {
                    200 => "OK",
                    401 => "Unauthorized",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { url, requests }
    }

    /// Answers with one associated pull request.
    pub fn with_pull_request(url: &str) -> Self {
        Self::start(
            200,
            serde_json::json!({
                "data": { "repository": { "object": { "associatedPullRequests": {
                    "nodes": [{ "url": url }]
                } } } }
            }),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &TcpStream) -> Option<CapturedRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        let (name, value) = line.split_once(':')?;
        headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
    }

    let header = |name: &str| {
        headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    let body = if let Some(length) = header("content-length") {
        let mut body = vec![0; length.parse().ok()?];
        reader.read_exact(&mut body).ok()?;
        body
    } else if header("transfer-encoding").is_some_and(|v| v.eq_ignore_ascii_case("chunked")) {
        read_chunked(&mut reader)?
    } else {
        Vec::new()
    };

    Some(CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    })
}

fn read_chunked(reader: &mut impl BufRead) -> Option<Vec<u8>> {
    let mut body = Vec::new();
    loop {
        let mut size = String::new();
        reader.read_line(&mut size).ok()?;
        let size = usize::from_str_radix(size.trim().split(';').next()?, 16).ok()?;
        let mut chunk = vec![0; size + 2];
        reader.read_exact(&mut chunk).ok()?;
        if size == 0 {
            return Some(body);
        }
        body.extend_from_slice(&chunk[..size]);
    }
}

/// A home directory holding nothing but what the test writes.
pub fn scratch_home() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_config(home: &Path, contents: &str) -> PathBuf {
    let path = home.join("getpr.toml");
    std::fs::write(&path, contents).unwrap();
    path
}
