//! graphql-js oracle backed by a long-lived `node` process
//!
//! The embedded shim reads one JSON request per line on stdin and writes one
//! JSON reply per line on stdout. Requests are answered strictly in order, and
//! the session mutex keeps at most one request in flight.

use crate::error::{OracleError, OracleResult};
use crate::traits::Oracle;
use async_trait::async_trait;
use nf_core::{OracleConfig, OracleRequest, OracleResponse};
use serde::Deserialize;
use std::ffi::OsString;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;

const SHIM: &str = include_str!("../js/oracle.js");

/// One line written by the shim
#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    response: Option<OracleResponse>,
    #[serde(default)]
    fatal: Option<String>,
}

struct Session {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
}

/// Oracle running the reference graphql-js engine
pub struct GraphqlJsOracle {
    program: String,
    session: Mutex<Session>,
}

impl std::fmt::Debug for GraphqlJsOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlJsOracle")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

/// `NODE_PATH` with `extra` in front of whatever the environment already has
fn node_path_with(extra: &std::path::Path) -> OracleResult<OsString> {
    let mut paths = vec![extra.to_path_buf()];
    if let Some(existing) = std::env::var_os("NODE_PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).map_err(|e| OracleError::Unavailable(e.to_string()))
}

fn base_command(config: &OracleConfig) -> OracleResult<Command> {
    let mut command = Command::new(&config.node);
    if let Some(path) = &config.node_path {
        command.env("NODE_PATH", node_path_with(path)?);
    }
    Ok(command)
}

impl GraphqlJsOracle {
    /// Start the engine process
    pub fn spawn(config: &OracleConfig) -> OracleResult<Self> {
        let mut child = base_command(config)?
            .arg("-e")
            .arg(SHIM)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| OracleError::SpawnFailed {
                program: config.node.clone(),
                source: e,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| OracleError::Unavailable("stdin was not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| OracleError::Unavailable("stdout was not captured".to_string()))?;

        log::debug!("Started graphql-js oracle via '{}'", config.node);

        Ok(Self {
            program: config.node.clone(),
            session: Mutex::new(Session {
                child,
                stdin,
                stdout: BufReader::new(stdout).lines(),
            }),
        })
    }

    /// Check that node runs and can load the `graphql` module
    pub async fn probe(config: &OracleConfig) -> OracleResult<()> {
        let output = base_command(config)?
            .arg("-e")
            .arg("require('graphql')")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| OracleError::SpawnFailed {
                program: config.node.clone(),
                source: e,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(OracleError::Unavailable(format!(
                "'{}' cannot load the graphql module (is it installed? set oracle.node_path):\n{}",
                config.node,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    /// Close the engine's input and wait for it to exit
    pub async fn shutdown(self) -> OracleResult<()> {
        let Session {
            mut child, stdin, ..
        } = self.session.into_inner();
        drop(stdin);
        let status = child.wait().await?;
        log::debug!("graphql-js oracle exited with {status}");
        Ok(())
    }
}

/// Decode one shim reply line
pub(crate) fn parse_reply(line: &str) -> OracleResult<OracleResponse> {
    let reply: Reply = serde_json::from_str(line)?;
    match (reply.response, reply.fatal) {
        (_, Some(message)) => Err(OracleError::Rejected(message)),
        (Some(response), None) => Ok(response),
        (None, None) => Err(OracleError::Protocol(format!(
            "reply has neither a response nor an error: {line}"
        ))),
    }
}

#[async_trait]
impl Oracle for GraphqlJsOracle {
    async fn execute(&self, request: &OracleRequest) -> OracleResult<OracleResponse> {
        let mut line = serde_json::to_string(request)?;
        line.push('\n');

        let mut session = self.session.lock().await;
        session.stdin.write_all(line.as_bytes()).await?;
        session.stdin.flush().await?;

        let reply = session
            .stdout
            .next_line()
            .await?
            .ok_or(OracleError::Terminated)?;
        parse_reply(&reply)
    }

    fn engine_name(&self) -> &'static str {
        "graphql-js"
    }
}

#[cfg(test)]
#[path = "graphql_js_test.rs"]
mod tests;
