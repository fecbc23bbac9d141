// src/runner.rs
use log::{debug, info, warn};
use std::ffi::OsStr;
use std::io;
use std::process::Stdio;
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use uuid::Uuid;

use crate::config::{AppConfig, ToolConfig};
use crate::errors::{AnalysisError, Result};
use crate::workspace::{SOURCE_FILE_NAME, Workspace};

/// Raw result of one external tool invocation that ran to completion.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub duration_ms: u64,
}

/// Decoded output of a Slither run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub output: String,
    pub errors: String,
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
}

/// Spawns `tool` with `extra_args` appended to its configured arguments and
/// waits for it, bounded by the tool's timeout.
///
/// Stdout and stderr are drained while waiting so a tool that writes more
/// than a pipe buffer cannot stall. When `input` is given it is written to
/// the child's stdin, which is then closed. On timeout the child is killed
/// and reaped before `AnalysisError::Timeout` is returned; whatever it had
/// written so far is dropped.
pub async fn run_tool<I, S>(tool: &ToolConfig, extra_args: I, input: Option<&[u8]>) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let start = Instant::now();

    let mut cmd = Command::new(&tool.program);
    cmd.args(&tool.args)
        .args(extra_args)
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    debug!("Spawning {:?}", cmd.as_std());

    let mut child = cmd.spawn().map_err(|source| AnalysisError::Spawn {
        program: tool.program.clone(),
        source,
    })?;

    let stdin = child.stdin.take();
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("child stdout was not captured"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("child stderr was not captured"))?;

    let collect = async {
        let feed = async {
            if let (Some(mut stdin), Some(bytes)) = (stdin, input) {
                match stdin.write_all(bytes).await {
                    // The tool exited without consuming its input; its output still counts.
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                    other => other?,
                }
            }
            Ok::<(), io::Error>(())
        };

        let mut out = Vec::new();
        let mut err = Vec::new();
        let (_, _, _, status) = tokio::try_join!(
            feed,
            stdout.read_to_end(&mut out),
            stderr.read_to_end(&mut err),
            child.wait(),
        )?;
        Ok::<_, io::Error>((status, out, err))
    };

    let outcome = tokio::time::timeout(tool.timeout(), collect).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok((status, stdout, stderr))) => Ok(ToolOutput {
            exit_code: status.code(),
            stdout,
            stderr,
            duration_ms,
        }),
        Ok(Err(e)) => {
            if let Err(kill_err) = child.kill().await {
                debug!("Could not kill {} after I/O error: {}", tool.program, kill_err);
            }
            Err(AnalysisError::Io(e))
        }
        Err(_) => {
            warn!(
                "{} timed out after {}s, killing",
                tool.program, tool.timeout_secs
            );
            if let Err(e) = child.kill().await {
                warn!("Failed to kill timed out {}: {}", tool.program, e);
            }
            Err(AnalysisError::Timeout {
                program: tool.program.clone(),
                secs: tool.timeout_secs,
            })
        }
    }
}

/// Strict UTF-8 decoding of a captured stream.
pub fn decode(stream: &'static str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| AnalysisError::Decode { stream, source })
}

/// Stage `code` in a fresh workspace and run `slither <file> --json -` on it.
///
/// The tool's exit status is reported but never turns the run into an error:
/// Slither exits non-zero whenever it has findings, and compilation failures
/// surface through its stderr.
pub async fn analyze_source(config: &AppConfig, code: &str) -> Result<AnalysisReport> {
    let run_id = Uuid::new_v4();
    let workspace = Workspace::create(SOURCE_FILE_NAME, code).await?;

    info!(
        "🔍 [{}] Running {} on {} bytes of source",
        run_id,
        config.slither.program,
        code.len()
    );

    let result = run_tool(
        &config.slither,
        [
            workspace.source_path().as_os_str(),
            OsStr::new("--json"),
            OsStr::new("-"),
        ],
        None,
    )
    .await;
    workspace.close().await;

    let output = result.inspect_err(|e| log::error!("❌ [{}] Analysis failed: {}", run_id, e))?;

    match output.exit_code {
        Some(0) => info!(
            "✅ [{}] Analysis finished in {}ms (stdout {}B, stderr {}B)",
            run_id,
            output.duration_ms,
            output.stdout.len(),
            output.stderr.len()
        ),
        code => warn!(
            "⚠️  [{}] {} exited with {:?} after {}ms (stdout {}B, stderr {}B)",
            run_id,
            config.slither.program,
            code,
            output.duration_ms,
            output.stdout.len(),
            output.stderr.len()
        ),
    }

    Ok(AnalysisReport {
        output: decode("stdout", output.stdout)?,
        errors: decode("stderr", output.stderr)?,
        exit_code: output.exit_code,
        duration_ms: output.duration_ms,
    })
}
