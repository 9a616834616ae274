// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks --+
//!                                +--> one unbounded channel (arrival order)
//!   select! { wait | deadline | cancelled }
//!   --> ProcessOutput { exit_code, lines, timed_out, interrupted }
//!
//! read_stream()
//!   read_until('\n') --> decode_line() (lossy UTF-8, strips CR/LF)
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};

/// Decodes one raw line, dropping the line terminator.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the command.
pub(super) fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Spawns a task that forwards every line of `reader` into `tx`.
fn spawn_reader<R>(
    reader: R,
    process_name: &str,
    stream_name: &'static str,
    forward: bool,
    tx: mpsc::UnboundedSender<String>,
) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let process_name = process_name.to_string();
    tokio::spawn(async move {
        read_stream(reader, &process_name, stream_name, forward, tx).await;
    })
}

/// Sleeps until `at`, or forever when there is no deadline.
async fn deadline(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

/// Waits for every reader to reach EOF.
async fn join_readers(readers: &mut [JoinHandle<()>]) {
    for reader in readers {
        let _ = reader.await;
    }
}

/// Kills a child that outlived its deadline or was cancelled.
async fn terminate_process(child: &mut Child) {
    if let Err(e) = child.kill().await {
        debug!(error = %e, "kill failed, process may have already exited");
    }
}

impl ProcessBuilder {
    /// Runs the child process, capturing output and waiting for completion.
    ///
    /// The deadline and the cancellation token race the child, then race
    /// the readers until EOF. On either, the child is killed and the readers
    /// are aborted, since a surviving grandchild can keep the pipes open.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
        token: &CancellationToken,
    ) -> std::io::Result<ProcessOutput> {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let forward = self.process_flags().contains(ProcessFlags::FORWARD_TO_LOG);

        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(spawn_reader(stdout, name, "stdout", forward, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(spawn_reader(stderr, name, "stderr", forward, tx.clone()));
        }
        drop(tx);

        let timeout = self.timeout_duration();
        let deadline_at = timeout.map(|d| Instant::now() + d);
        let (exit_code, mut timed_out, mut interrupted) = tokio::select! {
            status = child.wait() => (status?.code().unwrap_or(-1), false, false),
            () = deadline(deadline_at) => {
                warn!(process = %name, timeout = ?timeout, "process timed out");
                terminate_process(child).await;
                (-1, true, false)
            }
            () = token.cancelled() => {
                warn!(process = %name, "cancellation requested, terminating process");
                terminate_process(child).await;
                (-1, false, true)
            }
        };

        // A grandchild holding the pipes open must not outlive the deadline
        if !timed_out && !interrupted {
            tokio::select! {
                () = join_readers(&mut readers) => {}
                () = deadline(deadline_at) => {
                    warn!(process = %name, timeout = ?timeout, "output still open at deadline");
                    timed_out = true;
                }
                () = token.cancelled() => {
                    warn!(process = %name, "cancellation requested while draining output");
                    interrupted = true;
                }
            }
        }

        if timed_out || interrupted {
            for reader in &readers {
                reader.abort();
            }
        }

        let mut lines = Vec::new();
        while let Ok(line) = rx.try_recv() {
            lines.push(line);
        }

        Ok(ProcessOutput::new(exit_code, lines, timed_out, interrupted))
    }
}

/// Reads from a stream line by line and forwards each line.
async fn read_stream<R>(
    reader: R,
    process_name: &str,
    stream_name: &str,
    forward: bool,
    tx: mpsc::UnboundedSender<String>,
) where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break, // EOF
            Ok(_) => {
                let line = decode_line(&buf);
                if forward {
                    trace!(process = %process_name, stream = %stream_name, line = %line, "output");
                }
                if tx.send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }
}
