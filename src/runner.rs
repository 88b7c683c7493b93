//! Glue between the session recorder, the watcher and the pipeline.

use crate::config::Config;
use crate::logfile::{allocate_log_file, delete_log_file};
use crate::pipeline::{ErrorPipeline, SessionContext};
use crate::search::search_url;
use crate::watcher::{LineWatcher, WatchEvent};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::{Child, Command};

/// Record a shell session with `script(1)`, watch the transcript for errors
/// and print a Stack Overflow lookup for every match. Returns when the
/// recorded shell exits or the watcher fails.
pub async fn run(config: &Config) -> Result<()> {
    let log_path = allocate_log_file(&config.log_dir())?;

    println!("Starting errwatch. Type 'exit' when you're done.");
    let mut child = spawn_recorder(&log_path)?;

    // script(1) creates the log file, so the watcher starts in
    // wait-for-creation mode
    let mut watcher = LineWatcher::watch(&log_path, false)?;
    let mut pipeline = ErrorPipeline::with_options(
        SessionContext::with_denylist(config.denylist()),
        config.keyphrases(),
    );

    let result = watch_session(&mut watcher, &mut pipeline, &mut child).await;

    watcher.cleanup();
    let _ = child.start_kill();
    delete_log_file(&log_path)?;
    result
}

async fn watch_session(
    watcher: &mut LineWatcher,
    pipeline: &mut ErrorPipeline,
    child: &mut Child,
) -> Result<()> {
    loop {
        tokio::select! {
            event = watcher.rx.recv() => match event {
                Some(WatchEvent::Line(line)) => {
                    if let Some(message) = pipeline.process_line(&line) {
                        println!("\r\nerrwatch: {message}");
                        println!("errwatch: {}\r", search_url(&message));
                    }
                }
                Some(WatchEvent::Error(e)) => {
                    eprintln!("errwatch: watch failed: {e:#}");
                    return Err(e);
                }
                None => return Ok(()),
            },
            status = child.wait() => {
                let status = status.context("waiting for script(1)")?;
                if !status.success() {
                    eprintln!("errwatch: recorder exited with {status}");
                }
                return Ok(());
            }
        }
    }
}

/// Spawn `script(1)` recording into `log_path` with the user's terminal
/// attached. The flush flag differs between util-linux and BSD script.
fn spawn_recorder(log_path: &Path) -> Result<Child> {
    let mut command = Command::new("script");
    command.arg("-q");
    #[cfg(target_os = "macos")]
    command.arg("-F").arg(log_path);
    #[cfg(not(target_os = "macos"))]
    command.arg("-f").arg(log_path);
    command
        .spawn()
        .context("failed to launch script(1); is it installed?")
}
