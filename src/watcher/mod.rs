//! Log file watcher using the notify crate.
//!
//! Watching happens in two phases. The log file usually does not exist yet
//! when watching starts, so the containing directory is watched first; as
//! soon as a creation event for the target file arrives the watcher switches
//! to tailing the file itself and emits every appended line, in order,
//! exactly once.

use anyhow::{anyhow, Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Event delivered to the consumer of a [`LineWatcher`].
#[derive(Debug)]
pub enum WatchEvent {
    /// One complete line appended to the watched file.
    Line(String),
    /// A filesystem failure. No further lines follow.
    Error(anyhow::Error),
}

/// Messages into the worker thread: filesystem notifications plus the stop
/// signal from `cleanup`.
enum WorkerMsg {
    Fs(notify::Result<Event>),
    Stop,
}

enum WorkerState {
    /// Directory watch, waiting for the target file to be created.
    Waiting,
    /// File watch, reading appended data on every modification.
    Tailing(TailCursor),
}

/// Read position into the tailed file. Keeps a partial-line buffer so a line
/// split across two writes is still delivered exactly once.
struct TailCursor {
    file: File,
    offset: u64,
    partial: String,
}

impl TailCursor {
    /// Open skipping everything already in the file.
    fn open_at_end(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot open {} for tailing", path.display()))?;
        let offset = file.metadata()?.len();
        Ok(Self {
            file,
            offset,
            partial: String::new(),
        })
    }

    /// Open delivering the whole file. Used when the file was created after
    /// watching began, so all of its content counts as appended.
    fn open_from_start(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot open {} for tailing", path.display()))?;
        Ok(Self {
            file,
            offset: 0,
            partial: String::new(),
        })
    }

    /// Read everything appended since the last call and split it into
    /// complete lines. A trailing fragment without a newline stays buffered.
    fn drain(&mut self) -> std::io::Result<Vec<String>> {
        self.file.seek(SeekFrom::Start(self.offset))?;
        let mut buf = Vec::new();
        let read = self.file.read_to_end(&mut buf)?;
        self.offset += read as u64;
        self.partial.push_str(&String::from_utf8_lossy(&buf));

        let mut lines = Vec::new();
        while let Some(idx) = self.partial.find('\n') {
            let mut line: String = self.partial.drain(..=idx).collect();
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
            lines.push(line);
        }
        Ok(lines)
    }
}

/// Watches a (possibly not yet existing) file and emits appended lines.
///
/// Lines and errors arrive on `rx`. After an error no further lines are
/// emitted. `cleanup` stops all watches and may be called any number of
/// times, including before the file was ever created.
pub struct LineWatcher {
    /// Receiver for lines and errors, in delivery order.
    pub rx: UnboundedReceiver<WatchEvent>,
    control: Sender<WorkerMsg>,
    worker: Option<JoinHandle<()>>,
}

impl LineWatcher {
    /// Start watching `path`. With `already_exists` the file is tailed
    /// immediately (skipping current content); otherwise the containing
    /// directory is watched until the file appears.
    ///
    /// Setup failures (unreadable file, missing directory) are returned
    /// here; failures after setup arrive as [`WatchEvent::Error`].
    pub fn watch(path: impl Into<PathBuf>, already_exists: bool) -> Result<Self> {
        let path = path.into();
        let (worker_tx, worker_rx) = channel::<WorkerMsg>();
        let (event_tx, event_rx) = unbounded_channel::<WatchEvent>();

        let fs_tx = worker_tx.clone();
        let mut fs_watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = fs_tx.send(WorkerMsg::Fs(res));
            },
            notify::Config::default(),
        )?;

        let state = if already_exists {
            fs_watcher
                .watch(&path, RecursiveMode::NonRecursive)
                .with_context(|| format!("cannot watch {}", path.display()))?;
            WorkerState::Tailing(TailCursor::open_at_end(&path)?)
        } else {
            let dir = containing_directory(&path);
            fs_watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .with_context(|| format!("cannot watch directory {}", dir.display()))?;
            WorkerState::Waiting
        };

        let worker = std::thread::spawn(move || {
            run_worker(fs_watcher, state, path, worker_rx, event_tx);
        });

        Ok(Self {
            rx: event_rx,
            control: worker_tx,
            worker: Some(worker),
        })
    }

    /// Stop all underlying watches. Safe to call repeatedly and at any
    /// point of the watcher's life.
    pub fn cleanup(&mut self) {
        let _ = self.control.send(WorkerMsg::Stop);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for LineWatcher {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// The directory whose creation events can announce `path`.
fn containing_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn run_worker(
    mut fs_watcher: RecommendedWatcher,
    mut state: WorkerState,
    path: PathBuf,
    control: Receiver<WorkerMsg>,
    events: UnboundedSender<WatchEvent>,
) {
    // The file may have appeared between the caller's existence check and
    // our directory watch; promote right away instead of waiting for an
    // event that will never come. Content present at this point predates
    // tailing and is skipped.
    if matches!(state, WorkerState::Waiting) && path.exists() {
        match promote(&mut fs_watcher, &path, false) {
            Ok(new_state) => state = new_state,
            Err(e) => {
                let _ = events.send(WatchEvent::Error(e));
                return;
            }
        }
    }

    loop {
        let msg = match control.recv() {
            Ok(msg) => msg,
            Err(_) => break,
        };
        let event = match msg {
            WorkerMsg::Stop => break,
            WorkerMsg::Fs(Err(e)) => {
                let _ = events.send(WatchEvent::Error(e.into()));
                break;
            }
            WorkerMsg::Fs(Ok(event)) => event,
        };

        match &mut state {
            WorkerState::Waiting => {
                if !is_event_for(&event, &path) {
                    continue;
                }
                if event.kind.is_create() || event.kind.is_modify() {
                    match promote(&mut fs_watcher, &path, true) {
                        Ok(new_state) => state = new_state,
                        Err(e) => {
                            let _ = events.send(WatchEvent::Error(e));
                            break;
                        }
                    }
                    // deliver whatever was written before the promotion
                    if let WorkerState::Tailing(cursor) = &mut state {
                        if !drain_into(cursor, &events) {
                            break;
                        }
                    }
                }
            }
            WorkerState::Tailing(cursor) => {
                // An unlinked file only produces a Remove event once the
                // last handle closes, and the tail cursor keeps one open;
                // on Linux all that arrives is a metadata change. Check the
                // path itself instead of trusting the event kind.
                if is_event_for(&event, &path) && (event.kind.is_remove() || !path.exists()) {
                    // the open handle still reads, so deliver what was
                    // appended before the unlink, then report
                    if drain_into(cursor, &events) {
                        let _ = events.send(WatchEvent::Error(anyhow!(
                            "{} was removed while being tailed",
                            path.display()
                        )));
                    }
                    break;
                }
                if event.kind.is_modify() || event.kind.is_create() {
                    if !drain_into(cursor, &events) {
                        break;
                    }
                }
            }
        }
    }
}

/// Switch from directory watching to tailing the created file.
fn promote(
    fs_watcher: &mut RecommendedWatcher,
    path: &Path,
    from_start: bool,
) -> Result<WorkerState> {
    let dir = containing_directory(path);
    let _ = fs_watcher.unwatch(&dir);
    fs_watcher
        .watch(path, RecursiveMode::NonRecursive)
        .with_context(|| format!("cannot watch {}", path.display()))?;
    let cursor = if from_start {
        TailCursor::open_from_start(path)?
    } else {
        TailCursor::open_at_end(path)?
    };
    Ok(WorkerState::Tailing(cursor))
}

/// Emit all newly appended lines; false means the receiver is gone or the
/// read failed (which is reported as an error first).
fn drain_into(cursor: &mut TailCursor, events: &UnboundedSender<WatchEvent>) -> bool {
    match cursor.drain() {
        Ok(lines) => {
            for line in lines {
                if events.send(WatchEvent::Line(line)).is_err() {
                    return false;
                }
            }
            true
        }
        Err(e) => {
            let _ = events.send(WatchEvent::Error(e.into()));
            false
        }
    }
}

/// Whether a notify event refers to the watched file (matched by basename).
fn is_event_for(event: &Event, path: &Path) -> bool {
    let name = path.file_name();
    event.paths.iter().any(|p| p.file_name() == name)
}
