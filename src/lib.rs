//! errwatch - watches a recorded terminal transcript for error output.
//!
//! A session is recorded with `script(1)` into a log file; the watcher tails
//! that file and every appended line runs through a classification pipeline
//! that separates prompt lines from program output, detects error shapes and
//! strips variable/file names so the message is generic enough to search for.

pub mod config;
pub mod logfile;
pub mod pipeline;
pub mod pos;
pub mod runner;
pub mod search;
pub mod watcher;
