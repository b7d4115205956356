//! Serialized diagnostic output.
//!
//! File compilations may run on parallel workers; a process-wide lock keeps
//! their failure messages from interleaving on the error stream. The lock
//! guards only the write and is released on every path.

use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

use crate::error::PipelineError;

static DIAGNOSTIC_LOCK: Mutex<()> = Mutex::new(());

/// Report one failed file compilation as `<source-path>: <error>`.
pub fn report(source_path: &Path, error: &PipelineError) {
    let _guard = DIAGNOSTIC_LOCK.lock();
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}: {}", source_path.display(), error);
}
