// src/progress.rs
use std::io::{self, Write};

/// Progress reporting for a build.
/// Frontends implement this to surface status; the runner never requires one.
pub trait Progress {
    /// Called once products are known, with how many will be linked.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after a product's outbound link is built.
    fn item_done(&mut self, _id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints `log` lines only; counts and per-item events go through `logf!`/`logd!`
/// in the runner.
pub struct ConsoleProgress<W: Write = io::Stderr> {
    out: W,
}

impl ConsoleProgress {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }
}
