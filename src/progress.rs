// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (multi-page crawls). Frontends implement this to surface status.
pub trait Progress {
    /// Called at the start with the total number of pages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been replayed, with its row count.
    fn page_done(&mut self, _index: usize, _rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
