//! # Batch Options

/// Options for indexing a batch of [`ReadingRecord`](super::ReadingRecord)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchOptions {
    /// Run the per-record local phase in parallel.
    pub parallel: bool,
}

impl BatchOptions {
    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request the ``rayon`` implementation of the
    /// per-record local phase. Global resolution always runs sequentially,
    /// in record order; so the output does not depend on this value.
    ///
    /// Without the "rayon" feature, this is a no-op.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// See: [`parallel`](Self::parallel)
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// See: [`parallel`](Self::parallel)
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }
}
