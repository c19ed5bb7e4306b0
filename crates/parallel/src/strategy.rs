//! Parallel processing strategies

use huemap_core::{Error, Result};
use rayon::prelude::*;

/// Processing mode for raster drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingMode {
    /// Single-threaded processing
    Sequential,
    /// Parallel processing using all available cores
    #[default]
    Parallel,
    /// Parallel with specified number of threads
    ParallelWith(usize),
}

impl ProcessingMode {
    /// Mode for an optional thread count: `None` uses every core, `Some(1)`
    /// runs sequentially.
    pub fn from_threads(threads: Option<usize>) -> Self {
        match threads {
            None => ProcessingMode::Parallel,
            Some(1) => ProcessingMode::Sequential,
            Some(n) => ProcessingMode::ParallelWith(n),
        }
    }
}

/// Strategy for parallel execution
pub trait ParallelStrategy {
    /// Map a function over indices and collect results in index order
    fn par_map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send;
}

impl ParallelStrategy for ProcessingMode {
    fn par_map<T, F>(&self, range: std::ops::Range<usize>, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            ProcessingMode::Sequential => Ok(range.map(f).collect()),
            ProcessingMode::Parallel => Ok(range.into_par_iter().map(f).collect()),
            ProcessingMode::ParallelWith(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*threads)
                    .build()
                    .map_err(|e| Error::Algorithm(format!("cannot build thread pool: {e}")))?;
                Ok(pool.install(|| range.into_par_iter().map(f).collect()))
            }
        }
    }
}

/// Get the number of available CPU cores
pub fn num_cpus() -> usize {
    rayon::current_num_threads()
}
