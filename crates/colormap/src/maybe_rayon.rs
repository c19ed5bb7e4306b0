//! Row-parallel or sequential execution of the colorizers.
//!
//! With the `parallel` feature (the default) this is rayon's prelude. Without
//! it, `into_par_iter()` degrades to `into_iter()` and `par_chunks_mut()` to
//! `chunks_mut()`, so the same iterator chains in `render` compile against
//! `std::iter::Iterator` instead.

#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }

    /// Sequential stand-in for `rayon::prelude::ParallelSliceMut`.
    pub trait ParallelSliceMut<T> {
        fn par_chunks_mut(&mut self, chunk_size: usize) -> std::slice::ChunksMut<'_, T>;
    }

    impl<T> ParallelSliceMut<T> for [T] {
        fn par_chunks_mut(&mut self, chunk_size: usize) -> std::slice::ChunksMut<'_, T> {
            self.chunks_mut(chunk_size)
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
