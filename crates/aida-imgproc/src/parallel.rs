use rayon::prelude::*;
use thiserror::Error;

use aida_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// Input and output sizes do not match.
    #[error("source and destination must have the same number of pixels")]
    SizeMismatch,
}

/// Controls how per-pixel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process image rows in parallel.
    ParallelRows,

    /// Run on a local thread pool with `n` threads, processing rows in parallel.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to each pixel in the image in parallel, one row per task.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    // zero-width images have no rows to chunk
    if src.cols() == 0 {
        return;
    }

    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel in the image on the current thread.
pub fn iter_pixels<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]),
) {
    src.as_slice()
        .chunks_exact(C1)
        .zip(dst.as_slice_mut().chunks_exact_mut(C2))
        .for_each(|(src_pixel, dst_pixel)| {
            f(src_pixel, dst_pixel);
        });
}

/// Apply a function to each pixel in the image following the given strategy.
///
/// # Arguments
///
/// * `strategy` - How to schedule the work.
/// * `src` - The source image.
/// * `dst` - The destination image, with the same number of pixels as `src`.
/// * `f` - The operation applied to each (source, destination) pixel pair.
///
/// # Errors
///
/// Returns [`ParallelError::SizeMismatch`] when the images differ in size, and
/// [`ParallelError::InvalidThreadCount`] for a zero-thread [`ExecutionStrategy::Fixed`].
pub fn execute_with<T1, const C1: usize, T2, const C2: usize>(
    strategy: ExecutionStrategy,
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T1: Send + Sync,
    T2: Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ParallelError::SizeMismatch);
    }

    match strategy {
        ExecutionStrategy::Serial => iter_pixels(src, dst, f),
        ExecutionStrategy::ParallelRows => par_iter_rows(src, dst, f),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| par_iter_rows(src, dst, f));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aida_image::{ImageError, ImageSize};

    fn doubled(strategy: ExecutionStrategy) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let src = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4, 5, 6, 7, 8],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        execute_with(strategy, &src, &mut dst, |s, d| d[0] = s[0] * 2)?;
        Ok(dst.into_vec())
    }

    #[test]
    fn test_execute_serial() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(doubled(ExecutionStrategy::Serial)?, vec![2, 6, 10, 14]);
        Ok(())
    }

    #[test]
    fn test_execute_parallel_rows() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(doubled(ExecutionStrategy::ParallelRows)?, vec![2, 6, 10, 14]);
        Ok(())
    }

    #[test]
    fn test_execute_fixed() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(doubled(ExecutionStrategy::Fixed(2))?, vec![2, 6, 10, 14]);
        Ok(())
    }

    #[test]
    fn test_execute_fixed_error() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            0,
        )?;
        let mut dst = src.clone();
        let res = execute_with(ExecutionStrategy::Fixed(0), &src, &mut dst, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
        Ok(())
    }

    #[test]
    fn test_execute_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 1,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 1,
                height: 2,
            },
            0,
        )?;
        let res = execute_with(ExecutionStrategy::Serial, &src, &mut dst, |_, _| {});
        assert_eq!(res, Err(ParallelError::SizeMismatch));
        Ok(())
    }

    #[test]
    fn test_empty_image_is_noop() -> Result<(), ImageError> {
        let src = Image::<u8, 4>::new(ImageSize::default(), vec![])?;
        let mut dst = Image::<u8, 3>::new(ImageSize::default(), vec![])?;
        par_iter_rows(&src, &mut dst, |_, d| d[0] = 1);
        assert!(dst.as_slice().is_empty());
        Ok(())
    }
}
