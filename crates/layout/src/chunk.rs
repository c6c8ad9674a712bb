//! Lazy grouping adapters: runs of equal key and fixed-size batches.

use std::marker::PhantomData;

/// Iterator adapter yielding contiguous runs of items that share a key.
///
/// A new run starts exactly when `key` changes from the previous item.
/// The adapter looks ahead by at most one element, so it is correct over
/// unbounded input: a run is yielded once an item outside it (or the end
/// of input) has been observed, and at most one run is buffered at a time.
pub struct ChunkBy<I: Iterator, K, F> {
    iter: I,
    key: F,
    lookahead: Option<I::Item>,
    _key_type: PhantomData<K>,
}

/// Groups `iter` into runs of consecutive items with equal `key`.
pub fn chunk_by<I, K, F>(iter: I, key: F) -> ChunkBy<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    ChunkBy {
        iter,
        key,
        lookahead: None,
        _key_type: PhantomData,
    }
}

impl<I, K, F> Iterator for ChunkBy<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let first = self.lookahead.take().or_else(|| self.iter.next())?;
        let key = (self.key)(&first);
        let mut run = vec![first];
        for item in self.iter.by_ref() {
            if (self.key)(&item) == key {
                run.push(item);
            } else {
                self.lookahead = Some(item);
                break;
            }
        }
        Some(run)
    }
}

/// Iterator adapter yielding batches of up to `size` consecutive items.
///
/// Every batch is full except possibly the last one of a finite input.
pub struct Batched<I> {
    iter: I,
    size: usize,
}

/// Groups `iter` into consecutive batches of up to `size` items.
///
/// `size` must be at least 1.
pub fn batched<I: Iterator>(iter: I, size: usize) -> Batched<I> {
    assert!(size > 0, "batch size must be at least 1");
    Batched { iter, size }
}

impl<I: Iterator> Iterator for Batched<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut batch = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            match self.iter.next() {
                Some(item) => batch.push(item),
                None => break,
            }
        }
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_by_empty() {
        let mut runs = chunk_by(std::iter::empty::<i32>(), |&x| x);
        assert_eq!(runs.next(), None);
    }

    #[test]
    fn chunk_by_single_run() {
        let runs: Vec<Vec<i32>> = chunk_by([1, 1, 1].into_iter(), |&x| x).collect();
        assert_eq!(runs, vec![vec![1, 1, 1]]);
    }

    #[test]
    fn chunk_by_changing_key() {
        let runs: Vec<Vec<i32>> = chunk_by([1, 1, 2, 3, 3, 3].into_iter(), |&x| x).collect();
        assert_eq!(runs, vec![vec![1, 1], vec![2], vec![3, 3, 3]]);
    }

    #[test]
    fn chunk_by_derived_key() {
        // Key change is what splits runs, not item inequality.
        let runs: Vec<Vec<i32>> = chunk_by([1, 2, 3, 4, 5, 6, 7].into_iter(), |&x| x / 3).collect();
        assert_eq!(runs, vec![vec![1, 2], vec![3, 4, 5], vec![6, 7]]);
    }

    #[test]
    fn chunk_by_non_adjacent_equal_keys_stay_separate() {
        let runs: Vec<Vec<i32>> = chunk_by([1, 2, 1].into_iter(), |&x| x).collect();
        assert_eq!(runs, vec![vec![1], vec![2], vec![1]]);
    }

    #[test]
    fn chunk_by_unbounded_input() {
        // Only two runs are pulled from an infinite source.
        let runs: Vec<Vec<u64>> = chunk_by(0u64.., |&x| x / 4).take(2).collect();
        assert_eq!(runs, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
    }

    #[test]
    fn batched_exact_multiple() {
        let batches: Vec<Vec<i32>> = batched([1, 2, 3, 4, 5, 6].into_iter(), 3).collect();
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn batched_trailing_partial() {
        let batches: Vec<Vec<i32>> = batched([1, 2, 3, 4].into_iter(), 3).collect();
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn batched_empty() {
        let mut batches = batched(std::iter::empty::<i32>(), 3);
        assert_eq!(batches.next(), None);
    }

    #[test]
    #[should_panic(expected = "batch size must be at least 1")]
    fn batched_zero_size_panics() {
        let _ = batched([1].into_iter(), 0);
    }
}
