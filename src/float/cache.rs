// src/float/cache.rs

use super::context::FftContext;
use crate::common::{FftError, FftFloat, Sample};
use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use alloc::vec::Vec;
use num_complex::Complex;

/// Identifies one cached plan.
///
/// Ordering matches the packed integer `2 * len + inverse`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct CacheKey {
    pub len: usize,
    pub inverse: bool,
}

impl CacheKey {
    pub fn new(len: usize, inverse: bool) -> Self {
        Self { len, inverse }
    }

    /// Direction in the low bit, length above it.
    pub fn packed(&self) -> usize {
        self.len * 2 + self.inverse as usize
    }
}

/// Lazily built plans keyed by length and direction.
///
/// Plans are created on first request and kept until removed, cleared or
/// dropped with the cache. The cache also owns the work buffer used by its
/// own [`transform_into`](Self::transform_into), so the usual pattern is one
/// cache per thread.
#[derive(Debug)]
pub struct FftCache<T> {
    contexts: BTreeMap<CacheKey, FftContext<T>>,
    scratch: Vec<Complex<T>>,
    built: usize,
}

impl<T: FftFloat> Default for FftCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FftFloat> FftCache<T> {
    pub fn new() -> Self {
        Self {
            contexts: BTreeMap::new(),
            scratch: Vec::new(),
            built: 0,
        }
    }

    /// Returns the plan for `(len, inverse)`, building it on first use.
    pub fn get_context(&mut self, len: usize, inverse: bool) -> Result<&FftContext<T>, FftError> {
        lookup(&mut self.contexts, &mut self.built, CacheKey::new(len, inverse))
    }

    /// Evicts one plan. Returns `None` if it was never built.
    pub fn remove_context(&mut self, len: usize, inverse: bool) -> Option<FftContext<T>> {
        self.contexts.remove(&CacheKey::new(len, inverse))
    }

    /// Drops every plan and releases the work buffer.
    pub fn clear(&mut self) {
        self.contexts.clear();
        self.scratch = Vec::new();
    }

    pub fn contains(&self, len: usize, inverse: bool) -> bool {
        self.contexts.contains_key(&CacheKey::new(len, inverse))
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Number of plans this cache has constructed over its lifetime.
    pub fn contexts_built(&self) -> usize {
        self.built
    }

    /// Cached keys in ascending packed order.
    pub fn keys(&self) -> impl Iterator<Item = CacheKey> + '_ {
        self.contexts.keys().copied()
    }

    /// Transforms `input` into `output`, resizing `output` to `input.len()`.
    ///
    /// The inverse direction is not normalized; divide by `input.len()` to
    /// undo a forward transform.
    pub fn transform_into<S: Sample<T>>(
        &mut self,
        input: &[S],
        output: &mut Vec<Complex<T>>,
        inverse: bool,
    ) -> Result<(), FftError> {
        let len = input.len();
        let context = lookup(&mut self.contexts, &mut self.built, CacheKey::new(len, inverse))?;
        output.resize(len, Complex::default());

        if self.scratch.len() < context.scratch_len() {
            self.scratch.resize(context.scratch_len(), Complex::default());
        }
        context.transform_with_scratch(input, output, &mut self.scratch)
    }

    pub fn fft<S: Sample<T>>(&mut self, input: &[S]) -> Result<Vec<Complex<T>>, FftError> {
        let mut output = Vec::with_capacity(input.len());
        self.transform_into(input, &mut output, false)?;
        Ok(output)
    }

    pub fn ifft<S: Sample<T>>(&mut self, input: &[S]) -> Result<Vec<Complex<T>>, FftError> {
        let mut output = Vec::with_capacity(input.len());
        self.transform_into(input, &mut output, true)?;
        Ok(output)
    }
}

fn lookup<'a, T: FftFloat>(
    contexts: &'a mut BTreeMap<CacheKey, FftContext<T>>,
    built: &mut usize,
    key: CacheKey,
) -> Result<&'a FftContext<T>, FftError> {
    match contexts.entry(key) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let context = FftContext::new(key.len, key.inverse)?;
            *built += 1;
            Ok(entry.insert(context))
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
