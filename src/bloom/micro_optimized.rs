use std::fmt::{self, Display};

use super::{hash_display, BloomFilterConfig, BloomFilterError, MembershipFilter, BUCKET_BITS};

/// A [`BloomFilter`](super::BloomFilter) variant tuned for throughput.
///
/// The bucket table is allocated up front and nothing is allocated per call:
/// elements are streamed into the hasher instead of being turned into a
/// string, and bit positions are used as they are computed. Hashing is the
/// same as the default hashing of [`BloomFilter`](super::BloomFilter), so
/// both variants set the same bits for the same elements.
#[derive(Clone)]
pub struct MicroOptimizedBloomFilter {
    bits_available: u64,
    hash_fn_count: u64,
    buckets: Box<[u32]>,
}

impl MicroOptimizedBloomFilter {
    pub fn new() -> Self {
        Self::from_valid_config(BloomFilterConfig::default())
    }

    pub fn with_config(config: BloomFilterConfig) -> Result<Self, BloomFilterError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BloomFilterConfig) -> Self {
        Self {
            bits_available: config.bits_available as u64,
            hash_fn_count: config.hash_fn_count as u64,
            buckets: vec![0; config.bits_available.div_ceil(BUCKET_BITS)].into_boxed_slice(),
        }
    }

    pub fn bits_available(&self) -> usize {
        self.bits_available as usize
    }

    pub fn hash_fn_count(&self) -> usize {
        self.hash_fn_count as usize
    }

    #[inline]
    pub fn insert<E: Display + ?Sized>(&mut self, element: &E) {
        for seed in 0..self.hash_fn_count {
            let position = (hash_display(seed, element) % self.bits_available) as usize;
            self.buckets[position >> 5] |= 1u32 << (position & 31);
        }
    }

    pub fn add<E: Display + ?Sized>(&mut self, element: &E) {
        self.insert(element);
    }

    #[inline]
    pub fn test<E: Display + ?Sized>(&self, element: &E) -> bool {
        for seed in 0..self.hash_fn_count {
            let position = (hash_display(seed, element) % self.bits_available) as usize;
            if self.buckets[position >> 5] & (1u32 << (position & 31)) == 0 {
                return false;
            }
        }
        true
    }
}

impl Default for MicroOptimizedBloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MicroOptimizedBloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MicroOptimizedBloomFilter")
            .field("bits_available", &self.bits_available)
            .field("hash_fn_count", &self.hash_fn_count)
            .finish_non_exhaustive()
    }
}

impl MembershipFilter for MicroOptimizedBloomFilter {
    fn insert<E: Display + ?Sized>(&mut self, element: &E) {
        MicroOptimizedBloomFilter::insert(self, element)
    }

    fn test<E: Display + ?Sized>(&self, element: &E) -> bool {
        MicroOptimizedBloomFilter::test(self, element)
    }
}
