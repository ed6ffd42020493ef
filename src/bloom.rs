//! Bloom filters: probabilistic set membership without false negatives.
//!
//! Elements are hashed through their [`Display`] form, so `5` and `"5"` are
//! the same element. Each hash function yields a bit index in
//! `0..bits_available`; bits are stored in 32-bit buckets.

mod micro_optimized;

pub use micro_optimized::MicroOptimizedBloomFilter;

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display, Write as _};
use std::hash::Hasher;

use thiserror::Error;

const BUCKET_BITS: usize = 32;

/// A caller supplied hash function over the string form of an element.
pub type HashFn = Box<dyn Fn(&str) -> u64 + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BloomFilterError {
    #[error("a bloom filter needs at least one hash function")]
    NoHashFunctions,
    #[error("a bloom filter needs at least one bit")]
    NoBits,
}

/// Sizing of a Bloom filter.
///
/// The defaults suit a collection of 100,000 elements at a 1% false positive
/// rate (about 120 kilobytes of bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomFilterConfig {
    pub bits_available: usize,
    pub hash_fn_count: usize,
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            bits_available: 958_528,
            hash_fn_count: 7,
        }
    }
}

impl BloomFilterConfig {
    fn validate(&self) -> Result<(), BloomFilterError> {
        if self.hash_fn_count == 0 {
            return Err(BloomFilterError::NoHashFunctions);
        }
        if self.bits_available == 0 {
            return Err(BloomFilterError::NoBits);
        }
        Ok(())
    }
}

/// Operations shared by both filter variants.
pub trait MembershipFilter {
    fn insert<E: Display + ?Sized>(&mut self, element: &E);

    /// Returns false if `element` was never inserted, true if it probably was.
    fn test<E: Display + ?Sized>(&self, element: &E) -> bool;
}

/// A Bloom filter with pluggable hash functions.
///
/// ```
/// use classic_collections::BloomFilter;
///
/// let mut filter = BloomFilter::new();
/// filter.insert(&5);
/// assert!(filter.test("5"));
/// assert!(!filter.test("6"));
/// ```
pub struct BloomFilter {
    bits_available: usize,
    hashers: Hashers,
    buckets: Vec<u32>,
}

enum Hashers {
    Seeded(usize),
    Custom(Vec<HashFn>),
}

impl BloomFilter {
    /// Creates a filter with the default [`BloomFilterConfig`].
    pub fn new() -> Self {
        let config = BloomFilterConfig::default();
        Self {
            bits_available: config.bits_available,
            hashers: Hashers::Seeded(config.hash_fn_count),
            buckets: Vec::new(),
        }
    }

    pub fn with_config(config: BloomFilterConfig) -> Result<Self, BloomFilterError> {
        config.validate()?;
        Ok(Self {
            bits_available: config.bits_available,
            hashers: Hashers::Seeded(config.hash_fn_count),
            buckets: Vec::new(),
        })
    }

    /// Creates a filter using exactly the given hash functions.
    pub fn with_hashers(
        bits_available: usize,
        hashers: Vec<HashFn>,
    ) -> Result<Self, BloomFilterError> {
        BloomFilterConfig {
            bits_available,
            hash_fn_count: hashers.len(),
        }
        .validate()?;
        Ok(Self {
            bits_available,
            hashers: Hashers::Custom(hashers),
            buckets: Vec::new(),
        })
    }

    pub fn bits_available(&self) -> usize {
        self.bits_available
    }

    pub fn hash_fn_count(&self) -> usize {
        match &self.hashers {
            Hashers::Seeded(count) => *count,
            Hashers::Custom(hashers) => hashers.len(),
        }
    }

    pub fn insert<E: Display + ?Sized>(&mut self, element: &E) {
        for position in self.run_hashers(element) {
            let bucket = position / BUCKET_BITS;
            if bucket >= self.buckets.len() {
                self.buckets.resize(bucket + 1, 0);
            }
            self.buckets[bucket] |= 1u32 << (position % BUCKET_BITS);
        }
    }

    pub fn add<E: Display + ?Sized>(&mut self, element: &E) {
        self.insert(element);
    }

    pub fn test<E: Display + ?Sized>(&self, element: &E) -> bool {
        self.run_hashers(element).into_iter().all(|position| {
            let bit = 1u32 << (position % BUCKET_BITS);
            self.buckets
                .get(position / BUCKET_BITS)
                .is_some_and(|&bucket| bucket & bit != 0)
        })
    }

    // Bit positions of `element`, one per hash function.
    fn run_hashers<E: Display + ?Sized>(&self, element: &E) -> Vec<usize> {
        let element = element.to_string();
        let bits = self.bits_available as u64;
        match &self.hashers {
            Hashers::Seeded(count) => (0..*count as u64)
                .map(|seed| (hash_str(seed, &element) % bits) as usize)
                .collect(),
            Hashers::Custom(hashers) => hashers
                .iter()
                .map(|hasher| (hasher(&element) % bits) as usize)
                .collect(),
        }
    }
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bits_available", &self.bits_available)
            .field("hash_fn_count", &self.hash_fn_count())
            .finish_non_exhaustive()
    }
}

impl MembershipFilter for BloomFilter {
    fn insert<E: Display + ?Sized>(&mut self, element: &E) {
        BloomFilter::insert(self, element)
    }

    fn test<E: Display + ?Sized>(&self, element: &E) -> bool {
        BloomFilter::test(self, element)
    }
}

fn seeded_hasher(seed: u64) -> DefaultHasher {
    let mut hasher = DefaultHasher::new();
    hasher.write_u64(seed);
    hasher
}

fn hash_str(seed: u64, s: &str) -> u64 {
    let mut hasher = seeded_hasher(seed);
    hasher.write(s.as_bytes());
    hasher.finish()
}

// Streams the `Display` form of `element` into the hasher without building a
// string. Yields the same hash as `hash_str(seed, &element.to_string())`.
fn hash_display<E: Display + ?Sized>(seed: u64, element: &E) -> u64 {
    struct HashWriter<'a>(&'a mut DefaultHasher);

    impl fmt::Write for HashWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0.write(s.as_bytes());
            Ok(())
        }
    }

    let mut hasher = seeded_hasher(seed);
    write!(HashWriter(&mut hasher), "{element}")
        .expect("a Display implementation returned an error unexpectedly");
    hasher.finish()
}
