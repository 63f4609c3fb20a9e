//! Caller-pluggable key hashing for `BucketMap`.

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

/// Hashing capability supplied at map creation.
///
/// The map places no constraints on distribution quality; a constant
/// hash only degrades performance, never correctness. The result must be
/// deterministic for identical keys within a single map's lifetime;
/// nothing is required across instances.
pub trait KeyHash {
    fn hash_key(&self, key: &str) -> u64;
}

/// Adapter turning a plain function or closure into a hashing
/// capability: `FnKeyHash(|key: &str| ...)`.
#[derive(Clone, Debug)]
pub struct FnKeyHash<F>(pub F);

impl<F> KeyHash for FnKeyHash<F>
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        (self.0)(key)
    }
}

/// Default hashing capability backed by `RandomState` (SipHash),
/// randomized per instance.
#[derive(Clone, Debug, Default)]
pub struct RandomKeyHash(RandomState);

impl KeyHash for RandomKeyHash {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        self.0.hash_one(key)
    }
}
