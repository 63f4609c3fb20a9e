//! BucketMap: fixed-bucket, separately-chained hash map over a slot arena.

use crate::key_hash::{KeyHash, RandomKeyHash};
use crate::reentrancy::DebugReentrancy;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    next: Option<DefaultKey>, // next entry in the same bucket's chain
}

/// String-keyed hash map with a bucket count fixed at creation and
/// separate chaining per bucket.
///
/// Entries live in a slot arena; each bucket holds the arena key of its
/// chain head and entries link onward through `next`. The bucket index
/// is `hash_key(key) % bucket_count` with the hashing capability `H`
/// supplied by the caller. There is no resizing and no overwrite:
/// inserting an existing key fails and hands the value back.
pub struct BucketMap<V, H = RandomKeyHash> {
    hasher: H,
    buckets: Vec<Option<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<V>>,
    reentrancy: DebugReentrancy,
}

/// Construction failure.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateError {
    /// The bucket index is taken modulo the bucket count; zero buckets
    /// would make every insert a division by zero.
    ZeroBuckets,
}

/// Insert failure. Both variants return the rejected value so the
/// caller keeps ownership of it.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertError<V> {
    EmptyKey(V),
    DuplicateKey(V),
}

impl<V> InsertError<V> {
    /// Recover the value that was not inserted.
    pub fn into_value(self) -> V {
        match self {
            InsertError::EmptyKey(v) | InsertError::DuplicateKey(v) => v,
        }
    }
}

impl<V> BucketMap<V> {
    /// Map with `buckets` chains and the default randomized hasher.
    pub fn with_buckets(buckets: usize) -> Result<Self, CreateError> {
        Self::with_buckets_and_hasher(buckets, RandomKeyHash::default())
    }
}

impl<V, H> BucketMap<V, H>
where
    H: KeyHash,
{
    pub fn with_buckets_and_hasher(buckets: usize, hasher: H) -> Result<Self, CreateError> {
        if buckets == 0 {
            return Err(CreateError::ZeroBuckets);
        }
        Ok(Self {
            hasher,
            buckets: vec![None; buckets],
            slots: SlotMap::with_key(),
            reentrancy: DebugReentrancy::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bucket count chosen at creation. Never changes.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Walk the chain rooted at `bucket` for an exact key match.
    fn chain_find(&self, bucket: usize, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if e.key == key {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    /// Insert `key → value`. The key is copied into map-owned storage
    /// and the entry is prepended at its bucket's chain head. Fails on
    /// an empty key or a key that is already present; the first writer
    /// wins and the rejected value is returned inside the error.
    pub fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError<V>> {
        let _g = self.reentrancy.enter();
        if key.is_empty() {
            return Err(InsertError::EmptyKey(value));
        }
        let bucket = self.bucket_index(key);
        if self.chain_find(bucket, key).is_some() {
            return Err(InsertError::DuplicateKey(value));
        }

        let entry = Entry {
            key: key.to_owned(),
            value,
            next: self.buckets[bucket],
        };
        let k = self.slots.insert(entry);
        self.buckets[bucket] = Some(k);
        Ok(())
    }

    /// Look up `key` by exact byte-wise equality. O(1 + chain length).
    pub fn get(&self, key: &str) -> Option<&V> {
        let _g = self.reentrancy.enter();
        let bucket = self.bucket_index(key);
        let k = self.chain_find(bucket, key)?;
        Some(&self.slots[k].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let _g = self.reentrancy.enter();
        let bucket = self.bucket_index(key);
        let k = self.chain_find(bucket, key)?;
        Some(&mut self.slots[k].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let _g = self.reentrancy.enter();
        let bucket = self.bucket_index(key);
        self.chain_find(bucket, key).is_some()
    }

    /// Remove `key` and return its value. Unlinks the entry whether it
    /// sits at the chain head or mid-chain; the owned key copy is
    /// released with the slot.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let _g = self.reentrancy.enter();
        let bucket = self.bucket_index(key);

        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            if self.slots[k].key == key {
                let next = self.slots[k].next;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.slots[p].next = next,
                }
                return self.slots.remove(k).map(|e| e.value);
            }
            prev = cur;
            cur = self.slots[k].next;
        }
        None
    }

    /// Visit all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slots.values().map(|e| (e.key.as_str(), &e.value))
    }
}
