//! Chained hash table with a fixed bucket count.
//!
//! Variables:
//!   buckets : Vec<Vec<(K,V)>>  — one chain per slot, length B
//!   entries : usize            — number of live key/value pairs
//!
//! Equations:
//!   h(k)         = hash(k) mod B                    (home bucket)
//!   insert(k,v):  scan chain, update on match, else push   O(1 + chain)
//!   get(k):       scan chain                               O(1 + chain)
//!   load factor  = entries / B    (B is fixed; chains absorb collisions)

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct HashTable<K: Hash + Eq, V> {
    buckets: Vec<Vec<(K, V)>>,
    entries: usize,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Seven buckets, like a blackboard example.
    pub fn new() -> Self {
        Self::with_buckets(7)
    }

    pub fn with_buckets(buckets: usize) -> Self {
        assert!(buckets > 0, "hash table needs at least one bucket");
        Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            entries: 0,
        }
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        (h.finish() as usize) % self.buckets.len()
    }

    /// Insert or update; an existing key keeps its chain position.
    pub fn insert(&mut self, key: K, value: V) {
        let i = self.bucket_index(&key);
        for kv in &mut self.buckets[i] {
            if kv.0 == key {
                kv.1 = value;
                return;
            }
        }
        self.buckets[i].push((key, value));
        self.entries += 1;
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let i = self.bucket_index(key);
        self.buckets[i].iter().find(|kv| kv.0 == *key).map(|kv| &kv.1)
    }

    /// Every key, bucket by bucket.
    pub fn keys(&self) -> Vec<&K> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|kv| &kv.0))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
    }
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
