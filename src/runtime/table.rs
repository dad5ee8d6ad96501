//! Open-addressing hash table keyed by wide-character strings.
//!
//! Backs globals/symbol storage. The bucket count is always a power of
//! two, the home slot is `hash64(key) & mask`, and collisions probe
//! linearly. Deleted entries leave tombstones so probe chains stay
//! intact; grow and shrink both rehash, which drops them again.

use crate::hash;
use crate::runtime::value::Value;

const MIN_BUCKETS: usize = 8;
const LOAD_FACTOR_PERMILLE: usize = 750;
const HASH_SEED: u32 = 0;

#[derive(Debug, Clone)]
struct Entry {
    key: Box<[char]>,
    digest: u64,
    value: Value,
}

#[derive(Debug, Clone)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(Entry),
}

/// A map from wide strings to values.
#[derive(Debug, Default)]
pub struct Table {
    slots: Vec<Slot>,
    /// Occupied slots.
    live: usize,
    /// Occupied plus tombstone slots; what the load factor meters.
    used: usize,
}

impl Table {
    /// An empty table. No buckets are allocated until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys.
    pub fn count(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current bucket count (a power of two, or zero before first use).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Look up a key.
    pub fn get(&self, key: &[char]) -> Option<&Value> {
        if self.live == 0 {
            return None;
        }
        let digest = hash::hash64_wide(key, HASH_SEED);
        match &self.slots[self.probe(digest, key)] {
            Slot::Occupied(entry) => Some(&entry.value),
            _ => None,
        }
    }

    /// Insert or overwrite. Returns true when the key was new.
    pub fn set(&mut self, key: &[char], value: Value) -> bool {
        self.reserve_for_insert();
        let digest = hash::hash64_wide(key, HASH_SEED);
        let index = self.probe(digest, key);
        match &mut self.slots[index] {
            Slot::Occupied(entry) => {
                entry.value = value;
                false
            }
            slot => {
                let reused_tombstone = matches!(slot, Slot::Tombstone);
                *slot = Slot::Occupied(Entry {
                    key: key.into(),
                    digest,
                    value,
                });
                self.live += 1;
                if !reused_tombstone {
                    self.used += 1;
                }
                true
            }
        }
    }

    /// Remove a key. Returns true when it was present.
    pub fn delete(&mut self, key: &[char]) -> bool {
        if self.live == 0 {
            return false;
        }
        let digest = hash::hash64_wide(key, HASH_SEED);
        let index = self.probe(digest, key);
        if !matches!(self.slots[index], Slot::Occupied(_)) {
            return false;
        }
        self.slots[index] = Slot::Tombstone;
        self.live -= 1;
        // Opportunistic shrink once occupancy drops to a quarter.
        if self.slots.len() > MIN_BUCKETS && self.live <= self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }
        true
    }

    /// Drop every entry and release the bucket storage.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.live = 0;
        self.used = 0;
    }

    /// Index of the slot holding `key`, or of the slot an insert of `key`
    /// should use. Requires a non-empty bucket array.
    fn probe(&self, digest: u64, key: &[char]) -> usize {
        let mask = self.slots.len() - 1;
        let mut index = (digest as usize) & mask;
        let mut tombstone = None;
        loop {
            match &self.slots[index] {
                Slot::Empty => return tombstone.unwrap_or(index),
                Slot::Tombstone => {
                    if tombstone.is_none() {
                        tombstone = Some(index);
                    }
                }
                Slot::Occupied(entry) => {
                    if entry.digest == digest && entry.key.as_ref() == key {
                        return index;
                    }
                }
            }
            index = (index + 1) & mask;
        }
    }

    fn reserve_for_insert(&mut self) {
        if self.slots.is_empty() {
            self.slots = vec![Slot::Empty; MIN_BUCKETS];
            return;
        }
        if (self.used + 1) * 1000 > self.slots.len() * LOAD_FACTOR_PERMILLE {
            self.resize(self.slots.len() * 2);
        }
    }

    fn resize(&mut self, new_buckets: usize) {
        debug_assert!(new_buckets.is_power_of_two());
        let old = std::mem::replace(&mut self.slots, vec![Slot::Empty; new_buckets]);
        self.used = self.live;
        let mask = new_buckets - 1;
        for slot in old {
            let Slot::Occupied(entry) = slot else {
                continue;
            };
            let mut index = (entry.digest as usize) & mask;
            while matches!(self.slots[index], Slot::Occupied(_)) {
                index = (index + 1) & mask;
            }
            self.slots[index] = Slot::Occupied(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wide(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_set_get_overwrite() {
        let mut table = Table::new();
        assert!(table.set(&wide("x"), Value::number(1.0)));
        assert_eq!(table.get(&wide("x")), Some(&Value::number(1.0)));
        assert!(!table.set(&wide("x"), Value::number(2.0)));
        assert_eq!(table.get(&wide("x")), Some(&Value::number(2.0)));
        assert_eq!(table.count(), 1);
    }

    #[test]
    fn test_missing_key() {
        let mut table = Table::new();
        assert_eq!(table.get(&wide("absent")), None);
        table.set(&wide("a"), Value::nil());
        assert_eq!(table.get(&wide("b")), None);
    }

    #[test]
    fn test_delete() {
        let mut table = Table::new();
        table.set(&wide("a"), Value::number(1.0));
        table.set(&wide("b"), Value::number(2.0));
        assert!(table.delete(&wide("a")));
        assert!(!table.delete(&wide("a")));
        assert_eq!(table.get(&wide("a")), None);
        assert_eq!(table.get(&wide("b")), Some(&Value::number(2.0)));
        assert_eq!(table.count(), 1);
    }

    #[test]
    fn test_growth_preserves_mappings() {
        let mut table = Table::new();
        let names: Vec<String> = (0..200).map(|i| format!("global-{i}")).collect();
        for (i, name) in names.iter().enumerate() {
            table.set(&wide(name), Value::number(i as f64));
        }
        assert_eq!(table.count(), 200);
        assert!(table.capacity() >= 256);
        assert!(table.capacity().is_power_of_two());
        for (i, name) in names.iter().enumerate() {
            assert_eq!(table.get(&wide(name)), Some(&Value::number(i as f64)));
        }
    }

    #[test]
    fn test_shrink_after_deletions() {
        let mut table = Table::new();
        let names: Vec<String> = (0..128).map(|i| format!("k{i}")).collect();
        for name in &names {
            table.set(&wide(name), Value::nil());
        }
        let grown = table.capacity();
        for name in names.iter().skip(4) {
            table.delete(&wide(name));
        }
        assert!(table.capacity() < grown);
        assert_eq!(table.count(), 4);
        for name in names.iter().take(4) {
            assert_eq!(table.get(&wide(name)), Some(&Value::nil()));
        }
    }

    #[test]
    fn test_tombstone_reuse_keeps_chains_intact() {
        let mut table = Table::new();
        // Enough churn on a small table to cycle slots through all three
        // states.
        for round in 0..10 {
            let key = wide(&format!("churn-{}", round % 3));
            table.set(&key, Value::number(round as f64));
            table.delete(&key);
        }
        assert_eq!(table.count(), 0);
        table.set(&wide("final"), Value::boolean(true));
        assert_eq!(table.get(&wide("final")), Some(&Value::boolean(true)));
    }

    #[test]
    fn test_clear_releases_storage() {
        let mut table = Table::new();
        table.set(&wide("a"), Value::nil());
        table.clear();
        assert_eq!(table.count(), 0);
        assert_eq!(table.capacity(), 0);
        assert_eq!(table.get(&wide("a")), None);
        // The table is still usable after a clear.
        table.set(&wide("a"), Value::number(9.0));
        assert_eq!(table.get(&wide("a")), Some(&Value::number(9.0)));
    }

    #[test]
    fn test_wide_keys() {
        let mut table = Table::new();
        table.set(&wide("λx"), Value::number(1.0));
        table.set(&wide("приве́т"), Value::number(2.0));
        assert_eq!(table.get(&wide("λx")), Some(&Value::number(1.0)));
        assert_eq!(table.get(&wide("приве́т")), Some(&Value::number(2.0)));
    }
}
