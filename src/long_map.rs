//! LongMap: separate-chaining table keyed by `i64`.
//!
//! Buckets hold the arena key of their chain head; each entry holds the
//! arena key of its successor. Entries live in a `SlotMap`, so unlinking is
//! a matter of rewriting one link and removing one slot.

use crate::config::{
    LongMapConfig, Settings, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, MAX_BUCKETS,
};
use crate::error::InvalidArgument;
use crate::hash;
use core::fmt;
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug, Clone)]
struct Entry<V> {
    key: i64,
    value: V,
    next: Option<DefaultKey>,
}

/// Hash map from `i64` keys to `V` values.
///
/// The bucket table is allocated on the first `put` and doubles whenever an
/// insertion finds `len() > capacity() * load_factor()`.
#[derive(Clone)]
pub struct LongMap<V> {
    settings: Settings,
    // Empty until the first insertion.
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry<V>>, // chain storage
}

impl<V> LongMap<V> {
    /// Map with initial capacity 16 and load factor 0.75.
    pub fn new() -> Self {
        Self::from_settings(Settings {
            initial_capacity: DEFAULT_INITIAL_CAPACITY as usize,
            load_factor: DEFAULT_LOAD_FACTOR,
        })
    }

    pub fn with_capacity(initial_capacity: i64) -> Result<Self, InvalidArgument> {
        Self::with_config(LongMapConfig::new().with_initial_capacity(initial_capacity))
    }

    pub fn with_capacity_and_load_factor(
        initial_capacity: i64,
        load_factor: f32,
    ) -> Result<Self, InvalidArgument> {
        Self::with_config(LongMapConfig {
            initial_capacity,
            load_factor,
        })
    }

    pub fn with_config(config: LongMapConfig) -> Result<Self, InvalidArgument> {
        let settings = config.settings()?;
        Ok(Self::from_settings(settings))
    }

    fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            buckets: Vec::new(),
            entries: SlotMap::with_key(),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current bucket count; 0 until the first insertion.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn initial_capacity(&self) -> usize {
        self.settings.initial_capacity
    }

    pub fn load_factor(&self) -> f32 {
        self.settings.load_factor
    }

    /// Insert or overwrite. Returns the previous value for `key`, if any.
    pub fn put(&mut self, key: i64, value: V) -> Option<V> {
        self.reserve_one();

        let idx = hash::bucket_index(key, self.buckets.len());
        let mut tail = None;
        let mut cursor = self.buckets[idx];
        while let Some(k) = cursor {
            let entry = &mut self.entries[k];
            if entry.key == key {
                return Some(core::mem::replace(&mut entry.value, value));
            }
            tail = Some(k);
            cursor = entry.next;
        }

        let k = self.entries.insert(Entry {
            key,
            value,
            next: None,
        });
        match tail {
            Some(t) => self.entries[t].next = Some(k),
            None => self.buckets[idx] = Some(k),
        }
        None
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        self.find(key).map(|k| &self.entries[k].value)
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let k = self.find(key)?;
        Some(&mut self.entries[k].value)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Linear scan over every chain.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Unlink and return the value stored for `key`.
    ///
    /// Only the link pointing at the removed entry changes: the bucket slot
    /// when it was the chain head, otherwise its predecessor's `next`.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }
        let idx = hash::bucket_index(key, self.buckets.len());
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.buckets[idx];
        while let Some(k) = cursor {
            let entry = &self.entries[k];
            if entry.key == key {
                let next = entry.next;
                match prev {
                    Some(p) => self.entries[p].next = next,
                    None => self.buckets[idx] = next,
                }
                return self.entries.remove(k).map(|e| e.value);
            }
            prev = Some(k);
            cursor = entry.next;
        }
        None
    }

    /// Keys in bucket order, each chain oldest first.
    pub fn keys(&self) -> Vec<i64> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Values in the same order as `keys()`.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Drop every entry. The bucket table keeps its size.
    pub fn clear(&mut self) {
        if self.buckets.is_empty() {
            return;
        }
        trace!(
            "clearing long map: {} entries, {} buckets kept",
            self.entries.len(),
            self.buckets.len()
        );
        self.buckets.fill(None);
        self.entries.clear();
    }

    /// Entries in the same order as `keys()`.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            entries: &self.entries,
            cursor: None,
            remaining: self.entries.len(),
        }
    }

    /// Mutable access to every value. Visit order is unspecified.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.entries.values_mut(),
        }
    }

    fn find(&self, key: i64) -> Option<DefaultKey> {
        if self.buckets.is_empty() {
            return None;
        }
        let mut cursor = self.buckets[hash::bucket_index(key, self.buckets.len())];
        while let Some(k) = cursor {
            let entry = &self.entries[k];
            if entry.key == key {
                return Some(k);
            }
            cursor = entry.next;
        }
        None
    }

    // Allocate on first use, or grow once the load factor is exceeded.
    fn reserve_one(&mut self) {
        if self.buckets.is_empty() {
            // A zero-sized table could never double its way out.
            let capacity = self.settings.initial_capacity.max(1);
            trace!("allocating long map table with {} buckets", capacity);
            self.buckets = vec![None; capacity];
            return;
        }
        let threshold = self.buckets.len() as f64 * f64::from(self.settings.load_factor);
        if self.entries.len() as f64 > threshold {
            if let Some(doubled) = doubled_capacity(self.buckets.len()) {
                self.resize(doubled);
            }
        }
    }

    // Re-place every entry into a table of `new_capacity` buckets, walking
    // the old table bucket by bucket and each chain head to tail.
    fn resize(&mut self, new_capacity: usize) {
        debug!(
            "resizing long map: {} -> {} buckets ({} entries)",
            self.buckets.len(),
            new_capacity,
            self.entries.len()
        );
        let old = core::mem::replace(&mut self.buckets, vec![None; new_capacity]);
        let mut tails: Vec<Option<DefaultKey>> = vec![None; new_capacity];
        for head in old {
            let mut cursor = head;
            while let Some(k) = cursor {
                let entry = &mut self.entries[k];
                cursor = entry.next.take();
                let idx = hash::bucket_index(entry.key, new_capacity);
                match tails[idx] {
                    Some(t) => self.entries[t].next = Some(k),
                    None => self.buckets[idx] = Some(k),
                }
                tails[idx] = Some(k);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn chain(&self, bucket: usize) -> Vec<i64> {
        let mut out = Vec::new();
        let mut cursor = self.buckets.get(bucket).copied().flatten();
        while let Some(k) = cursor {
            out.push(self.entries[k].key);
            cursor = self.entries[k].next;
        }
        out
    }
}

// Next bucket count, or `None` once doubling would pass MAX_BUCKETS; the
// table then stays put and chains just get longer.
fn doubled_capacity(current: usize) -> Option<usize> {
    current.checked_mul(2).filter(|&d| d <= MAX_BUCKETS)
}

impl<V> Default for LongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for LongMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Extend<(i64, V)> for LongMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut m = LongMap::new();
        m.extend(iter);
        m
    }
}

impl<'a, V> IntoIterator for &'a LongMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut LongMap<V> {
    type Item = (i64, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over `(key, &value)` in bucket order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Option<DefaultKey>>,
    entries: &'a SlotMap<DefaultKey, Entry<V>>,
    cursor: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let entries = self.entries;
                let entry = &entries[k];
                self.cursor = entry.next;
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }
            self.cursor = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

/// Iterator over `(key, &mut value)`.
pub struct IterMut<'a, V> {
    it: slotmap::basic::ValuesMut<'a, DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (i64, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.next()?;
        Some((e.key, &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for IterMut<'a, V> {}
