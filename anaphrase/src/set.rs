use std::fmt;

const DEFAULT_CAPACITY: usize = 1024;

/// Resize once the table is more than 70% full, ahead of the next insert.
const MAX_LOAD_PERCENT: usize = 70;

/// Open-addressed existence set for strings, with double hashing.
///
/// MurmurHash3 picks the home slot; a small secondary hash over the key's
/// first three characters picks the probe stride. There is no removal, so
/// an empty slot during a probe walk is a definitive miss.
///
/// Capacities double on growth without any primality adjustment, which
/// means a stride can share a factor with the capacity and a probe walk can
/// revisit slots. Correctness doesn't depend on full coverage: a walk that
/// finds no empty slot triggers another doubling and the insert retries.
pub struct StringSet {
    slots: Box<[Option<String>]>,
    used: usize,
}

impl StringSet {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0);
        StringSet {
            slots: vec![None; capacity].into_boxed_slice(),
            used: 0,
        }
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert `key`, returning whether it was newly added. Re-inserting an
    /// existing key is a no-op.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        if self.used * 100 / self.slots.len() > MAX_LOAD_PERCENT {
            self.grow();
        }

        let mut key = key.to_owned();
        loop {
            match place(&mut self.slots, key) {
                Ok(()) => break,
                Err(bounced) => {
                    // Probe walk exhausted without an empty slot; grow and
                    // retry from scratch.
                    key = bounced;
                    self.grow();
                }
            }
        }
        self.used += 1;
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        let capacity = self.slots.len();
        let stride = stride(key);
        let mut index = home_slot(key, capacity);
        let mut probed = 0;
        loop {
            match &self.slots[index] {
                None => return false,
                Some(held) if held == key => return true,
                Some(_) => {}
            }
            probed += 1;
            if probed > capacity {
                return false;
            }
            index = (index + stride) % capacity;
        }
    }

    /// Double the capacity and rehash every held key, doubling again if the
    /// rehash itself runs out of probes.
    fn grow(&mut self) {
        let keys: Vec<String> = self.slots.iter_mut().filter_map(Option::take).collect();
        let mut capacity = self.slots.len() * 2;
        loop {
            match rehash(&keys, capacity) {
                Some(slots) => {
                    self.slots = slots;
                    return;
                }
                None => capacity *= 2,
            }
        }
    }
}

impl Default for StringSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringSet")
            .field("used", &self.used)
            .field("capacity", &self.slots.len())
            .finish()
    }
}

fn home_slot(key: &str, capacity: usize) -> usize {
    let (hash, _) = mur3::murmurhash3_x64_128(key.as_bytes(), 0);
    (hash % capacity as u64) as usize
}

/// Secondary hash: character codes of the first three characters summed,
/// mod 30, plus 1. Never zero, so the probe walk always advances.
fn stride(key: &str) -> usize {
    let sum: u32 = key.chars().take(3).map(|c| c as u32).sum();
    (sum % 30 + 1) as usize
}

/// Walk `key`'s probe sequence and store it in the first empty slot.
/// Hands the key back if the walk finds none.
fn place(slots: &mut [Option<String>], key: String) -> Result<(), String> {
    let capacity = slots.len();
    let stride = stride(&key);
    let mut index = home_slot(&key, capacity);
    for _ in 0..=capacity {
        if slots[index].is_none() {
            slots[index] = Some(key);
            return Ok(());
        }
        index = (index + stride) % capacity;
    }
    Err(key)
}

fn rehash(keys: &[String], capacity: usize) -> Option<Box<[Option<String>]>> {
    let mut slots = vec![None; capacity].into_boxed_slice();
    for key in keys {
        if place(&mut slots, key.clone()).is_err() {
            return None;
        }
    }
    Some(slots)
}
