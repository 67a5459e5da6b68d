//! Synthetic allocations used to occupy memory.

/// A synthetic record. Built in bulk and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: usize,
    /// Decimal rendering of `id * 42`
    pub value: String,
    pub data: Vec<usize>,
}

impl Entry {
    /// Creates the record for `id` with a `0..data_len` data vector.
    pub fn new(id: usize, data_len: usize) -> Self {
        Self {
            id,
            value: (id * 42).to_string(),
            data: (0..data_len).collect(),
        }
    }
}

/// Builds `count` records with ids `0..count`.
pub fn build_entries(count: usize, data_len: usize) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        entries.push(Entry::new(i, data_len));
    }
    entries
}

/// Builds `count` labels of the form `Entry{i}:{i * 42}`.
pub fn build_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Entry{}:{}", i, i * 42)).collect()
}

/// Builds `count` lists of `width` integers where list `i` holds `i * j`.
pub fn build_nested(count: usize, width: usize) -> Vec<Vec<usize>> {
    (0..count)
        .map(|i| (0..width).map(|j| i * j).collect())
        .collect()
}
