//! `ParcelTable` — fixed-bucket chaining hash table keyed by parcel id.
//!
//! # Why not `HashMap`?
//!
//! The table is the system of record for parcels and its behavior is part of
//! the planner's contract: a fixed bucket count chosen at construction, no
//! growth policy, upsert on insert, and `Option`-returning lookups that never
//! fault on absent keys.  Average O(1), worst case O(bucket length) under
//! heavy collision — acceptable for the bounded nightly manifest this system
//! targets.

use courier_core::ParcelId;

use crate::parcel::Parcel;

/// Bucket count used by [`ParcelTable::new`]; sized for a typical nightly
/// manifest.  Loaders size the table to the dataset instead.
pub const DEFAULT_BUCKET_COUNT: usize = 39;

/// Chaining hash table mapping `ParcelId` → [`Parcel`].
#[derive(Debug)]
pub struct ParcelTable {
    buckets: Vec<Vec<(ParcelId, Parcel)>>,
    /// Cached entry count for O(1) `len()`.
    count: usize,
}

impl ParcelTable {
    /// Table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Table with a caller-chosen bucket count (fixed for the table's
    /// lifetime — there is no growth policy).
    pub fn with_buckets(bucket_count: usize) -> Self {
        debug_assert!(bucket_count > 0, "bucket_count must be > 0");
        Self {
            buckets: (0..bucket_count.max(1)).map(|_| Vec::new()).collect(),
            count:   0,
        }
    }

    #[inline]
    fn bucket_of(&self, id: ParcelId) -> usize {
        id.index() % self.buckets.len()
    }

    /// Insert `parcel` under its id.  Upsert: an existing entry with the same
    /// id is replaced, otherwise the parcel is appended to its bucket's chain.
    pub fn insert(&mut self, parcel: Parcel) {
        let bucket = self.bucket_of(parcel.id);
        let chain = &mut self.buckets[bucket];

        for entry in chain.iter_mut() {
            if entry.0 == parcel.id {
                entry.1 = parcel;
                return;
            }
        }
        chain.push((parcel.id, parcel));
        self.count += 1;
    }

    /// Look up a parcel by id.  Absent keys return `None`, never fault.
    pub fn search(&self, id: ParcelId) -> Option<&Parcel> {
        self.buckets[self.bucket_of(id)]
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, parcel)| parcel)
    }

    /// Mutable lookup, used by the route commit step.
    pub fn search_mut(&mut self, id: ParcelId) -> Option<&mut Parcel> {
        let bucket = self.bucket_of(id);
        self.buckets[bucket]
            .iter_mut()
            .find(|(key, _)| *key == id)
            .map(|(_, parcel)| parcel)
    }

    /// Remove the entry with `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: ParcelId) {
        let bucket = self.bucket_of(id);
        let chain = &mut self.buckets[bucket];
        if let Some(pos) = chain.iter().position(|(key, _)| *key == id) {
            chain.remove(pos);
            self.count -= 1;
        }
    }

    /// Number of stored parcels.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets (fixed at construction).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// All parcel ids in ascending order.  Reports iterate in id order
    /// regardless of bucket placement.
    pub fn ids_sorted(&self) -> Vec<ParcelId> {
        let mut ids: Vec<ParcelId> = self
            .buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(id, _)| *id))
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for ParcelTable {
    fn default() -> Self {
        Self::new()
    }
}
