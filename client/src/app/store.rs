//! # Entry Store
//!
//! Client-side copy of the signed-in user's journal entries.
//!
//! The store is only ever filled by a full fetch ([`EntryStore::replace_all`])
//! or shrunk by a confirmed delete ([`EntryStore::remove`]). It never merges a
//! server response into a held entry.
//!
//! Every mutation bumps [`EntryStore::revision`] and sends a [`StoreChange`] to
//! each subscriber, so derived views can recompute without polling.

use async_channel::{unbounded, Receiver, Sender};
use shared::JournalEntry;
use std::collections::HashSet;

/// Change notification emitted after every store mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// Whole collection replaced by a fetch
    Replaced { revision: u64, count: usize },
    /// One entry removed locally after a delete
    Removed { revision: u64, id: i64 },
    /// Store emptied (logout)
    Cleared { revision: u64 },
}

impl StoreChange {
    pub fn revision(&self) -> u64 {
        match *self {
            StoreChange::Replaced { revision, .. }
            | StoreChange::Removed { revision, .. }
            | StoreChange::Cleared { revision } => revision,
        }
    }
}

/// Chronologically ordered journal entries for the current session
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    revision: u64,
    subscribers: Vec<Sender<StoreChange>>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries, oldest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter bumped by every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Register for change notifications.
    ///
    /// Dropping the receiver unsubscribes on the next mutation.
    pub fn subscribe(&mut self) -> Receiver<StoreChange> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Replace everything with a fresh fetch.
    ///
    /// Sorted ascending by entry date. The sort is stable, so same-day entries
    /// keep the server's order. A repeated id keeps its first occurrence.
    pub fn replace_all(&mut self, entries: Vec<JournalEntry>) {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut entries: Vec<JournalEntry> = entries
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.id);
                if !fresh {
                    tracing::warn!(id = entry.id, "Dropping duplicate entry id from fetch");
                }
                fresh
            })
            .collect();
        entries.sort_by_key(|entry| entry.entry_date);

        self.entries = entries;
        self.revision += 1;
        let change = StoreChange::Replaced {
            revision: self.revision,
            count: self.entries.len(),
        };
        self.notify(change);
    }

    /// Remove the entry with `id`, leaving every other entry in place.
    ///
    /// Returns the removed entry; an unknown id is a no-op without notification.
    pub fn remove(&mut self, id: i64) -> Option<JournalEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(index);
        self.revision += 1;
        let change = StoreChange::Removed {
            revision: self.revision,
            id,
        };
        self.notify(change);
        Some(removed)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
        let change = StoreChange::Cleared {
            revision: self.revision,
        };
        self.notify(change);
    }

    fn notify(&mut self, change: StoreChange) {
        self.subscribers.retain(|tx| tx.try_send(change).is_ok());
        tracing::trace!(?change, subscribers = self.subscribers.len(), "Entry store changed");
    }
}

/// Orders entry list fetches so an older response never replaces a newer one.
///
/// Every fetch takes a generation from [`FetchTracker::begin`]. A result is
/// applied only if its generation is newer than the last one applied; a
/// confirmed mutation calls [`FetchTracker::invalidate`] so that fetches
/// issued before it can no longer land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchTracker {
    issued: u64,
    applied: u64,
    in_flight: usize,
}

impl FetchTracker {
    /// Register a new fetch and return its generation
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.in_flight += 1;
        self.issued
    }

    /// Record the response for `generation`; true if it should be applied
    pub fn finish(&mut self, generation: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if generation > self.applied {
            self.applied = generation;
            true
        } else {
            false
        }
    }

    /// Mark every fetch issued so far as stale
    pub fn invalidate(&mut self) {
        self.applied = self.issued;
    }

    /// Fetches issued but not yet answered
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_syncing(&self) -> bool {
        self.in_flight > 0
    }
}
