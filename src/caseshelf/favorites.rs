//! # Favorites Store
//!
//! Tracks which catalog cases the user has marked as favorites and keeps
//! that state synchronized with the durable [`KvStore`].
//!
//! Internally this is a single ordered map `CaseId -> Case`. The id set
//! the UI queries and the denormalized payload list the store persists
//! are both derived from that one map at write time, so the two can
//! never drift apart. On disk the layout stays the legacy two-key shape
//! (`favorites` + `favoriteCases`), which older data is read back from.
//!
//! Every mutation goes through `&mut self`, so mutations are serialized
//! by construction: two toggles can never interleave and silently drop
//! one another's write.
//!
//! Storage failures never escape this module. Reads that fail fall back
//! to empty collections, writes that fail leave the optimistic in-memory
//! state in place; both are logged. Favorites are low-stakes preference
//! data and the UI must not surface storage errors for them.

use crate::model::{Case, CaseId};
use crate::store::{KvStore, FAVORITE_CASES_KEY, FAVORITE_IDS_KEY};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{error, warn};

/// Handle returned by [`Favorites::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Observer = Box<dyn Fn(&BTreeSet<CaseId>)>;

#[derive(Default)]
pub struct Favorites {
    cases: BTreeMap<CaseId, Case>,
    loaded: bool,
    next_subscription: SubscriptionId,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`load`](Self::load) has completed at least once.
    /// Consumers can render a loading state until this flips.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Pure membership test against in-memory state. Never touches
    /// storage.
    pub fn is_favorite(&self, id: CaseId) -> bool {
        self.cases.contains_key(&id)
    }

    /// The favorited id set, in ascending order.
    pub fn ids(&self) -> BTreeSet<CaseId> {
        self.cases.keys().copied().collect()
    }

    /// The favorited case payloads, in ascending id order.
    pub fn cases(&self) -> Vec<&Case> {
        self.cases.values().collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Populate in-memory state from the two persisted keys.
    ///
    /// Each key is read and parsed independently; a key that is missing
    /// or fails to parse is treated as empty, and the map is rebuilt
    /// from whichever side survived. The payload list is authoritative
    /// for payloads; an id with no surviving payload is dropped with a
    /// warning rather than resurrected half-empty.
    pub fn load<S: KvStore>(&mut self, store: &S) {
        let ids: Vec<CaseId> = read_json(store, FAVORITE_IDS_KEY).unwrap_or_default();
        let payloads: Vec<Case> = read_json(store, FAVORITE_CASES_KEY).unwrap_or_default();

        self.cases = payloads.into_iter().map(|c| (c.id, c)).collect();

        for id in ids {
            if !self.cases.contains_key(&id) {
                warn!(id, "favorited id has no stored payload, dropping");
            }
        }

        self.loaded = true;
    }

    /// Discard in-memory state and re-read whatever the store holds now.
    /// Used after external data changes.
    pub fn refresh<S: KvStore>(&mut self, store: &S) {
        self.load(store);
    }

    /// Flip the favorite state of `case`, persist both keys, and notify
    /// subscribers. Returns the new state (`true` = now a favorite).
    pub fn toggle<S: KvStore>(&mut self, store: &mut S, case: &Case) -> bool {
        let now_favorite = if self.cases.remove(&case.id).is_some() {
            false
        } else {
            self.cases.insert(case.id, case.clone());
            true
        };

        self.persist(store);
        self.notify();
        now_favorite
    }

    /// Empty the favorites and remove both storage keys. A subsequent
    /// load sees missing keys and yields empty collections, the same as
    /// if empty arrays had been written.
    pub fn clear<S: KvStore>(&mut self, store: &mut S) {
        self.cases.clear();

        if let Err(err) = store.remove(FAVORITE_IDS_KEY) {
            error!(key = FAVORITE_IDS_KEY, %err, "failed to clear favorites key");
        }
        if let Err(err) = store.remove(FAVORITE_CASES_KEY) {
            error!(key = FAVORITE_CASES_KEY, %err, "failed to clear favorites key");
        }

        self.notify();
    }

    /// Register a change observer, invoked with the id set after every
    /// mutation.
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Write both derived views of the map. The two writes are separate
    /// store operations; a failure is logged and the in-memory mutation
    /// stands (optimistic, per the low stakes of the data).
    fn persist<S: KvStore>(&self, store: &mut S) {
        let ids: Vec<CaseId> = self.cases.keys().copied().collect();
        write_json(store, FAVORITE_IDS_KEY, &ids);

        let payloads: Vec<&Case> = self.cases.values().collect();
        write_json(store, FAVORITE_CASES_KEY, &payloads);
    }

    fn notify(&self) {
        let ids = self.ids();
        for (_, observer) in &self.observers {
            observer(&ids);
        }
    }
}

/// Read and parse one key. Missing key, read failure, and parse failure
/// all resolve to `None`; the latter two are logged.
fn read_json<S: KvStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let blob = match store.get(key) {
        Ok(blob) => blob?,
        Err(err) => {
            error!(key, %err, "failed to read from store");
            return None;
        }
    };
    match serde_json::from_str(&blob) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "stored data failed to parse, treating as empty");
            None
        }
    }
}

fn write_json<S: KvStore, T: serde::Serialize>(store: &mut S, key: &str, value: &T) {
    let blob = match serde_json::to_string(value) {
        Ok(blob) => blob,
        Err(err) => {
            error!(key, %err, "failed to encode favorites");
            return;
        }
    };
    if let Err(err) = store.set(key, &blob) {
        error!(key, %err, "failed to write to store");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::{FAVORITE_CASES_KEY, FAVORITE_IDS_KEY};
    use crate::test_fixtures::case;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn persisted_ids(store: &MemoryStore) -> Vec<CaseId> {
        store
            .raw(FAVORITE_IDS_KEY)
            .map(|blob| serde_json::from_str(blob).unwrap())
            .unwrap_or_default()
    }

    fn persisted_cases(store: &MemoryStore) -> Vec<Case> {
        store
            .raw(FAVORITE_CASES_KEY)
            .map(|blob| serde_json::from_str(blob).unwrap())
            .unwrap_or_default()
    }

    /// Both persisted keys must always describe the same id set.
    fn assert_keys_consistent(store: &MemoryStore) {
        let ids: BTreeSet<CaseId> = persisted_ids(store).into_iter().collect();
        let payload_ids: BTreeSet<CaseId> =
            persisted_cases(store).iter().map(|c| c.id).collect();
        assert_eq!(ids, payload_ids);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        let a = case(1, "Figurine");

        assert!(favorites.toggle(&mut store, &a));
        assert!(favorites.is_favorite(1));
        assert_keys_consistent(&store);

        assert!(!favorites.toggle(&mut store, &a));
        assert!(!favorites.is_favorite(1));
        assert_keys_consistent(&store);
    }

    #[test]
    fn double_toggle_restores_memory_and_storage() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        let a = case(1, "Figurine");
        let b = case(2, "Map view");

        favorites.toggle(&mut store, &a);
        let ids_before = persisted_ids(&store);

        favorites.toggle(&mut store, &b);
        favorites.toggle(&mut store, &b);

        assert_eq!(persisted_ids(&store), ids_before);
        assert_eq!(favorites.ids().into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn round_trips_through_a_fresh_load() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        let a = case(7, "AR overlay");

        favorites.toggle(&mut store, &a);

        // Simulated process restart.
        let mut restarted = Favorites::new();
        restarted.load(&store);
        assert!(restarted.loaded());
        assert!(restarted.is_favorite(7));
        assert_eq!(restarted.cases()[0].author, a.author);
    }

    #[test]
    fn clear_empties_memory_and_storage() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(&mut store, &case(1, "A"));
        favorites.toggle(&mut store, &case(2, "B"));

        favorites.clear(&mut store);

        assert!(!favorites.is_favorite(1));
        assert!(!favorites.is_favorite(2));
        assert!(favorites.is_empty());

        let mut reloaded = Favorites::new();
        reloaded.load(&store);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn load_with_no_stored_data_is_empty() {
        let store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.load(&store);
        assert!(favorites.loaded());
        assert!(favorites.is_empty());
    }

    #[test]
    fn corrupt_id_key_recovers_from_payload_list() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(&mut store, &case(3, "Sticker"));

        // Truncated write on the id key only.
        store.set(FAVORITE_IDS_KEY, "[3,").unwrap();

        let mut reloaded = Favorites::new();
        reloaded.load(&store);
        assert!(reloaded.is_favorite(3));
    }

    #[test]
    fn corrupt_payload_key_drops_orphaned_ids() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(&mut store, &case(3, "Sticker"));

        store.set(FAVORITE_CASES_KEY, "{not json").unwrap();

        // No payload survived, so the id cannot be resurrected.
        let mut reloaded = Favorites::new();
        reloaded.load(&store);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn write_failure_keeps_optimistic_memory_state() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        store.fail_writes(true);

        assert!(favorites.toggle(&mut store, &case(1, "A")));

        // Memory reflects the toggle; storage does not.
        assert!(favorites.is_favorite(1));
        assert_eq!(store.raw(FAVORITE_IDS_KEY), None);
    }

    #[test]
    fn read_failure_falls_back_to_empty() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(&mut store, &case(1, "A"));

        store.fail_reads(true);
        let mut reloaded = Favorites::new();
        reloaded.load(&store);
        assert!(reloaded.loaded());
        assert!(reloaded.is_empty());
    }

    #[test]
    fn back_to_back_toggles_on_different_ids_both_persist() {
        // Mutations are serialized through &mut self, so unlike the
        // racy two-collection design this store replaced, neither
        // toggle's write can be silently discarded.
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();

        favorites.toggle(&mut store, &case(1, "A"));
        favorites.toggle(&mut store, &case(2, "B"));

        assert_eq!(persisted_ids(&store), vec![1, 2]);
        assert_keys_consistent(&store);
    }

    #[test]
    fn subscribers_see_every_mutation() {
        let mut store = MemoryStore::new();
        let mut favorites = Favorites::new();
        let seen: Rc<RefCell<Vec<Vec<CaseId>>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let sub = favorites.subscribe(Box::new(move |ids| {
            sink.borrow_mut().push(ids.iter().copied().collect());
        }));

        favorites.toggle(&mut store, &case(1, "A"));
        favorites.toggle(&mut store, &case(2, "B"));
        favorites.clear(&mut store);

        assert_eq!(
            *seen.borrow(),
            vec![vec![1], vec![1, 2], Vec::<CaseId>::new()]
        );

        favorites.unsubscribe(sub);
        favorites.toggle(&mut store, &case(1, "A"));
        assert_eq!(seen.borrow().len(), 3);
    }
}
