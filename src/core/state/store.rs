use std::iter;

use crate::domain::{location::SavedLocation, marker::Marker};

/// In-memory, append-only collection of user-saved locations.
///
/// Insertion order is display order. The sample location is never stored here;
/// it is prepended by [`LocationStore::all_locations`].
#[derive(Debug, Clone, Default)]
pub struct LocationStore {
    locations: Vec<SavedLocation>,
    last_id: u64,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location to the end of the sequence
    pub fn add(&mut self, location: SavedLocation) {
        self.last_id = self.last_id.max(location.id);
        self.locations.push(location);
    }

    /// Id for a location created at `timestamp_ms`.
    /// Strictly greater than every id handed out so far, even if the clock stalls or
    /// goes backwards.
    pub fn next_id(&self, timestamp_ms: u64) -> u64 {
        timestamp_ms.max(self.last_id + 1)
    }

    pub fn locations(&self) -> &[SavedLocation] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Sample location followed by every saved location, rebuilt on each call
    pub fn all_locations(&self) -> Vec<SavedLocation> {
        iter::once(SavedLocation::sample())
            .chain(self.locations.iter().cloned())
            .collect()
    }

    /// Entry `index` of [`LocationStore::all_locations`] without building the whole view
    pub fn location_at(&self, index: usize) -> Option<SavedLocation> {
        match index {
            0 => Some(SavedLocation::sample()),
            i => self.locations.get(i - 1).cloned(),
        }
    }

    /// Number of entries in [`LocationStore::all_locations`]
    pub fn all_len(&self) -> usize {
        self.locations.len() + 1
    }

    /// One marker per entry of [`LocationStore::all_locations`]
    pub fn markers(&self) -> Vec<Marker> {
        self.all_locations().iter().map(Marker::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::location::{Coordinates, Draft, SAMPLE_LOCATION_ID};

    fn location(id: u64, title: &str) -> SavedLocation {
        SavedLocation::from_draft(id, Coordinates::new(1.0, 2.0), &Draft::new(title, ""))
    }

    #[test]
    fn test_empty_store_shows_only_sample() {
        let store = LocationStore::new();
        let all = store.all_locations();

        assert!(store.is_empty());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, SAMPLE_LOCATION_ID);
        assert_eq!(store.all_len(), 1);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = LocationStore::new();
        store.add(location(10, "first"));
        store.add(location(11, "second"));

        let titles: Vec<_> = store.all_locations().into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["Khon Kaen University", "first", "second"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all_len(), 3);
    }

    #[test]
    fn test_next_id_is_monotonic() {
        let mut store = LocationStore::new();
        assert_eq!(store.next_id(0), 1);
        assert_eq!(store.next_id(500), 500);

        store.add(location(500, "a"));
        assert_eq!(store.next_id(500), 501);
        assert_eq!(store.next_id(100), 501);
        assert_eq!(store.next_id(900), 900);
    }

    #[test]
    fn test_location_at() {
        let mut store = LocationStore::new();
        store.add(location(3, "only"));

        assert_eq!(store.location_at(0).map(|l| l.id), Some(SAMPLE_LOCATION_ID));
        assert_eq!(store.location_at(1).map(|l| l.id), Some(3));
        assert_eq!(store.location_at(2), None);
    }

    #[test]
    fn test_markers_follow_all_locations() {
        let mut store = LocationStore::new();
        store.add(location(3, "only"));

        let markers = store.markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].color, "brown");
        assert_eq!(markers[1].color, "green");
    }
}
