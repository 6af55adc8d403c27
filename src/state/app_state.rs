// Application state management
// Contains the people store and id assignment

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a stored person
pub type PersonId = u64;

/// A person value
/// Immutable once stored; updates replace the whole record rather than
/// patching individual fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

impl Person {
    /// Create a new person value
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Main application state
/// Owns the people store. Shared across request handlers behind
/// `Arc<RwLock<...>>`; id computation and insertion happen under a single
/// write guard so concurrent creates cannot race on the max id.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The people store (id -> Person)
    pub people: HashMap<PersonId, Person>,
}

impl AppState {
    /// Create a new application state with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state pre-populated with the startup seed entries
    pub fn seeded() -> Self {
        let mut state = Self::new();
        state.people.insert(0, Person::new("Anakin", "Skywalker"));
        state.people.insert(1, Person::new("Obi-Wan", "Kenobi"));
        state.people.insert(2, Person::new("Padmé", "Amidala"));
        state
    }

    /// Next id to assign: 0 for an empty store, otherwise max key + 1
    /// Deleting the highest id frees it for reuse by the next insert
    fn next_id(&self) -> PersonId {
        self.people.keys().max().map_or(0, |max| max + 1)
    }

    /// Insert a person under a freshly assigned id
    /// Returns the assigned id
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = self.next_id();
        self.people.insert(id, person);
        id
    }

    /// Get a person by id
    pub fn get_person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Replace the person stored under `id` wholesale
    /// Returns true if the id existed; the store is untouched otherwise
    pub fn replace_person(&mut self, id: PersonId, person: Person) -> bool {
        match self.people.get_mut(&id) {
            Some(slot) => {
                *slot = person;
                true
            }
            None => false,
        }
    }

    /// Remove a person from the store
    /// Returns the removed person if it existed
    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        self.people.remove(&id)
    }

    /// Get all people as (id, person) pairs, ascending by id
    ///
    /// Ascending id order is insertion order: every assigned id exceeds all
    /// ids live at assignment time, and removals do not reorder survivors.
    pub fn people_list(&self) -> Vec<(PersonId, &Person)> {
        let mut people: Vec<(PersonId, &Person)> =
            self.people.iter().map(|(id, person)| (*id, person)).collect();
        people.sort_by_key(|(id, _)| *id);
        people
    }

    /// Get the number of people in the store
    pub fn person_count(&self) -> usize {
        self.people.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert_eq!(state.person_count(), 0);
        assert!(state.people_list().is_empty());
    }

    #[test]
    fn test_seeded_state() {
        let state = AppState::seeded();
        assert_eq!(state.person_count(), 3);
        assert_eq!(state.get_person(0), Some(&Person::new("Anakin", "Skywalker")));
        assert_eq!(state.get_person(1), Some(&Person::new("Obi-Wan", "Kenobi")));
        assert_eq!(state.get_person(2), Some(&Person::new("Padmé", "Amidala")));
    }

    #[test]
    fn test_add_person_assigns_sequential_ids() {
        let mut state = AppState::new();
        assert_eq!(state.add_person(Person::new("Han", "Solo")), 0);
        assert_eq!(state.add_person(Person::new("Leia", "Organa")), 1);
        assert_eq!(state.person_count(), 2);
    }

    #[test]
    fn test_add_person_reuses_freed_max_id() {
        let mut state = AppState::seeded();
        assert!(state.remove_person(2).is_some());

        // max + 1 over the survivors {0, 1} assigns the freed id again
        let id = state.add_person(Person::new("Han", "Solo"));
        assert_eq!(id, 2);
        assert_eq!(state.person_count(), 3);
    }

    #[test]
    fn test_add_person_skips_interior_gap() {
        let mut state = AppState::seeded();
        assert!(state.remove_person(1).is_some());

        // freeing an interior id does not affect assignment
        let id = state.add_person(Person::new("Han", "Solo"));
        assert_eq!(id, 3);
        assert!(state.get_person(1).is_none());
    }

    #[test]
    fn test_get_person_round_trip() {
        let mut state = AppState::new();
        let person = Person::new("Han", "Solo");
        let id = state.add_person(person.clone());
        assert_eq!(state.get_person(id), Some(&person));
    }

    #[test]
    fn test_replace_person() {
        let mut state = AppState::seeded();
        let replacement = Person::new("Darth", "Vader");

        assert!(state.replace_person(0, replacement.clone()));
        assert_eq!(state.get_person(0), Some(&replacement));
        assert_eq!(state.person_count(), 3);

        assert!(!state.replace_person(99, replacement));
        assert_eq!(state.person_count(), 3);
    }

    #[test]
    fn test_remove_person() {
        let mut state = AppState::seeded();
        let removed = state.remove_person(0);
        assert_eq!(removed, Some(Person::new("Anakin", "Skywalker")));
        assert_eq!(state.person_count(), 2);
        assert!(state.get_person(0).is_none());

        assert!(state.remove_person(0).is_none());
        assert_eq!(state.person_count(), 2);
    }

    #[test]
    fn test_people_list_ascending_by_id() {
        let mut state = AppState::seeded();
        state.add_person(Person::new("Han", "Solo"));

        let people = state.people_list();
        assert_eq!(people.len(), 4);
        let ids: Vec<PersonId> = people.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(people[3].1.first_name, "Han");
    }
}
