pub mod error;
pub mod loader;

pub use error::DeckError;
pub use loader::DeckLoader;

use std::collections::HashMap;

use crate::model::WordEntry;

/// Owning collection of entries for one game. Ids are unique within a deck.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    entries: Vec<WordEntry>,
    by_id: HashMap<u32, usize>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: WordEntry) -> Result<(), DeckError> {
        if self.by_id.contains_key(&entry.id()) {
            return Err(DeckError::DuplicateId(entry.id()));
        }
        self.by_id.insert(entry.id(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&WordEntry> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    fn entry_mut(&mut self, id: u32) -> Result<&mut WordEntry, DeckError> {
        let idx = *self.by_id.get(&id).ok_or(DeckError::UnknownId(id))?;
        Ok(&mut self.entries[idx])
    }

    pub fn set_english_local(&mut self, id: u32, english_local: bool) -> Result<(), DeckError> {
        self.entry_mut(id)?.set_english_local(english_local);
        Ok(())
    }

    pub fn toggle_locality(&mut self, id: u32) -> Result<(), DeckError> {
        self.entry_mut(id)?.toggle_locality();
        Ok(())
    }

    /// Renumbers one entry. `new` must not already be taken by another entry.
    pub fn set_id(&mut self, old: u32, new: u32) -> Result<(), DeckError> {
        if old == new {
            return self.entry_mut(old).map(|_| ());
        }
        if self.by_id.contains_key(&new) {
            return Err(DeckError::DuplicateId(new));
        }
        let idx = self.by_id.remove(&old).ok_or(DeckError::UnknownId(old))?;
        self.entries[idx].set_id(new);
        self.by_id.insert(new, idx);
        Ok(())
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flip_all(&mut self) {
        for entry in &mut self.entries {
            entry.toggle_locality();
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, english: &str, spanish: &str) -> WordEntry {
        let mut entry = WordEntry::new(english.to_string(), spanish.to_string(), None);
        entry.set_id(id);
        entry
    }

    #[test]
    fn test_push_and_get() {
        let mut deck = Deck::new();
        deck.push(entry(1, "dog", "perro")).unwrap();
        deck.push(entry(2, "cat", "gato")).unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(2).unwrap().english(), "cat");
        assert!(deck.get(3).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut deck = Deck::new();
        deck.push(entry(1, "dog", "perro")).unwrap();
        let err = deck.push(entry(1, "cat", "gato")).unwrap_err();
        assert!(matches!(err, DeckError::DuplicateId(1)));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.get(1).unwrap().english(), "dog");
    }

    #[test]
    fn test_set_locality_of_one_entry() {
        let mut deck = Deck::new();
        deck.push(entry(1, "dog", "perro")).unwrap();
        deck.push(entry(2, "cat", "gato")).unwrap();

        deck.set_english_local(2, false).unwrap();
        assert_eq!(deck.get(1).unwrap().local(), "dog");
        assert_eq!(deck.get(2).unwrap().local(), "gato");

        deck.toggle_locality(1).unwrap();
        assert_eq!(deck.get(1).unwrap().local(), "perro");

        let err = deck.toggle_locality(9).unwrap_err();
        assert!(matches!(err, DeckError::UnknownId(9)));
    }

    #[test]
    fn test_set_id_rejects_taken_id() {
        let mut deck = Deck::new();
        deck.push(entry(1, "dog", "perro")).unwrap();
        deck.push(entry(2, "cat", "gato")).unwrap();

        let err = deck.set_id(2, 1).unwrap_err();
        assert!(matches!(err, DeckError::DuplicateId(1)));
        let ids: Vec<u32> = deck.iter().map(WordEntry::id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(deck.get(2).unwrap().english(), "cat");
    }

    #[test]
    fn test_set_id_updates_lookup() {
        let mut deck = Deck::new();
        deck.push(entry(1, "dog", "perro")).unwrap();
        deck.push(entry(2, "cat", "gato")).unwrap();

        deck.set_id(2, 5).unwrap();
        assert!(deck.get(2).is_none());
        assert_eq!(deck.get(5).unwrap().english(), "cat");
        assert_eq!(deck.get(5).unwrap().id(), 5);

        deck.push(entry(2, "house", "casa")).unwrap();
        assert_eq!(deck.len(), 3);

        let err = deck.set_id(7, 8).unwrap_err();
        assert!(matches!(err, DeckError::UnknownId(7)));
    }

    #[test]
    fn test_flip_all() {
        let mut deck = Deck::new();
        deck.push(entry(1, "dog", "perro")).unwrap();
        deck.push(entry(2, "cat", "gato")).unwrap();

        deck.flip_all();
        let locals: Vec<&str> = deck.iter().map(WordEntry::local).collect();
        assert_eq!(locals, ["perro", "gato"]);

        deck.flip_all();
        let locals: Vec<&str> = (&deck).into_iter().map(WordEntry::local).collect();
        assert_eq!(locals, ["dog", "cat"]);
    }
}
