//! In-memory note store backing the reference endpoints.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Notes in insertion order.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, title: impl Into<String>, body: impl Into<String>) -> Note {
        let note = Note {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        };
        self.notes.write().push(note.clone());
        note
    }

    pub fn get(&self, id: Uuid) -> Option<Note> {
        self.notes.read().iter().find(|n| n.id == id).cloned()
    }

    /// Up to `limit` notes starting at `offset`, plus the total count.
    pub fn slice(&self, offset: u64, limit: u32) -> (Vec<Note>, u64) {
        let notes = self.notes.read();
        let total = notes.len() as u64;
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        let items = notes
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        (items, total)
    }
}
