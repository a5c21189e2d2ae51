use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{LogMoodRequest, UpdateMoodRequest};
use crate::error::{AppError, AppResult};
use crate::insights;
use crate::models::mood::{soft_truncated_note, MoodEntry};
use crate::store::kv::{load_collection, save_collection, KeyValueStore, MOOD_ENTRIES_KEY};

/// Repository owning the mood-entry collection and its persistence boundary.
///
/// Mutation methods rewrite the whole persisted collection and return the
/// updated slice; a freshly added entry is the last element.
pub struct MoodStore {
    entries: Vec<MoodEntry>,
    storage: Box<dyn KeyValueStore>,
}

impl MoodStore {
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let entries = load_collection(storage.as_ref(), MOOD_ENTRIES_KEY).unwrap_or_default();
        Self { entries, storage }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn add(&mut self, req: LogMoodRequest) -> AppResult<&[MoodEntry]> {
        req.validate()?;

        let entry = MoodEntry {
            id: Uuid::new_v4(),
            intensity: req.intensity,
            tags: req.tags,
            note: req.note.as_deref().and_then(soft_truncated_note),
            source: req.source.unwrap_or_else(|| "manual".to_string()),
            timestamp: Utc::now(),
        };
        tracing::info!(id = %entry.id, "logged mood entry");

        self.entries.push(entry);
        self.persist();
        Ok(&self.entries)
    }

    /// Rewrite intensity, tags, and note in place. Identifier, source, and
    /// timestamp are preserved.
    pub fn update(&mut self, id: Uuid, req: UpdateMoodRequest) -> AppResult<&[MoodEntry]> {
        req.validate()?;

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Mood entry not found".into()))?;

        entry.intensity = req.intensity;
        entry.tags = req.tags;
        entry.note = req.note.as_deref().and_then(soft_truncated_note);

        self.persist();
        Ok(&self.entries)
    }

    pub fn delete(&mut self, id: Uuid) -> AppResult<&[MoodEntry]> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(AppError::NotFound("Mood entry not found".into()));
        }

        self.persist();
        Ok(&self.entries)
    }

    /// Entries whose timestamp falls on the given civil day.
    pub fn entries_for_day(&self, day: NaiveDate) -> Vec<MoodEntry> {
        self.entries
            .iter()
            .filter(|e| e.timestamp.date_naive() == day)
            .cloned()
            .collect()
    }

    /// Entries whose timestamp falls within `[start, end]`, both inclusive.
    pub fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<MoodEntry> {
        self.entries
            .iter()
            .filter(|e| {
                let day = e.timestamp.date_naive();
                day >= start && day <= end
            })
            .cloned()
            .collect()
    }

    /// Entries from the trailing window, most recent first.
    pub fn recent_entries(&self, days: i64) -> Vec<MoodEntry> {
        let cutoff = Utc::now() - Duration::days(days);
        insights::recent_entries_since(&self.entries, cutoff)
    }

    fn persist(&self) {
        save_collection(self.storage.as_ref(), MOOD_ENTRIES_KEY, &self.entries);
    }
}
