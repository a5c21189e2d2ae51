use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreateHabitRequest, UpdateHabitRequest};
use crate::error::{AppError, AppResult};
use crate::models::habit::CustomHabit;
use crate::store::kv::{load_collection, save_collection, KeyValueStore, CUSTOM_HABITS_KEY};

/// Repository owning the custom-habit collection and its persistence
/// boundary. Mutation methods return the updated slice.
pub struct CustomHabitStore {
    habits: Vec<CustomHabit>,
    storage: Box<dyn KeyValueStore>,
}

impl CustomHabitStore {
    /// Loads persisted habits; a first run (or discarded corrupt data) seeds
    /// the starter set.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        match load_collection(storage.as_ref(), CUSTOM_HABITS_KEY) {
            Some(habits) => Self { habits, storage },
            None => {
                let store = Self {
                    habits: seed_habits(),
                    storage,
                };
                store.persist();
                store
            }
        }
    }

    pub fn habits(&self) -> &[CustomHabit] {
        &self.habits
    }

    pub fn add(&mut self, req: CreateHabitRequest) -> AppResult<&[CustomHabit]> {
        req.validate()?;

        let habit = CustomHabit {
            id: Uuid::new_v4(),
            name: req.name,
            icon: req.icon.unwrap_or_else(|| "target".to_string()),
            color: req.color.unwrap_or_else(|| "blue".to_string()),
            unit: req.unit.unwrap_or_default(),
            target_value: req.target_value.unwrap_or(1.0),
            current_value: 0.0,
            is_active: true,
            created_at: Utc::now(),
        };
        tracing::info!(id = %habit.id, name = %habit.name, "created custom habit");

        self.habits.push(habit);
        self.persist();
        Ok(&self.habits)
    }

    /// Field-wise update; `None` keeps the existing value.
    pub fn update(&mut self, id: Uuid, req: UpdateHabitRequest) -> AppResult<&[CustomHabit]> {
        req.validate()?;

        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| AppError::NotFound("Habit not found".into()))?;

        if let Some(name) = req.name {
            habit.name = name;
        }
        if let Some(icon) = req.icon {
            habit.icon = icon;
        }
        if let Some(color) = req.color {
            habit.color = color;
        }
        if let Some(unit) = req.unit {
            habit.unit = unit;
        }
        if let Some(target_value) = req.target_value {
            habit.target_value = target_value;
        }
        if let Some(is_active) = req.is_active {
            habit.is_active = is_active;
        }

        self.persist();
        Ok(&self.habits)
    }

    pub fn delete(&mut self, id: Uuid) -> AppResult<&[CustomHabit]> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() == before {
            return Err(AppError::NotFound("Habit not found".into()));
        }

        self.persist();
        Ok(&self.habits)
    }

    /// Add to a habit's current value; callers pass 1.0 for a single step.
    pub fn increment(&mut self, id: Uuid, amount: f64) -> AppResult<&[CustomHabit]> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| AppError::NotFound("Habit not found".into()))?;

        habit.current_value += amount;

        self.persist();
        Ok(&self.habits)
    }

    /// Batch daily reset: every habit's current value back to 0. Triggered
    /// explicitly by the caller, not by the wall clock.
    pub fn reset_daily_values(&mut self) -> &[CustomHabit] {
        for habit in &mut self.habits {
            habit.current_value = 0.0;
        }

        self.persist();
        &self.habits
    }

    fn persist(&self) {
        save_collection(self.storage.as_ref(), CUSTOM_HABITS_KEY, &self.habits);
    }
}

fn seed_habits() -> Vec<CustomHabit> {
    let starter = |name: &str, icon: &str, color: &str, unit: &str, target: f64| CustomHabit {
        id: Uuid::new_v4(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        unit: unit.to_string(),
        target_value: target,
        current_value: 0.0,
        is_active: true,
        created_at: Utc::now(),
    };

    vec![
        starter("Meditation", "brain.head.profile", "purple", "min", 10.0),
        starter("Reading", "book.fill", "brown", "pages", 20.0),
        starter("Steps", "figure.walk", "green", "steps", 10000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    fn create_request(name: &str) -> CreateHabitRequest {
        CreateHabitRequest {
            name: name.to_string(),
            icon: None,
            color: None,
            unit: None,
            target_value: None,
        }
    }

    fn empty_update() -> UpdateHabitRequest {
        UpdateHabitRequest {
            name: None,
            icon: None,
            color: None,
            unit: None,
            target_value: None,
            is_active: None,
        }
    }

    // ── seeding ──────────────────────────────────────────────────────────

    #[test]
    fn test_first_load_seeds_starter_habits() {
        let store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        let names: Vec<&str> = store.habits().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Meditation", "Reading", "Steps"]);
    }

    #[test]
    fn test_seed_persists_for_next_load() {
        let dir = tempfile::tempdir().unwrap();
        let first = {
            let store =
                CustomHabitStore::load(Box::new(crate::store::kv::FileStore::new(dir.path())));
            store.habits().to_vec()
        };
        let second = CustomHabitStore::load(Box::new(crate::store::kv::FileStore::new(dir.path())));
        // Same ids on reload proves the seed was written, not regenerated.
        assert_eq!(second.habits(), first.as_slice());
    }

    // ── crud ─────────────────────────────────────────────────────────────

    #[test]
    fn test_add_applies_defaults() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        let habits = store.add(create_request("Journaling")).unwrap();

        let added = habits.last().unwrap();
        assert_eq!(added.name, "Journaling");
        assert_eq!(added.icon, "target");
        assert_eq!(added.color, "blue");
        assert_eq!(added.unit, "");
        assert_eq!(added.target_value, 1.0);
        assert_eq!(added.current_value, 0.0);
        assert!(added.is_active);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        assert!(matches!(
            store.add(create_request("")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_update_replaces_only_given_fields() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        let id = store.habits()[0].id;
        let original = store.habits()[0].clone();

        let habits = store
            .update(
                id,
                UpdateHabitRequest {
                    name: Some("Morning meditation".into()),
                    target_value: Some(15.0),
                    ..empty_update()
                },
            )
            .unwrap();

        assert_eq!(habits[0].name, "Morning meditation");
        assert_eq!(habits[0].target_value, 15.0);
        assert_eq!(habits[0].icon, original.icon);
        assert_eq!(habits[0].color, original.color);
        assert_eq!(habits[0].created_at, original.created_at);
    }

    #[test]
    fn test_update_missing_habit() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        assert!(matches!(
            store.update(Uuid::new_v4(), empty_update()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_habit() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        let id = store.habits()[0].id;
        let remaining = store.delete(id).unwrap().len();
        assert_eq!(remaining, 2);
    }

    // ── increment & reset ────────────────────────────────────────────────

    #[test]
    fn test_increment_accumulates() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        let id = store.habits()[0].id;
        store.increment(id, 1.0).unwrap();
        let habits = store.increment(id, 2.5).unwrap();
        assert_eq!(habits[0].current_value, 3.5);
    }

    #[test]
    fn test_increment_missing_habit() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        assert!(matches!(
            store.increment(Uuid::new_v4(), 1.0),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_reset_daily_values_zeroes_every_habit() {
        let mut store = CustomHabitStore::load(Box::new(MemoryStore::new()));
        let ids: Vec<Uuid> = store.habits().iter().map(|h| h.id).collect();
        for id in &ids {
            store.increment(*id, 4.0).unwrap();
        }

        let habits = store.reset_daily_values();
        assert!(habits.iter().all(|h| h.current_value == 0.0));
    }
}
