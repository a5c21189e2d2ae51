use crate::health::DailyHealthSnapshot;

pub const COFFEE_QUICK_ADD_MG: u32 = 100;
pub const WORKOUT_QUICK_ADD_MINUTES: u32 = 30;
pub const WATER_QUICK_ADD_GLASSES: u32 = 1;
/// The good-sleep quick action sets sleep to this value; it does not add.
pub const IDEAL_SLEEP_HOURS: f64 = 8.0;

pub const DEFAULT_CAFFEINE_LIMIT_MG: u32 = 400;
pub const DEFAULT_ALCOHOL_LIMIT_UNITS: u32 = 2;
pub const DEFAULT_EXERCISE_GOAL_MINUTES: u32 = 30;
pub const DEFAULT_WATER_GOAL_GLASSES: u32 = 8;
pub const DEFAULT_SLEEP_GOAL_HOURS: f64 = 8.0;

/// The day's built-in habit inputs and their goals.
///
/// Transient session state: never persisted, never rolled over by the clock.
/// A new day starts when the caller invokes [`DailyHabits::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct DailyHabits {
    pub caffeine_mg: u32,
    pub alcohol_units: u32,
    pub exercise_type: String,
    pub exercise_minutes: u32,
    pub water_glasses: u32,
    pub sleep_hours: f64,
    pub notes: String,

    pub caffeine_limit_mg: u32,
    pub alcohol_limit_units: u32,
    pub exercise_goal_minutes: u32,
    pub water_goal_glasses: u32,
    pub sleep_goal_hours: f64,
}

impl Default for DailyHabits {
    fn default() -> Self {
        Self {
            caffeine_mg: 0,
            alcohol_units: 0,
            exercise_type: String::new(),
            exercise_minutes: 0,
            water_glasses: 0,
            sleep_hours: 0.0,
            notes: String::new(),

            caffeine_limit_mg: DEFAULT_CAFFEINE_LIMIT_MG,
            alcohol_limit_units: DEFAULT_ALCOHOL_LIMIT_UNITS,
            exercise_goal_minutes: DEFAULT_EXERCISE_GOAL_MINUTES,
            water_goal_glasses: DEFAULT_WATER_GOAL_GLASSES,
            sleep_goal_hours: DEFAULT_SLEEP_GOAL_HOURS,
        }
    }
}

impl DailyHabits {
    pub fn add_coffee(&mut self) {
        self.caffeine_mg += COFFEE_QUICK_ADD_MG;
    }

    pub fn add_workout(&mut self) {
        self.exercise_type = "Workout".to_string();
        self.exercise_minutes += WORKOUT_QUICK_ADD_MINUTES;
    }

    pub fn add_water(&mut self) {
        self.water_glasses += WATER_QUICK_ADD_GLASSES;
    }

    pub fn add_good_sleep(&mut self) {
        self.sleep_hours = IDEAL_SLEEP_HOURS;
    }

    /// Zero the day's inputs, keeping goals and limits.
    pub fn reset(&mut self) {
        self.caffeine_mg = 0;
        self.alcohol_units = 0;
        self.exercise_type.clear();
        self.exercise_minutes = 0;
        self.water_glasses = 0;
        self.sleep_hours = 0.0;
        self.notes.clear();
    }

    /// Copy platform health samples into the session state. Steps have no
    /// built-in habit and are surfaced separately.
    pub fn apply_health(&mut self, snapshot: &DailyHealthSnapshot) {
        self.sleep_hours = snapshot.sleep_hours;
        if snapshot.workout_minutes > 0 {
            self.exercise_type = "Workout".to_string();
            self.exercise_minutes = snapshot.workout_minutes;
        }
    }
}
