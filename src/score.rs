//! Habit scoring: per-habit progress ratios and the composite health score.
//!
//! The health score is a fixed rubric, not a tunable model; the threshold
//! bands and magnitudes below are load-bearing and covered by exact-value
//! tests.

use crate::models::daily::DailyHabits;

pub const BASE_HEALTH_SCORE: i32 = 30;

/// Current/goal clamped to [0, 1]; a non-positive goal yields 0.
fn goal_progress(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal).min(1.0)
}

pub fn caffeine_progress(habits: &DailyHabits) -> f64 {
    goal_progress(habits.caffeine_mg as f64, habits.caffeine_limit_mg as f64)
}

pub fn exercise_progress(habits: &DailyHabits) -> f64 {
    goal_progress(
        habits.exercise_minutes as f64,
        habits.exercise_goal_minutes as f64,
    )
}

pub fn water_progress(habits: &DailyHabits) -> f64 {
    goal_progress(
        habits.water_glasses as f64,
        habits.water_goal_glasses as f64,
    )
}

pub fn sleep_progress(habits: &DailyHabits) -> f64 {
    goal_progress(habits.sleep_hours, habits.sleep_goal_hours)
}

/// Inverted: 1.0 at zero consumption, falling linearly to 0 at the limit,
/// and exactly 0 once over it.
pub fn alcohol_progress(habits: &DailyHabits) -> f64 {
    let limit = habits.alcohol_limit_units as f64;
    let current = habits.alcohol_units as f64;
    if limit <= 0.0 || current > limit {
        return 0.0;
    }
    (1.0 - current / limit).max(0.0)
}

pub fn alcohol_status(habits: &DailyHabits) -> &'static str {
    if habits.alcohol_units > habits.alcohol_limit_units {
        "Over limit"
    } else if habits.alcohol_units == 0 {
        "None"
    } else {
        "Within limit"
    }
}

/// Composite 0-100 health score over the day's inputs.
pub fn health_score(habits: &DailyHabits) -> u32 {
    let mut score = BASE_HEALTH_SCORE;

    if habits.exercise_minutes >= 30 {
        score += 25;
    } else if habits.exercise_minutes > 0 {
        score += 15;
    }

    if habits.caffeine_mg > 400 {
        score -= 25;
    } else if habits.caffeine_mg > 300 {
        score -= 15;
    } else if habits.caffeine_mg > 200 {
        score -= 10;
    } else if habits.caffeine_mg > 0 {
        score += 5; // moderate caffeine is fine
    }

    if habits.alcohol_units > 3 {
        score -= 30;
    } else if habits.alcohol_units > 2 {
        score -= 20;
    } else if habits.alcohol_units > 1 {
        score -= 10;
    }

    if habits.water_glasses >= 8 {
        score += 15;
    } else if habits.water_glasses >= 6 {
        score += 10;
    } else if habits.water_glasses >= 4 {
        score += 5;
    }

    if habits.sleep_hours >= 7.5 {
        score += 20;
    } else if habits.sleep_hours >= 6.5 {
        score += 15;
    } else if habits.sleep_hours >= 5.5 {
        score += 10;
    } else if habits.sleep_hours < 5.0 {
        score -= 15;
    }

    score.clamp(0, 100) as u32
}

/// How many of the built-in habits have a nonzero value today. Alcohol counts
/// as tracked even though zero consumption is the desired state.
pub fn tracked_habits_count(habits: &DailyHabits) -> usize {
    [
        habits.caffeine_mg > 0,
        habits.alcohol_units > 0,
        habits.exercise_minutes > 0,
        habits.water_glasses > 0,
        habits.sleep_hours > 0.0,
    ]
    .into_iter()
    .filter(|tracked| *tracked)
    .count()
}
