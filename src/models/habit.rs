use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined daily habit tracker.
///
/// `color` is stored as a free string so older persisted data never fails to
/// decode; unknown values display as blue via [`HabitColor::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomHabit {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub unit: String,
    pub target_value: f64,
    pub current_value: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CustomHabit {
    /// Completion ratio clamped to [0, 1]. A non-positive target yields 0
    /// rather than a division fault.
    pub fn progress(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.current_value / self.target_value).min(1.0)
    }

    /// Integer-rounded current value, with the unit when one is set.
    pub fn display_value(&self) -> String {
        if self.unit.is_empty() {
            format!("{:.0}", self.current_value)
        } else {
            format!("{:.0} {}", self.current_value, self.unit)
        }
    }

    pub fn color(&self) -> HabitColor {
        HabitColor::parse(&self.color)
    }
}

/// Enumerated color tags available for custom habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitColor {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Pink,
    Yellow,
    Brown,
    Cyan,
    Mint,
    Indigo,
}

impl Default for HabitColor {
    fn default() -> Self {
        Self::Blue
    }
}

impl HabitColor {
    /// Unknown values fall back to blue.
    pub fn parse(value: &str) -> HabitColor {
        match value {
            "red" => HabitColor::Red,
            "blue" => HabitColor::Blue,
            "green" => HabitColor::Green,
            "orange" => HabitColor::Orange,
            "purple" => HabitColor::Purple,
            "pink" => HabitColor::Pink,
            "yellow" => HabitColor::Yellow,
            "brown" => HabitColor::Brown,
            "cyan" => HabitColor::Cyan,
            "mint" => HabitColor::Mint,
            "indigo" => HabitColor::Indigo,
            _ => HabitColor::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitColor::Red => "red",
            HabitColor::Blue => "blue",
            HabitColor::Green => "green",
            HabitColor::Orange => "orange",
            HabitColor::Purple => "purple",
            HabitColor::Pink => "pink",
            HabitColor::Yellow => "yellow",
            HabitColor::Brown => "brown",
            HabitColor::Cyan => "cyan",
            HabitColor::Mint => "mint",
            HabitColor::Indigo => "indigo",
        }
    }
}
