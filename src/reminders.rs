//! Reminder trigger generation.
//!
//! This module only builds trigger specifications; delivering them (and
//! cancelling pending ones) is the platform notification scheduler's job.

use chrono::Duration;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::config::Config;

pub const HOURLY_REMINDER_TITLE: &str = "How are you feeling?";
pub const CUSTOM_REMINDER_TITLE: &str = "Mood Mosaic+";

/// Prompt pool for the hourly check-in; one is chosen at random per trigger.
pub const MOOD_PROMPTS: [&str; 6] = [
    "Take a moment to check in with yourself.",
    "How has your mood been over the past hour?",
    "What emotions are you experiencing right now?",
    "Quick mood check - how are you doing?",
    "Time for a gentle mood reflection.",
    "What's your current emotional state?",
];

const FALLBACK_PROMPT: &str = "How are you feeling right now?";

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSpec {
    pub id: String,
    pub title: String,
    pub body: String,
    pub trigger: ReminderTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderTrigger {
    /// Repeats every day at the given wall-clock time.
    DailyAt { hour: u32, minute: u32 },
    /// Fires once after the given delay.
    After(Duration),
}

/// One repeating check-in per hour of the configured daytime window.
pub fn hourly_mood_reminders(config: &Config) -> Vec<ReminderSpec> {
    hourly_mood_reminders_with(config, &mut rand::thread_rng())
}

pub fn hourly_mood_reminders_with<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Vec<ReminderSpec> {
    (config.reminder_start_hour..=config.reminder_end_hour)
        .map(|hour| ReminderSpec {
            id: format!("mood-reminder-{hour}"),
            title: HOURLY_REMINDER_TITLE.to_string(),
            body: mood_prompt(rng),
            trigger: ReminderTrigger::DailyAt { hour, minute: 0 },
        })
        .collect()
}

/// A one-off reminder with an arbitrary delay and message.
pub fn custom_reminder(delay: Duration, message: &str) -> ReminderSpec {
    ReminderSpec {
        id: Uuid::new_v4().to_string(),
        title: CUSTOM_REMINDER_TITLE.to_string(),
        body: message.to_string(),
        trigger: ReminderTrigger::After(delay),
    }
}

fn mood_prompt<R: Rng + ?Sized>(rng: &mut R) -> String {
    MOOD_PROMPTS
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_PROMPT)
        .to_string()
}
