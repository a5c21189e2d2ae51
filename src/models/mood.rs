use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most tags a single entry may carry at creation time.
pub const MAX_TAG_SELECTION: usize = 3;

/// Notes longer than this are truncated at write time (characters, not bytes).
pub const MAX_NOTE_LENGTH: usize = 140;

/// A single logged mood: intensity, emotion tags, optional note.
///
/// `id` never changes across edits; `timestamp` and `source` are set when the
/// entry is created and preserved by the edit flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub intensity: f64,
    pub tags: Vec<String>,
    pub note: Option<String>,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Intensity as a whole-percent display string, e.g. `"72%"`.
    pub fn intensity_percentage(&self) -> String {
        format!("{:.0}%", self.intensity)
    }
}

/// Soft-truncate a note to [`MAX_NOTE_LENGTH`] characters; empty notes are
/// stored as `None`.
pub fn soft_truncated_note(note: &str) -> Option<String> {
    if note.is_empty() {
        return None;
    }
    if note.chars().count() > MAX_NOTE_LENGTH {
        Some(note.chars().take(MAX_NOTE_LENGTH).collect())
    } else {
        Some(note.to_string())
    }
}

/// The fixed emotion vocabulary entries draw their tags from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionTag {
    Happy,
    Sad,
    Anxious,
    Calm,
    Excited,
    Tired,
    Focused,
    Stressed,
    Grateful,
}

impl EmotionTag {
    pub const ALL: [EmotionTag; 9] = [
        EmotionTag::Happy,
        EmotionTag::Sad,
        EmotionTag::Anxious,
        EmotionTag::Calm,
        EmotionTag::Excited,
        EmotionTag::Tired,
        EmotionTag::Focused,
        EmotionTag::Stressed,
        EmotionTag::Grateful,
    ];

    /// Display label, also the string stored in `MoodEntry::tags`.
    pub fn label(&self) -> &'static str {
        match self {
            EmotionTag::Happy => "Happy",
            EmotionTag::Sad => "Sad",
            EmotionTag::Anxious => "Anxious",
            EmotionTag::Calm => "Calm",
            EmotionTag::Excited => "Excited",
            EmotionTag::Tired => "Tired",
            EmotionTag::Focused => "Focused",
            EmotionTag::Stressed => "Stressed",
            EmotionTag::Grateful => "Grateful",
        }
    }

    pub fn from_label(label: &str) -> Option<EmotionTag> {
        EmotionTag::ALL.iter().find(|t| t.label() == label).copied()
    }
}

/// One-tap logging presets: a situation maps to a tag set and a note text,
/// leaving intensity untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickSituation {
    WorkStress,
    SocialTime,
    Exercise,
    GoodNews,
    Conflict,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SituationPreset {
    pub tags: &'static [EmotionTag],
    pub note: &'static str,
}

impl QuickSituation {
    pub const ALL: [QuickSituation; 6] = [
        QuickSituation::WorkStress,
        QuickSituation::SocialTime,
        QuickSituation::Exercise,
        QuickSituation::GoodNews,
        QuickSituation::Conflict,
        QuickSituation::Achievement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickSituation::WorkStress => "Work Stress",
            QuickSituation::SocialTime => "Social Time",
            QuickSituation::Exercise => "Exercise",
            QuickSituation::GoodNews => "Good News",
            QuickSituation::Conflict => "Conflict",
            QuickSituation::Achievement => "Achievement",
        }
    }

    pub fn preset(&self) -> SituationPreset {
        match self {
            QuickSituation::WorkStress => SituationPreset {
                tags: &[EmotionTag::Stressed, EmotionTag::Tired],
                note: "Work-related stress",
            },
            QuickSituation::SocialTime => SituationPreset {
                tags: &[EmotionTag::Happy, EmotionTag::Excited],
                note: "Enjoying social time",
            },
            QuickSituation::Exercise => SituationPreset {
                tags: &[EmotionTag::Focused, EmotionTag::Excited],
                note: "Post-workout feeling",
            },
            QuickSituation::GoodNews => SituationPreset {
                tags: &[EmotionTag::Happy, EmotionTag::Grateful],
                note: "Received good news",
            },
            QuickSituation::Conflict => SituationPreset {
                tags: &[EmotionTag::Stressed, EmotionTag::Sad],
                note: "Had a conflict",
            },
            QuickSituation::Achievement => SituationPreset {
                tags: &[EmotionTag::Happy, EmotionTag::Grateful, EmotionTag::Excited],
                note: "Personal achievement",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_truncated_note_short() {
        assert_eq!(soft_truncated_note("fine"), Some("fine".to_string()));
    }

    #[test]
    fn test_soft_truncated_note_empty_is_none() {
        assert_eq!(soft_truncated_note(""), None);
    }

    #[test]
    fn test_soft_truncated_note_long() {
        let long = "x".repeat(200);
        let truncated = soft_truncated_note(&long).unwrap();
        assert_eq!(truncated.chars().count(), MAX_NOTE_LENGTH);
    }

    #[test]
    fn test_soft_truncated_note_counts_chars_not_bytes() {
        let long: String = "é".repeat(150);
        let truncated = soft_truncated_note(&long).unwrap();
        assert_eq!(truncated.chars().count(), MAX_NOTE_LENGTH);
    }

    #[test]
    fn test_emotion_tag_label_round_trip() {
        for tag in EmotionTag::ALL {
            assert_eq!(EmotionTag::from_label(tag.label()), Some(tag));
        }
    }

    #[test]
    fn test_emotion_tag_from_unknown_label() {
        assert_eq!(EmotionTag::from_label("Bored"), None);
        assert_eq!(EmotionTag::from_label("happy"), None); // labels are case-sensitive
    }

    #[test]
    fn test_quick_situation_presets_stay_in_vocabulary() {
        for situation in QuickSituation::ALL {
            let preset = situation.preset();
            assert!(!preset.tags.is_empty());
            assert!(preset.tags.len() <= MAX_TAG_SELECTION);
            for tag in preset.tags {
                assert!(EmotionTag::from_label(tag.label()).is_some());
            }
        }
    }

    #[test]
    fn test_intensity_percentage_rounds() {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            intensity: 72.4,
            tags: vec![],
            note: None,
            source: "manual".into(),
            timestamp: Utc::now(),
        };
        assert_eq!(entry.intensity_percentage(), "72%");
    }
}
