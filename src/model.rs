use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Question index -> chosen option index.
pub type AnswerMap = BTreeMap<usize, usize>;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExamStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExamStatus::NotStarted => "Not Started",
            ExamStatus::InProgress => "In Progress",
            ExamStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// Accent colour of an exam card. The UI maps each tag to a concrete colour.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Emerald,
    Purple,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub category: String,
    pub duration_minutes: u32,
    pub question_count: u32, // advertised on the card, not the served bank size
    pub difficulty: Difficulty,
    pub status: ExamStatus,
    pub color: ColorTag,
}

impl Exam {
    /// Case-insensitive match on title or category. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize, // 0-based into `options`
}

/// The four mutually exclusive screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Intro,
    Exam,
    Result,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            View::Dashboard => "dashboard",
            View::Intro => "intro",
            View::Exam => "exam",
            View::Result => "result",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam(title: &str, category: &str) -> Exam {
        Exam {
            id: "x".into(),
            title: title.into(),
            category: category.into(),
            duration_minutes: 10,
            question_count: 3,
            difficulty: Difficulty::Beginner,
            status: ExamStatus::NotStarted,
            color: ColorTag::Blue,
        }
    }

    #[test]
    fn matches_title_or_category_ignoring_case() {
        let e = exam("PowerBI Fundamentals 101", "Skills");
        assert!(e.matches("powerbi"));
        assert!(e.matches("SKILL"));
        assert!(e.matches("  "));
        assert!(!e.matches("ethics"));
    }

    #[test]
    fn status_uses_display_names_in_yaml() {
        let status: ExamStatus = serde_yaml::from_str("Not Started").unwrap();
        assert_eq!(status, ExamStatus::NotStarted);
        assert_eq!(status.to_string(), "Not Started");
    }
}
