// src/view_models.rs

use crate::model::{ColorTag, Difficulty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub color: ColorTag,
    pub duration_minutes: u32,
    pub question_count: u32,
}

impl ExamCard {
    pub fn duration_label(&self) -> String {
        format!("🕑 {} mins", self.duration_minutes)
    }

    pub fn questions_label(&self) -> String {
        format!("❓ {} Qs", self.question_count)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionStatus {
    NotVisited,
    Answered,
    Current,
}

/// One square of the player's question grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionCell {
    pub index: usize, // 0-based
    pub status: QuestionStatus,
    pub flagged: bool,
}

impl QuestionCell {
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTile {
    pub caption: &'static str,
    pub value: String,
}

/// "A", "B", ... for option `idx`.
pub fn option_letter(idx: usize) -> char {
    u8::try_from(idx)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map(char::from)
        .unwrap_or('?')
}
