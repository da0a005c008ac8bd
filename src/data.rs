// src/data.rs

use crate::error::DataError;
use crate::model::{Exam, Question};
use std::collections::HashSet;

const EXAMS_YAML: &str = include_str!("data/exams.yaml");
const QUESTIONS_YAML: &str = include_str!("data/questions.yaml");

/// Loads the exam catalog embedded in the binary.
pub fn read_exams_embedded() -> Result<Vec<Exam>, DataError> {
    parse_exams(EXAMS_YAML)
}

/// Loads the question bank embedded in the binary.
pub fn read_questions_embedded() -> Result<Vec<Question>, DataError> {
    parse_questions(QUESTIONS_YAML)
}

pub fn parse_exams(yaml: &str) -> Result<Vec<Exam>, DataError> {
    let exams: Vec<Exam> = serde_yaml::from_str(yaml)?;
    let mut seen = HashSet::new();
    for exam in &exams {
        if !seen.insert(exam.id.as_str()) {
            return Err(DataError::Invalid(format!("duplicate exam id `{}`", exam.id)));
        }
        if exam.duration_minutes == 0 {
            return Err(DataError::Invalid(format!("exam `{}` has zero duration", exam.id)));
        }
        if exam.question_count == 0 {
            return Err(DataError::Invalid(format!("exam `{}` has zero questions", exam.id)));
        }
    }
    Ok(exams)
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, DataError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    let mut seen = HashSet::new();
    for q in &questions {
        if !seen.insert(q.id) {
            return Err(DataError::Invalid(format!("duplicate question id {}", q.id)));
        }
        if q.options.len() < 2 {
            return Err(DataError::Invalid(format!(
                "question {} needs at least two options",
                q.id
            )));
        }
        if q.correct >= q.options.len() {
            return Err(DataError::Invalid(format!(
                "question {} marks option {} correct but has {} options",
                q.id,
                q.correct,
                q.options.len()
            )));
        }
    }
    Ok(questions)
}
