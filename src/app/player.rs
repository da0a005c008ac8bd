use crate::error::PortalError;
use crate::model::{AnswerMap, Question};
use crate::view_models::{QuestionCell, QuestionStatus};
use std::collections::BTreeSet;

/// Answers and position of one assessment attempt.
///
/// Created fresh each time an exam is started.
#[derive(Clone, Debug)]
pub struct PlayerState {
    questions: Vec<Question>,
    current: usize,
    answers: AnswerMap,
    flagged: BTreeSet<usize>, // never toggled, see `toggle_flag`
}

impl PlayerState {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            answers: AnswerMap::new(),
            flagged: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    /// Records `option` for `question`, replacing any earlier choice.
    pub fn select_option(&mut self, question: usize, option: usize) -> Result<(), PortalError> {
        let q = self
            .questions
            .get(question)
            .ok_or(PortalError::QuestionOutOfRange {
                index: question,
                len: self.questions.len(),
            })?;
        if option >= q.options.len() {
            return Err(PortalError::OptionOutOfRange {
                question,
                option,
                len: q.options.len(),
            });
        }
        self.answers.insert(question, option);
        log::debug!("question {question} answered with option {option}");
        Ok(())
    }

    /// Moves the pointer to `index` clamped into the bank and returns the new position.
    pub fn go_to_question(&mut self, index: isize) -> usize {
        let last = self.last_index() as isize;
        self.current = index.clamp(0, last) as usize;
        log::debug!("pointer at {}", self.current);
        self.current
    }

    pub fn next_question(&mut self) -> usize {
        self.go_to_question(self.current as isize + 1)
    }

    pub fn previous_question(&mut self) -> usize {
        self.go_to_question(self.current as isize - 1)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged.contains(&index)
    }

    /// Flagging is not wired in yet: validates `index` and returns its
    /// current flag state without changing it.
    pub fn toggle_flag(&mut self, index: usize) -> Result<bool, PortalError> {
        if index >= self.questions.len() {
            return Err(PortalError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        Ok(self.is_flagged(index))
    }

    pub fn cell(&self, index: usize) -> QuestionCell {
        let status = if index == self.current {
            QuestionStatus::Current
        } else if self.is_answered(index) {
            QuestionStatus::Answered
        } else {
            QuestionStatus::NotVisited
        };
        QuestionCell {
            index,
            status,
            flagged: self.is_flagged(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(n: u32) -> Vec<Question> {
        (1..=n)
            .map(|id| Question {
                id,
                text: format!("Question {id}"),
                options: vec!["a".into(), "b".into(), "c".into()],
                correct: 0,
            })
            .collect()
    }

    #[test]
    fn starts_at_zero_with_nothing_recorded() {
        let p = PlayerState::new(bank(3));
        assert_eq!(p.current(), 0);
        assert!(p.answers().is_empty());
        assert!(!p.is_flagged(0));
    }

    #[test]
    fn go_to_question_clamps_both_ends() {
        for n in 1..=5 {
            let mut p = PlayerState::new(bank(n));
            assert_eq!(p.go_to_question(-1), 0);
            assert_eq!(p.go_to_question(n as isize), n as usize - 1);
            assert_eq!(p.go_to_question(isize::MAX), n as usize - 1);
        }
    }

    #[test]
    fn next_stops_at_last_question() {
        let mut p = PlayerState::new(bank(4));
        for _ in 0..4 {
            p.next_question();
        }
        assert_eq!(p.current(), 3);
        assert!(p.is_last());
        p.next_question();
        assert_eq!(p.current(), 3);
    }

    #[test]
    fn previous_stops_at_first_question() {
        let mut p = PlayerState::new(bank(3));
        assert_eq!(p.previous_question(), 0);
        p.go_to_question(2);
        assert_eq!(p.previous_question(), 1);
    }

    #[test]
    fn select_option_overwrites() {
        let mut p = PlayerState::new(bank(3));
        p.select_option(1, 0).unwrap();
        p.select_option(1, 2).unwrap();
        assert_eq!(p.answers().len(), 1);
        assert_eq!(p.answer_for(1), Some(2));
        assert!(p.is_answered(1));
        assert!(!p.is_answered(0));
    }

    #[test]
    fn select_option_rejects_out_of_range() {
        let mut p = PlayerState::new(bank(3));
        assert_eq!(
            p.select_option(3, 0),
            Err(PortalError::QuestionOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            p.select_option(0, 3),
            Err(PortalError::OptionOutOfRange {
                question: 0,
                option: 3,
                len: 3
            })
        );
        assert!(p.answers().is_empty());
    }

    #[test]
    fn toggle_flag_is_inert() {
        let mut p = PlayerState::new(bank(2));
        assert_eq!(p.toggle_flag(1), Ok(false));
        assert!(!p.is_flagged(1));
        assert!(p.toggle_flag(2).is_err());
    }

    #[test]
    fn cell_prefers_current_over_answered() {
        let mut p = PlayerState::new(bank(3));
        p.select_option(0, 1).unwrap();
        assert_eq!(p.cell(0).status, QuestionStatus::Current);
        p.next_question();
        assert_eq!(p.cell(0).status, QuestionStatus::Answered);
        assert_eq!(p.cell(2).status, QuestionStatus::NotVisited);
    }
}
