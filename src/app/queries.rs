use super::*;
use crate::model::{AnswerMap, Question};

impl PortalApp {
    pub fn view(&self) -> View {
        self.state
    }

    pub fn active_exam(&self) -> Option<&Exam> {
        self.selected_exam.as_ref()
    }

    /// The current or just-finished attempt.
    pub fn player(&self) -> Option<&PlayerState> {
        self.player.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.player()?.current_question()
    }

    pub fn pointer(&self) -> Option<usize> {
        self.player().map(PlayerState::current)
    }

    pub fn question_count(&self) -> usize {
        self.player().map_or(0, PlayerState::len)
    }

    pub fn answers(&self) -> Option<&AnswerMap> {
        self.player().map(PlayerState::answers)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.player().is_some_and(|p| p.is_answered(index))
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.player().is_some_and(|p| p.is_flagged(index))
    }

    pub fn on_last_question(&self) -> bool {
        self.player().is_some_and(PlayerState::is_last)
    }

    pub fn last_report(&self) -> Option<&ScoreReport> {
        self.last_report.as_ref()
    }

    /// Catalog entries matching the dashboard search box.
    pub fn visible_exams(&self) -> Vec<&Exam> {
        self.catalog
            .exams()
            .iter()
            .filter(|e| e.matches(&self.search))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_are_empty_before_an_attempt() {
        let app = PortalApp::embedded().unwrap();
        assert_eq!(app.view(), View::Dashboard);
        assert!(app.current_question().is_none());
        assert_eq!(app.pointer(), None);
        assert_eq!(app.question_count(), 0);
        assert!(!app.is_answered(0));
        assert!(!app.on_last_question());
    }

    #[test]
    fn search_filters_catalog() {
        let mut app = PortalApp::embedded().unwrap();
        assert_eq!(app.visible_exams().len(), 3);
        app.search = "skills".into();
        let ids: Vec<&str> = app.visible_exams().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        app.search = "ethics".into();
        assert_eq!(app.visible_exams().len(), 1);
        app.search = "zzz".into();
        assert!(app.visible_exams().is_empty());
    }

    #[test]
    fn current_question_tracks_pointer() {
        let mut app = PortalApp::embedded().unwrap();
        app.select_exam("1").unwrap();
        app.proceed().unwrap();
        assert_eq!(app.current_question().map(|q| q.id), Some(1));
        app.next_question().unwrap();
        assert_eq!(app.current_question().map(|q| q.id), Some(2));
        assert_eq!(app.question_count(), 3);
    }
}
