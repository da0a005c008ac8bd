use assessment_portal::PortalApp;
use assessment_portal::PortalError;
use assessment_portal::config::PortalConfig;
use assessment_portal::model::{AnswerMap, ColorTag, Difficulty, Exam, ExamStatus, Question, View};
use assessment_portal::sources::{CatalogSource, EmbeddedData, Grader, QuestionSource, ScoreReport};

/// Counts answers that match the key, unlike the shipped stub.
struct KeyGrader;

impl Grader for KeyGrader {
    fn grade(&self, answers: &AnswerMap, questions: &[Question]) -> ScoreReport {
        let correct = questions
            .iter()
            .enumerate()
            .filter(|(i, q)| answers.get(i) == Some(&q.correct))
            .count() as u32;
        let total = questions.len() as u32;
        ScoreReport {
            score_percent: (correct * 100 / total.max(1)) as u8,
            correct,
            total,
            minutes_taken: 0,
        }
    }
}

/// Catalog with one exam and no questions for it.
struct EmptyBank {
    exams: Vec<Exam>,
}

impl CatalogSource for EmptyBank {
    fn exams(&self) -> &[Exam] {
        &self.exams
    }
}

impl QuestionSource for EmptyBank {
    fn questions_for(&self, _exam_id: &str) -> Vec<Question> {
        Vec::new()
    }
}

fn sample_exam() -> Exam {
    Exam {
        id: "x".into(),
        title: "Empty".into(),
        category: "Test".into(),
        duration_minutes: 5,
        question_count: 1,
        difficulty: Difficulty::Beginner,
        status: ExamStatus::InProgress,
        color: ColorTag::Blue,
    }
}

#[test]
fn full_attempt_records_every_answer() {
    let mut app = PortalApp::embedded().unwrap();

    app.select_exam("1").unwrap();
    assert_eq!(app.view(), View::Intro);

    app.proceed().unwrap();
    assert_eq!(app.view(), View::Exam);
    assert_eq!(app.pointer(), Some(0));
    assert!(app.answers().unwrap().is_empty());

    app.select_option(0, 2).unwrap();
    assert_eq!(app.next_question(), Ok(1));
    app.select_option(1, 1).unwrap();
    assert_eq!(app.next_question(), Ok(2));
    app.select_option(2, 1).unwrap();
    app.finish().unwrap();
    assert_eq!(app.view(), View::Result);

    let answers: Vec<(usize, usize)> = app.answers().unwrap().iter().map(|(q, o)| (*q, *o)).collect();
    assert_eq!(answers, [(0, 2), (1, 1), (2, 1)]);
}

#[test]
fn next_never_passes_the_last_question() {
    let mut app = PortalApp::embedded().unwrap();
    app.select_exam("2").unwrap();
    app.proceed().unwrap();
    let n = app.question_count();
    for _ in 0..n + 2 {
        app.next_question().unwrap();
    }
    assert_eq!(app.pointer(), Some(n - 1));
    assert!(app.on_last_question());
}

#[test]
fn injected_grader_scores_the_attempt() {
    let data = EmbeddedData::load().unwrap();
    let mut app = PortalApp::new(
        PortalConfig::default(),
        Box::new(data.clone()),
        Box::new(data),
        Box::new(KeyGrader),
    );
    app.select_exam("1").unwrap();
    app.proceed().unwrap();
    app.select_option(0, 2).unwrap();
    app.select_option(1, 0).unwrap();
    app.finish().unwrap();

    let report = app.last_report().unwrap();
    assert_eq!((report.correct, report.total), (1, 3));
    assert_eq!(report.score_percent, 33);
}

#[test]
fn exam_without_questions_cannot_start() {
    let mut app = PortalApp::new(
        PortalConfig::default(),
        Box::new(EmptyBank { exams: vec![sample_exam()] }),
        Box::new(EmptyBank { exams: Vec::new() }),
        Box::new(KeyGrader),
    );
    app.select_exam("x").unwrap();
    assert_eq!(app.proceed(), Err(PortalError::EmptyQuestionBank("x".into())));
    assert_eq!(app.view(), View::Intro);
    assert!(app.player().is_none());
}

#[test]
fn independent_sessions_do_not_share_state() {
    let mut a = PortalApp::embedded().unwrap();
    let b = PortalApp::embedded().unwrap();
    a.select_exam("3").unwrap();
    assert_eq!(a.view(), View::Intro);
    assert_eq!(b.view(), View::Dashboard);
    assert!(b.active_exam().is_none());
}
