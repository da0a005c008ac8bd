use super::*;

impl PortalApp {
    pub fn exam_cards(&self) -> Vec<ExamCard> {
        self.visible_exams()
            .into_iter()
            .map(|e| ExamCard {
                id: e.id.clone(),
                title: e.title.clone(),
                category: e.category.clone(),
                difficulty: e.difficulty,
                color: e.color,
                duration_minutes: e.duration_minutes,
                question_count: e.question_count,
            })
            .collect()
    }

    pub fn question_cells(&self) -> Vec<QuestionCell> {
        match self.player() {
            Some(p) => (0..p.len()).map(|i| p.cell(i)).collect(),
            None => Vec::new(),
        }
    }

    pub fn result_tiles(&self) -> Vec<ResultTile> {
        let Some(report) = self.last_report() else {
            return Vec::new();
        };
        vec![
            ResultTile {
                caption: "Score",
                value: format!("{}%", report.score_percent),
            },
            ResultTile {
                caption: "Correct",
                value: format!("{}/{}", report.correct, report.total),
            },
            ResultTile {
                caption: "Time",
                value: format!("{}m", report.minutes_taken),
            },
        ]
    }
}
