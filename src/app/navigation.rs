use super::*;

impl PortalApp {
    /// Dashboard -> Intro with `exam_id` bound as the active exam.
    pub fn select_exam(&mut self, exam_id: &str) -> Result<(), PortalError> {
        if self.state != View::Dashboard {
            return Err(PortalError::InvalidTransition {
                from: self.state,
                action: "select an exam",
            });
        }
        let exam = self
            .catalog
            .find(exam_id)
            .cloned()
            .ok_or_else(|| PortalError::UnknownExam(exam_id.to_owned()))?;

        log::info!("selected exam {} ({})", exam.id, exam.title);
        self.selected_exam = Some(exam);
        self.set_view(View::Intro);
        Ok(())
    }

    /// Intro -> Exam with a fresh player.
    pub fn proceed(&mut self) -> Result<(), PortalError> {
        let exam_id = match &self.selected_exam {
            Some(exam) => exam.id.clone(),
            None => return Err(PortalError::NoActiveExam),
        };
        if self.state != View::Intro {
            return Err(PortalError::InvalidTransition {
                from: self.state,
                action: "start the assessment",
            });
        }

        let questions = self.questions.questions_for(&exam_id);
        if questions.is_empty() {
            return Err(PortalError::EmptyQuestionBank(exam_id));
        }

        self.player = Some(PlayerState::new(questions));
        self.last_report = None;
        self.set_view(View::Exam);
        Ok(())
    }

    /// Exam -> Result. Unanswered questions are allowed.
    pub fn finish(&mut self) -> Result<(), PortalError> {
        if self.state != View::Exam {
            return Err(PortalError::InvalidTransition {
                from: self.state,
                action: "finish",
            });
        }
        let player = self.player.as_ref().ok_or(PortalError::NotInExam)?;

        let report = self.grader.grade(player.answers(), player.questions());
        log::info!(
            "submitted with {}/{} answered",
            player.answers().len(),
            player.len()
        );
        self.last_report = Some(report);
        self.set_view(View::Result);
        Ok(())
    }

    /// Back to the dashboard from anywhere, dropping the exam and its attempt.
    pub fn go_home(&mut self) {
        self.selected_exam = None;
        self.player = None;
        self.last_report = None;
        self.set_view(View::Dashboard);
    }

    /// Intro -> Dashboard.
    pub fn back(&mut self) -> Result<(), PortalError> {
        if self.state != View::Intro {
            return Err(PortalError::InvalidTransition {
                from: self.state,
                action: "go back",
            });
        }
        self.selected_exam = None;
        self.set_view(View::Dashboard);
        Ok(())
    }
}
