use super::*;

impl PortalApp {
    /// The running attempt, only while the Exam view is showing.
    fn active_player(&mut self) -> Result<&mut PlayerState, PortalError> {
        if self.state != View::Exam {
            return Err(PortalError::NotInExam);
        }
        self.player.as_mut().ok_or(PortalError::NotInExam)
    }

    pub fn select_option(&mut self, question: usize, option: usize) -> Result<(), PortalError> {
        self.active_player()?.select_option(question, option)
    }

    /// Records `option` for the question under the pointer.
    pub fn answer_current(&mut self, option: usize) -> Result<(), PortalError> {
        let player = self.active_player()?;
        let current = player.current();
        player.select_option(current, option)
    }

    pub fn go_to_question(&mut self, index: isize) -> Result<usize, PortalError> {
        Ok(self.active_player()?.go_to_question(index))
    }

    pub fn next_question(&mut self) -> Result<usize, PortalError> {
        Ok(self.active_player()?.next_question())
    }

    pub fn previous_question(&mut self) -> Result<usize, PortalError> {
        Ok(self.active_player()?.previous_question())
    }

    pub fn toggle_flag(&mut self, index: usize) -> Result<bool, PortalError> {
        self.active_player()?.toggle_flag(index)
    }

    /// The player's "Submit" button. Same as [`PortalApp::finish`].
    pub fn submit(&mut self) -> Result<(), PortalError> {
        self.finish()
    }
}
