use crate::config::PortalConfig;
use crate::error::{DataError, PortalError};
use crate::model::{Exam, View};
use crate::sources::{CatalogSource, EmbeddedData, FixedGrader, Grader, QuestionSource, ScoreReport};

// Submodules
pub mod actions;
pub mod navigation;
pub mod player;
pub mod queries;
pub mod view_models;

pub use player::PlayerState;
pub use crate::view_models::{ExamCard, QuestionCell, QuestionStatus, ResultTile};

/// Whole UI state of the portal. One value per window, owned by the eframe
/// runner and handed to every view as `&mut`.
pub struct PortalApp {
    pub config: PortalConfig,
    pub search: String,  // dashboard filter
    pub message: String, // last rejected action, shown by the views
    pub(crate) state: View,
    pub(crate) selected_exam: Option<Exam>,
    pub(crate) player: Option<PlayerState>,
    pub(crate) last_report: Option<ScoreReport>,
    catalog: Box<dyn CatalogSource>,
    questions: Box<dyn QuestionSource>,
    grader: Box<dyn Grader>,
}

impl PortalApp {
    pub fn new(
        config: PortalConfig,
        catalog: Box<dyn CatalogSource>,
        questions: Box<dyn QuestionSource>,
        grader: Box<dyn Grader>,
    ) -> Self {
        Self {
            config,
            search: String::new(),
            message: String::new(),
            state: View::Dashboard,
            selected_exam: None,
            player: None,
            last_report: None,
            catalog,
            questions,
            grader,
        }
    }

    /// App wired to the data and settings compiled into the binary.
    pub fn embedded() -> Result<Self, DataError> {
        let config = PortalConfig::embedded()?;
        let data = EmbeddedData::load()?;
        log::info!(
            "loaded {} exams from the embedded catalog",
            data.exams().len()
        );
        Ok(Self::new(
            config,
            Box::new(data.clone()),
            Box::new(data),
            Box::new(FixedGrader),
        ))
    }

    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    /// Records a rejected operation for the UI and the log.
    pub(crate) fn report(&mut self, err: PortalError) {
        log::warn!("rejected: {err}");
        self.message = err.to_string();
    }

    fn set_view(&mut self, to: View) {
        if self.state != to {
            log::info!("view {} -> {}", self.state, to);
        }
        self.state = to;
        self.message.clear();
    }
}
