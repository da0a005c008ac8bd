use crate::error::DataError;
use serde::{Deserialize, Serialize};

const PORTAL_YAML: &str = include_str!("data/portal.yaml");

/// Presentation settings shared by every view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub window_title: String,
    pub user_initials: String,
    pub user_role: String,
    pub passing_score_percent: u8,
    /// Shown in the player header. Static text, there is no countdown.
    pub timer_label: String,
    pub exam_code_suffix: String,
}

impl PortalConfig {
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_yaml(PORTAL_YAML)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, DataError> {
        let cfg: PortalConfig = serde_yaml::from_str(yaml)?;
        if cfg.passing_score_percent > 100 {
            return Err(DataError::Invalid(format!(
                "passing score {}% is above 100%",
                cfg.passing_score_percent
            )));
        }
        Ok(cfg)
    }

    /// Code printed under the exam title on the instructions screen, e.g. `1-2024`.
    pub fn exam_code(&self, exam_id: &str) -> String {
        format!("{exam_id}-{}", self.exam_code_suffix)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            window_title: "Assessment Portal".to_owned(),
            user_initials: "CK".to_owned(),
            user_role: "Product Manager".to_owned(),
            passing_score_percent: 80,
            timer_label: "24:12".to_owned(),
            exam_code_suffix: "2024".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_matches_default() {
        assert_eq!(PortalConfig::embedded().unwrap(), PortalConfig::default());
    }

    #[test]
    fn exam_code_appends_suffix() {
        assert_eq!(PortalConfig::default().exam_code("3"), "3-2024");
    }

    #[test]
    fn rejects_passing_score_over_hundred() {
        let yaml = "window_title: t\nuser_initials: A\nuser_role: r\npassing_score_percent: 120\ntimer_label: '0:00'\nexam_code_suffix: x\n";
        assert!(matches!(PortalConfig::from_yaml(yaml), Err(DataError::Invalid(_))));
    }
}
