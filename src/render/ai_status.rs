use super::document::Fragment;
use super::ids;
use crate::models::status::AiStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Alert,
    Normal,
}

impl AiState {
    pub fn css_class(&self) -> &'static str {
        match self {
            AiState::Alert => "ai-box alert",
            AiState::Normal => "ai-box normal",
        }
    }
}

pub struct AiStatusView {
    pub prediction: String,
    pub confidence: String,
    pub source: String,
    pub state: AiState,
    pub fragment: Fragment,
}

/// Alert state is set only for an exact match on `flood_label`.
pub fn render_ai_status(status: &AiStatus, flood_label: &str) -> AiStatusView {
    let confidence = format!("{:.1}%", status.confidence * 100.0);
    let state = if status.prediction == flood_label {
        AiState::Alert
    } else {
        AiState::Normal
    };

    let fragment = Fragment::new()
        .text(ids::AI_PREDICTION, status.prediction.clone())
        .text(ids::AI_CONFIDENCE, confidence.clone())
        .text(ids::AI_SOURCE, status.source.clone())
        .class(ids::AI_BOX, state.css_class());

    AiStatusView {
        prediction: status.prediction.clone(),
        confidence,
        source: status.source.clone(),
        state,
        fragment,
    }
}
