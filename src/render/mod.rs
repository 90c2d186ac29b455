pub mod ai_status;
pub mod alerts;
pub mod blocked;
pub mod document;
pub mod ids;
pub mod stats;
pub mod status;
