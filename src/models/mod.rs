pub mod alert;
pub mod command;
pub mod stats;
pub mod status;
