//! switchwatch: live operator console for an ARP/MAC flood detection backend.
//!
//! Polls the backend's JSON endpoints on independent cadences, reconciles
//! the answers into a server-side page model and serves it to operators,
//! who can also unblock hosts and clear alerts from it.

pub mod backend;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod dispatcher;
pub mod engine;
pub mod models;
pub mod render;
pub mod scheduler;
