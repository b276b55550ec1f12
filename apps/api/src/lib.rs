//! Career Companion GAI API: resume, job-match and post generation over a
//! generative backend, with deterministic fallbacks when the backend is absent
//! or misbehaves.

pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod routes;
pub mod state;
