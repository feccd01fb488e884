use crate::assembler::ResumeAssembler;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Holds the process-wide entity recognizer; read-only after startup.
    pub assembler: ResumeAssembler,
}
