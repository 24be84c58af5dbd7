pub mod cli;
pub mod orchestrator;
pub mod prompt;
pub mod report;
