//! CLI command implementations.

mod ask;
mod config;
mod doctor;
mod export;
mod mindmap;
mod serve;
mod summarize;
mod transcript;

pub use ask::run_ask;
pub use config::run_config;
pub use doctor::run_doctor;
pub use export::run_export;
pub use mindmap::run_mindmap;
pub use serve::{router, run_serve};
pub use summarize::run_summarize;
pub use transcript::run_transcript;
