//! Veo video generation pipeline.
//!
//! The core of PromoReel: submits a prompt to the Veo long-running video
//! API, classifies the provider's response (immediate result, operation
//! handle, or unrecognized), polls the operation at a fixed interval under a
//! bounded attempt budget, and materializes the finished asset behind an
//! authenticated download. Every failure path is normalized into a
//! [`promoreel_models::GenerationResult`]; raw transport errors never escape
//! [`VideoGenerator::generate`].

mod config;
mod error;
mod generator;
mod outcome;

pub use config::VeoConfig;
pub use error::{VideoError, VideoResult};
pub use generator::VideoGenerator;
pub use outcome::SubmitOutcome;
