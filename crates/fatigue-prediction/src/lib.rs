//! # fatigue-prediction
//!
//! Per-ad scoring on the latest weekly feature row.
//!
//! | Predictor | Output |
//! |-----------|--------|
//! | Status classifier | healthy / degraded / burned_out |
//! | Burnout | Risk in [0, 1], tier, top drivers, 1w/2w cost forecast |
//! | Recovery | Recovery likelihood in [0, 1] for degraded ads, same shape |
//! | Fatigue alert | replace / urgent_replace from frequency and CTR trend |
//!
//! Both scorers are a weighted sum of normalized features mapped through a clamped
//! affine transform. Weights come from `FatigueConfig` and are never mutated.

pub mod burnout;
pub mod engine;
pub mod fatigue_alert;
pub mod recovery;
pub mod scoring;
pub mod status;

pub use engine::PredictionEngine;
pub use status::{classify, StatusSignals};
