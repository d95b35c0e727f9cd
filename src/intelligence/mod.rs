// ABOUTME: Mood intelligence: keyword classification and heuristic nutrition
// ABOUTME: Pure, deterministic logic apart from the estimator's injected RNG
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Mood intelligence
//!
//! Infers a mood from a food name and estimates nutrition when no external
//! provider can supply real data. The classifier consults the exact reverse
//! index first and falls back to ordered keyword rules; the estimator draws
//! plausible values from per-mood (or per-bucket) ranges.

/// Food name to mood classification
pub mod classifier;

/// Heuristic nutrition estimation
pub mod estimator;

pub use classifier::classify;
pub use estimator::estimate;
