//! Devolutiva - DISC Behavioral Assessment Engine
//!
//! This crate computes a complete behavioral-assessment report ("devolutiva")
//! from a DISC personality profile: nine weighted health indices, a
//! dominant-profile classification, burnout-risk detection, cross-dimension
//! correlations, and a fixed 15-step narrative session.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
