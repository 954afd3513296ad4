//! ILR Qualifying Period Engine
//!
//! This crate estimates a practice UK settlement (ILR) qualifying period from
//! a route selection, the route's sub-answers and an English proficiency flag,
//! following the proposals in the November 2025 Command Paper (CP 1448).
//! It is a learning tool, not immigration advice.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
