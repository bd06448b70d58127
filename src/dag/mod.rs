// src/dag/mod.rs

//! Dependency graph and ordering engine.
//!
//! - [`graph`] stores `dependent -> dependency` edges.
//! - [`registry`] maps nodes to the initializer text they emit.
//! - [`plan`] collects both (plus the needed seed) before a run.
//! - [`readiness`] tracks per-node readiness during a run.
//! - [`closure`] computes the dependency closure of the needed seed.
//! - [`engine`] runs the sweeps and drives an [`Emitter`](crate::emit::Emitter).
//! - [`sweep_step`] defines the per-sweep and per-run result types.
//! - [`cycle`] explains where a stuck run is cycling.

pub mod closure;
pub mod cycle;
pub mod engine;
pub mod graph;
pub mod plan;
pub mod readiness;
pub mod registry;
pub mod sweep_step;

pub use engine::OrderEngine;
pub use graph::DependencyGraph;
pub use plan::{InitPlan, PlanBuilder};
pub use readiness::ReadinessTracker;
pub use registry::InitRegistry;
pub use sweep_step::{EmissionReport, SweepStep};
