// Seating arrangement engine.
// Implements: tabular parsing, round-robin distribution, spacing validation, statistics, export.
// The distributor and validator are pure functions; handlers own all request plumbing.

pub mod distributor;
pub mod example;
pub mod export;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod stats;
pub mod validator;
