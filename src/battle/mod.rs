pub mod ai;
pub mod calculators;
pub mod capture;
pub mod commands;
pub mod config;
pub mod engine;
pub mod runner;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
