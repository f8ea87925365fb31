pub mod calculators;
pub mod catch;
pub mod engine;
pub mod link;
pub mod rng;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
