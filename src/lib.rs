pub mod clock;
pub mod display;
pub mod errors;
pub mod parse;
pub mod runner;
pub mod stats;
pub mod types;
