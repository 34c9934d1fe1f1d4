pub mod counter;
pub mod engine;
pub mod error;
pub mod filter;
pub mod parse;
pub mod record;
pub mod render;
pub mod report;
pub mod sketch;
pub mod source;

#[cfg(test)]
mod tests;
