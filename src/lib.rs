pub mod baseline;
pub mod debate;
pub mod evaluator;
pub mod experiment;
pub mod llm;
pub mod scoring;
pub mod testset;
pub mod types;

#[cfg(test)]
mod tests;
