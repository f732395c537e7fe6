pub mod generator;
pub mod matcher;

pub use generator::GeneratorConfig;
pub use matcher::MatcherConfig;
