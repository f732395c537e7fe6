pub mod generator;
pub mod types;

pub use self::generator::{NGramGenerator, NGrams, Split};
pub use self::types::PaddedKey;
