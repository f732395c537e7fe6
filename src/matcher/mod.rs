pub mod algorithms;
pub mod similarity;
pub mod types;

pub use self::algorithms::items_sharing_ngrams;
pub use self::similarity::{similarity, SimilarityCalculator, WARP_EPSILON};
pub use self::types::SimpleMatchResult;
