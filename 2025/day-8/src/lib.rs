pub mod circuit;
pub mod error;
pub mod junction;
pub mod pairs;
pub mod part1;
pub mod top_k;
