pub mod catalog;
pub mod corpus;
pub mod scoring;
pub mod selector;
pub mod tokenizer;

pub use catalog::Catalog;
pub use corpus::{Corpus, IntegrityReport};
pub use scoring::score;
pub use selector::{rank, select, ScoredTitle};
pub use tokenizer::tokenize;
