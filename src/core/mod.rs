pub mod corpus;
pub mod corpus_source;
pub mod datetime;
pub mod emoji;
pub mod generator;
pub mod template;
pub mod translate;
