// Core algorithm exports
pub mod ats;
pub mod contact;
pub mod extractor;
pub mod filters;
pub mod matcher;
pub mod normalizer;
pub mod parser;
pub mod scoring;
pub mod sections;
pub mod skills;
pub mod tokenizer;
pub mod vocabulary;

pub use ats::{extract_keywords, keyword_coverage, section_checklist};
pub use contact::{extract_contact, ContactInfo};
pub use filters::{filter_catalog, matches_query, CatalogPage};
pub use matcher::{Recommendation, Recommender};
pub use parser::{ensure_readable, ProfileParser};
pub use scoring::similarity;
pub use skills::extract_skills;
pub use tokenizer::{stem, tokenize, tokenize_and_stem};
pub use vocabulary::Vocabulary;
