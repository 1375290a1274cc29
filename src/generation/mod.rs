//! Context assembly and prompt templating for answer generation

pub mod prompt;

pub use prompt::{PromptBuilder, PromptTemplate};
