//! Prompt construction for RAG generation

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::RetrievedDocument;

/// Placeholder for the assembled context in a template
const CONTEXT_PLACEHOLDER: &str = "{context}";
/// Placeholder for the user's question in a template
const QUESTION_PLACEHOLDER: &str = "{question}";

/// Context assembler for retrieved passages
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render retrieved passages as a numbered context block.
    ///
    /// Result *i* (1-indexed, in the given order) becomes a labeled block
    /// containing its content; blocks are separated by one blank line with
    /// no trailing separator. An empty input yields an empty string -
    /// callers decide whether zero context is acceptable.
    pub fn build_context(results: &[RetrievedDocument]) -> String {
        let mut context = String::new();

        for (i, result) in results.iter().enumerate() {
            context.push_str(&format!("[Document {}]\n{}", i + 1, result.content));
            if i < results.len() - 1 {
                context.push_str("\n\n");
            }
        }

        context
    }
}

/// A generation prompt template with `{context}` and `{question}` slots.
///
/// Both placeholders are validated at construction so a missing slot fails
/// the deployment (or the request, when loaded lazily) rather than sending
/// a partial prompt to the model.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template from a string, validating both placeholders
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();

        for placeholder in [CONTEXT_PLACEHOLDER, QUESTION_PLACEHOLDER] {
            if !template.contains(placeholder) {
                return Err(Error::template(format!(
                    "template is missing the {placeholder} placeholder"
                )));
            }
        }

        Ok(Self { template })
    }

    /// Load and validate a template from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::template(format!("failed to read template '{}': {}", path.display(), e))
        })?;
        Self::new(content)
    }

    /// Substitute the context and question into the template
    pub fn render(&self, context: &str, question: &str) -> String {
        self.template
            .replace(CONTEXT_PLACEHOLDER, context)
            .replace(QUESTION_PLACEHOLDER, question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retrieved(id: &str, content: &str) -> RetrievedDocument {
        RetrievedDocument::new(id, content, 0.9)
    }

    #[test]
    fn context_blocks_are_numbered_and_separated() {
        let results = vec![
            retrieved("a", "cats are mammals"),
            retrieved("b", "dogs are mammals"),
        ];

        let context = PromptBuilder::build_context(&results);
        assert_eq!(
            context,
            "[Document 1]\ncats are mammals\n\n[Document 2]\ndogs are mammals"
        );
    }

    #[test]
    fn single_result_has_no_trailing_separator() {
        let context = PromptBuilder::build_context(&[retrieved("a", "one passage")]);
        assert_eq!(context, "[Document 1]\none passage");
    }

    #[test]
    fn empty_results_yield_empty_context() {
        assert_eq!(PromptBuilder::build_context(&[]), "");
    }

    #[test]
    fn render_substitutes_both_placeholders() {
        let template =
            PromptTemplate::new("Context:\n{context}\n\nQuestion: {question}\n").unwrap();
        let prompt = template.render("[Document 1]\nfacts", "what is true?");
        assert_eq!(prompt, "Context:\n[Document 1]\nfacts\n\nQuestion: what is true?\n");
    }

    #[test]
    fn missing_placeholder_is_rejected() {
        let err = PromptTemplate::new("Question: {question}").unwrap_err();
        assert!(matches!(err, Error::Template(_)));

        let err = PromptTemplate::new("Context: {context}").unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn unreadable_template_file_is_a_template_error() {
        let err = PromptTemplate::from_file("/nonexistent/rag_template.txt").unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }
}
