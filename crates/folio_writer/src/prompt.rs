//! Prompt construction for chapter and summary requests.

use folio_core::{BookSpec, ChapterSpec, GenerateRequest};

/// Builds generation requests for a single model.
///
/// A chapter prompt carries the global synopsis and that chapter's own
/// number, title, and summary. Nothing from other chapters is included.
///
/// # Examples
///
/// ```
/// use folio_core::{BookSpec, ChapterSpec};
/// use folio_writer::PromptBuilder;
///
/// let prompts = PromptBuilder::new("llama3.3");
/// let book = BookSpec::new("A detective story in 1920s Paris");
/// let chapter = ChapterSpec::new(1, "The Body", "A corpse is found");
///
/// let request = prompts.chapter_request(&book, &chapter);
/// assert_eq!(request.model(), "llama3.3");
/// assert!(request.prompt().contains("A detective story in 1920s Paris"));
/// assert!(request.prompt().contains("Chapter 1 titled 'The Body'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    model: String,
}

impl PromptBuilder {
    /// Create a prompt builder targeting `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Model identifier placed in every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Prompt text for one chapter.
    pub fn chapter_prompt(&self, book: &BookSpec, chapter: &ChapterSpec) -> String {
        format!(
            "Overall Book Summary:\n{synopsis}\n\n\
             This chapter is described as:\n{summary}\n\n\
             Please write Chapter {number} titled '{title}'. \
             Write the full prose of this chapter only, not an outline, and do not \
             write any other chapter.\n\n\
             Begin the chapter now:",
            synopsis = book.synopsis(),
            summary = chapter.summary(),
            number = chapter.number(),
            title = chapter.title(),
        )
    }

    /// Request for one chapter.
    pub fn chapter_request(&self, book: &BookSpec, chapter: &ChapterSpec) -> GenerateRequest {
        self.request(self.chapter_prompt(book, chapter))
    }

    /// Request for a concise summary of a finished book.
    pub fn summary_request(&self, book_text: &str) -> GenerateRequest {
        self.request(format!(
            "Please provide a concise summary of the following story:\n\n{}\n\nSummary:",
            book_text.trim()
        ))
    }

    fn request(&self, prompt: String) -> GenerateRequest {
        GenerateRequest::new(self.model.clone(), prompt)
    }
}
