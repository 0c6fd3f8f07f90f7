//! Chapter descriptions and generated chapter results.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One chapter of the outline.
///
/// `number` is data taken from the outline, not an index: outlines are
/// processed in source order regardless of numbering.
///
/// # Examples
///
/// ```
/// use folio_core::ChapterSpec;
///
/// let chapter = ChapterSpec::builder()
///     .number(1u32)
///     .title("The Body")
///     .summary("A corpse is found")
///     .build()
///     .unwrap();
///
/// assert_eq!(*chapter.number(), 1);
/// assert_eq!(chapter.title(), "The Body");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChapterSpec {
    /// Chapter number as written in the outline
    number: u32,
    /// Chapter title
    title: String,
    /// What happens in the chapter
    summary: String,
}

impl ChapterSpec {
    /// Create a chapter spec directly.
    pub fn new(number: u32, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            summary: summary.into(),
        }
    }

    /// Creates a new builder for `ChapterSpec`.
    pub fn builder() -> ChapterSpecBuilder {
        ChapterSpecBuilder::default()
    }
}

/// Generated text for one chapter, on its way to the artifact.
///
/// Produced after a generation call and consumed by the accumulator; runs do
/// not keep a collection of these in memory.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ChapterResult {
    /// The chapter that was generated
    spec: ChapterSpec,
    /// Generated prose
    text: String,
    /// 1-based position of the chapter in the outline
    sequence: usize,
}

impl ChapterResult {
    /// Pair a chapter with its generated text.
    pub fn new(spec: ChapterSpec, text: impl Into<String>, sequence: usize) -> Self {
        Self {
            spec,
            text: text.into(),
            sequence,
        }
    }

    /// Number of whitespace-separated words in the generated text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
