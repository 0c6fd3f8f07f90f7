//! Ordered chapter outline and its record parser.

use crate::ChapterSpec;
use folio_error::OutlineError;
use std::str::FromStr;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const FIELDS_PER_RECORD: usize = 3;

/// The book's chapters in source order.
///
/// Each non-blank line of the source is one record of three delimited fields:
/// `chapter_number, chapter_title, chapter_summary`. Fields are trimmed, and a
/// field may be double-quoted to carry a comma (`""` inside quotes is a literal
/// quote). Chapter numbers are not deduplicated or checked for sequence.
///
/// # Examples
///
/// ```
/// use folio_core::Outline;
///
/// let outline: Outline = "1, The Body, A corpse is found\n2, The Clue, \"A letter, unsigned\""
///     .parse()
///     .unwrap();
///
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline.chapters()[1].summary(), "A letter, unsigned");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    chapters: Vec<ChapterSpec>,
}

impl Outline {
    /// Build an outline from chapters already in order.
    pub fn new(chapters: Vec<ChapterSpec>) -> Self {
        Self { chapters }
    }

    /// Parse outline source text.
    ///
    /// The whole source must parse before anything is returned, so a bad
    /// record anywhere rejects the outline.
    ///
    /// # Errors
    ///
    /// Returns [`folio_error::OutlineErrorKind::MalformedRecord`] naming the 1-based line of
    /// the first record that does not have exactly three fields, has an
    /// unterminated quote, or has a chapter number that is not a positive integer.
    #[tracing::instrument(skip(source), fields(bytes = source.len()))]
    pub fn parse(source: &str) -> Result<Self, OutlineError> {
        let mut chapters = Vec::new();
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);

        for (index, line) in source.lines().enumerate() {
            let position = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let fields =
                split_record(line).map_err(|reason| OutlineError::malformed(position, reason))?;
            if fields.len() != FIELDS_PER_RECORD {
                return Err(OutlineError::malformed(
                    position,
                    format!(
                        "expected {} fields, found {}",
                        FIELDS_PER_RECORD,
                        fields.len()
                    ),
                ));
            }

            let number = parse_number(&fields[0]).ok_or_else(|| {
                OutlineError::malformed(
                    position,
                    format!("invalid chapter number '{}'", fields[0]),
                )
            })?;

            chapters.push(ChapterSpec::new(number, fields[1].clone(), fields[2].clone()));
        }

        tracing::debug!(chapters = chapters.len(), "Parsed outline");
        Ok(Self { chapters })
    }

    /// Chapters in source order.
    pub fn chapters(&self) -> &[ChapterSpec] {
        &self.chapters
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the outline has no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Iterate over chapters in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChapterSpec> {
        self.chapters.iter()
    }
}

impl FromStr for Outline {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a ChapterSpec;
    type IntoIter = std::slice::Iter<'a, ChapterSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}

fn parse_number(field: &str) -> Option<u32> {
    field.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Split one line into trimmed fields, honouring double quotes.
fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == QUOTE && field.trim().is_empty() {
            field.clear();
            in_quotes = true;
        } else if c == DELIMITER {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field.trim().to_string());
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_error::OutlineErrorKind;

    #[test]
    fn splits_plain_fields() {
        let fields = split_record("1, Title , Summary here").unwrap();
        assert_eq!(fields, vec!["1", "Title", "Summary here"]);
    }

    #[test]
    fn quoted_field_keeps_delimiter_and_escaped_quote() {
        let fields = split_record(r#"2,"The ""Clue""","A letter, unsigned""#).unwrap();
        assert_eq!(fields, vec!["2", "The \"Clue\"", "A letter, unsigned"]);
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert!(split_record(r#"3,"Open,summary"#).is_err());
    }

    #[test]
    fn zero_is_not_a_chapter_number() {
        assert_eq!(parse_number("0"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("seven"), None);
        assert_eq!(parse_number("7"), Some(7));
    }

    #[test]
    fn malformed_kind_carries_position() {
        let err = Outline::parse("1,A,B\n\n2,only two").unwrap_err();
        match err.kind {
            OutlineErrorKind::MalformedRecord { position, .. } => assert_eq!(position, 3),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
