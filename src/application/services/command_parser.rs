//! Splits free-form command text into a search phrase and an optional caption.
//!
//! Grammar: the input is the command line with the leading `/trigger` already
//! stripped. Zero, one, or two double-quoted segments may appear; anything
//! outside quotes is free text. Newlines and non-ASCII characters inside a
//! quoted segment are preserved verbatim.

use crate::domain::errors::CommandParseError;

/// Result of parsing one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Search phrase handed to the provider.
    pub keywords: String,
    /// Optional caption, empty when none was given.
    pub caption: String,
}

#[derive(Debug, Clone)]
enum Segment {
    Free(String),
    Quoted(String),
}

/// Parses command text into keywords and an optional caption.
///
/// Accepted shapes, in segment order:
/// - nothing, or free text only: the free text is the keywords;
/// - one quoted segment spanning the whole remainder: unwrapped as keywords;
/// - free text then one quoted segment: keywords then caption;
/// - two quoted segments: keywords then caption.
///
/// # Errors
/// Unbalanced quotes, an empty quoted segment, more than two quoted segments,
/// or free text after a quoted segment are parse errors; the caller must not
/// invoke a provider on any of them.
pub fn parse(text: &str) -> Result<ParsedCommand, CommandParseError> {
    if text.matches('"').count() % 2 != 0 {
        return Err(CommandParseError::UnbalancedQuotes);
    }

    let segments = tokenize(text)?;

    let quoted = segments
        .iter()
        .filter(|segment| matches!(segment, Segment::Quoted(_)))
        .count();
    if quoted > 2 {
        return Err(CommandParseError::TooManyQuotedSegments);
    }

    match segments.as_slice() {
        [] => Ok(ParsedCommand::default()),
        [Segment::Free(keywords)] | [Segment::Quoted(keywords)] => Ok(ParsedCommand {
            keywords: keywords.clone(),
            caption: String::new(),
        }),
        [Segment::Free(keywords), Segment::Quoted(caption)]
        | [Segment::Quoted(keywords), Segment::Quoted(caption)] => Ok(ParsedCommand {
            keywords: keywords.clone(),
            caption: caption.clone(),
        }),
        _ => Err(CommandParseError::UnexpectedTrailingText),
    }
}

fn tokenize(text: &str) -> Result<Vec<Segment>, CommandParseError> {
    let mut segments = Vec::new();
    let mut free = String::new();
    let mut chars = text.chars();

    let flush_free = |free: &mut String, segments: &mut Vec<Segment>| {
        let trimmed = free.trim();
        if !trimmed.is_empty() {
            segments.push(Segment::Free(trimmed.to_string()));
        }
        free.clear();
    };

    while let Some(c) = chars.next() {
        if c != '"' {
            free.push(c);
            continue;
        }
        flush_free(&mut free, &mut segments);

        let mut quoted = String::new();
        loop {
            match chars.next() {
                Some('"') => break,
                Some(inner) => quoted.push(inner),
                // Guarded by the even-count check above.
                None => return Err(CommandParseError::UnbalancedQuotes),
            }
        }
        if quoted.is_empty() {
            return Err(CommandParseError::EmptyQuotedSegment);
        }
        segments.push(Segment::Quoted(quoted));
    }
    flush_free(&mut free, &mut segments);

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "", "" ; "empty_input")]
    #[test_case("happy cat", "happy cat", "" ; "free_text_only")]
    #[test_case("  happy cat  ", "happy cat", "" ; "free_text_is_trimmed")]
    #[test_case("\"happy cat\"", "happy cat", "" ; "single_quoted_spanning_all")]
    #[test_case("unique \"m1 m2 m3\"", "unique", "m1 m2 m3" ; "free_keywords_quoted_caption")]
    #[test_case("k1 k2 \"the caption\"", "k1 k2", "the caption" ; "multiword_keywords_with_caption")]
    #[test_case("\"k1 k2\" \"the caption\"", "k1 k2", "the caption" ; "two_quoted_segments")]
    fn test_parse_accepts(input: &str, keywords: &str, caption: &str) {
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.keywords, keywords);
        assert_eq!(parsed.caption, caption);
    }

    #[test_case("\"k1 k2 k3\" m1 m2 m3\"", CommandParseError::UnbalancedQuotes ; "odd_quote_count")]
    #[test_case("cats \"capti", CommandParseError::UnbalancedQuotes ; "unterminated_caption")]
    #[test_case("cats \"\"", CommandParseError::EmptyQuotedSegment ; "empty_quoted_segment")]
    #[test_case("cats \"caption\" trailing", CommandParseError::UnexpectedTrailingText ; "text_after_caption")]
    #[test_case("\"kw\" trailing", CommandParseError::UnexpectedTrailingText ; "text_after_quoted_keywords")]
    #[test_case("\"kw\" middle \"caption\"", CommandParseError::UnexpectedTrailingText ; "text_between_segments")]
    #[test_case("\"a\" \"b\" \"c\"", CommandParseError::TooManyQuotedSegments ; "three_quoted_segments")]
    fn test_parse_rejects(input: &str, expected: CommandParseError) {
        assert_eq!(parse(input).unwrap_err(), expected);
    }

    #[test]
    fn test_quoted_content_is_preserved_verbatim() {
        let parsed = parse("cats \"line one\nlínea dos — 行二\"").unwrap();
        assert_eq!(parsed.keywords, "cats");
        assert_eq!(parsed.caption, "line one\nlínea dos — 行二");
    }

    #[test]
    fn test_whitespace_only_quoted_segment_is_kept() {
        let parsed = parse("cats \"  \"").unwrap();
        assert_eq!(parsed.caption, "  ");
    }

    // Re-quoting the parsed pair and parsing again must yield the same pair.
    #[test_case("unique \"m1 m2 m3\"" ; "keywords_and_caption")]
    #[test_case("plain keywords" ; "keywords_only")]
    #[test_case("\"k1 k2\" \"cap\"" ; "both_quoted")]
    fn test_parse_is_idempotent(input: &str) {
        let first = parse(input).unwrap();
        let requoted = if first.caption.is_empty() {
            first.keywords.clone()
        } else {
            format!("{} \"{}\"", first.keywords, first.caption)
        };
        let second = parse(&requoted).unwrap();
        assert_eq!(first, second);
    }
}
