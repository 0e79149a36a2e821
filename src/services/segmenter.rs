//! Clause segmentation.
//!
//! Splits raw contract text into ordered clauses using a layered policy:
//! - explicit structural markers (numbered headers, `Article N` style
//!   keywords, all-caps section titles)
//! - blank-line paragraphs when no markers are present
//! - sentence grouping under a maximum length budget as the last resort
//!
//! Output spans are non-overlapping, monotonically increasing, and cover
//! the document modulo whitespace. Malformed input degrades to coarser
//! segmentation, never to an error.

use regex::Regex;

use crate::models::{Clause, Document, Span};
use crate::utils::text::split_sentences;
use crate::ClauseLensError;

/// Segments shorter than this many characters are merged into a neighbor.
pub const MIN_CLAUSE_LEN: usize = 20;

/// Segments longer than this many characters are force-split at sentence
/// boundaries.
pub const MAX_CLAUSE_LEN: usize = 5000;

/// Clause boundary detector.
pub struct Segmenter {
    marker: Regex,
    paragraph: Regex,
    min_len: usize,
    max_len: usize,
}

impl Segmenter {
    pub fn new() -> Result<Self, ClauseLensError> {
        Self::with_limits(MIN_CLAUSE_LEN, MAX_CLAUSE_LEN)
    }

    /// Build a segmenter with custom length limits. Mostly useful in tests;
    /// production callers use the defaults.
    pub fn with_limits(min_len: usize, max_len: usize) -> Result<Self, ClauseLensError> {
        // Line-anchored structural markers: "1.", "1.2", "Article 4",
        // "Section 12", "Clause 3", or an all-caps title line.
        let marker = Regex::new(
            r"(?m)^[ \t]*(?:(?P<num>\d+(?:\.\d+)*\.?)[ \t]+[A-Z]|(?P<kw>(?:Article|Section|Clause|ARTICLE|SECTION|CLAUSE)[ \t]+\d+)|(?P<caps>[A-Z][A-Z0-9 ,&'\-]{3,})$)",
        )
        .map_err(|e| ClauseLensError::Configuration(format!("invalid marker pattern: {}", e)))?;
        let paragraph = Regex::new(r"\n[ \t]*\n")
            .map_err(|e| ClauseLensError::Configuration(format!("invalid paragraph pattern: {}", e)))?;
        Ok(Self {
            marker,
            paragraph,
            min_len,
            max_len,
        })
    }

    /// Split a document into ordered clauses. An empty document yields an
    /// empty sequence, never an error.
    pub fn segment(&self, document: &Document) -> Vec<Clause> {
        let text = document.text.as_str();
        if text.trim().is_empty() {
            return Vec::new();
        }

        let markers = self.marker_positions(text);
        let mut segments: Vec<(Span, Option<String>)> = if markers.is_empty() {
            tracing::info!(
                document_id = %document.id,
                "no structural markers found, falling back to paragraph segmentation"
            );
            self.split_paragraphs(text)
                .into_iter()
                .map(|span| (span, None))
                .collect()
        } else {
            split_at_markers(text, &markers)
        };

        segments = self.enforce_max_len(text, segments);
        segments = merge_short(text, segments, self.min_len);

        segments
            .into_iter()
            .enumerate()
            .map(|(index, (span, heading))| {
                Clause::new(index, span, heading, span.slice(text).to_string())
            })
            .collect()
    }

    /// Byte offsets of every structural marker, with the heading label it
    /// carries.
    fn marker_positions(&self, text: &str) -> Vec<(usize, String)> {
        self.marker
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(0)?;
                let heading = if let Some(num) = caps.name("num") {
                    num.as_str().trim_end_matches('.').to_string()
                } else if let Some(kw) = caps.name("kw") {
                    kw.as_str().to_string()
                } else {
                    caps.name("caps")?.as_str().trim().to_string()
                };
                Some((m.start(), heading))
            })
            .collect()
    }

    /// Blank-line delimited paragraphs as trimmed spans.
    fn split_paragraphs(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut start = 0usize;
        for gap in self.paragraph.find_iter(text) {
            if let Some(span) = trim_span(text, start, gap.start()) {
                spans.push(span);
            }
            start = gap.end();
        }
        if let Some(span) = trim_span(text, start, text.len()) {
            spans.push(span);
        }
        spans
    }

    /// Force-split any over-budget segment at sentence boundaries. The
    /// heading stays with the first piece.
    fn enforce_max_len(
        &self,
        text: &str,
        segments: Vec<(Span, Option<String>)>,
    ) -> Vec<(Span, Option<String>)> {
        let mut out = Vec::new();
        for (span, heading) in segments {
            if span.slice(text).chars().count() <= self.max_len {
                out.push((span, heading));
                continue;
            }
            let pieces = sentence_groups(text, span, self.max_len);
            let mut heading = heading;
            for piece in pieces {
                out.push((piece, heading.take()));
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Pure functions
// ---------------------------------------------------------------------------

/// Trim a byte range down to its non-whitespace extent. `None` when the
/// range holds only whitespace.
pub(crate) fn trim_span(text: &str, start: usize, end: usize) -> Option<Span> {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lead = raw.len() - raw.trim_start().len();
    let s = start + lead;
    Some(Span::new(s, s + trimmed.len()))
}

/// Cut the text at each marker offset. Text before the first marker
/// becomes an unheaded preamble segment.
pub(crate) fn split_at_markers(
    text: &str,
    markers: &[(usize, String)],
) -> Vec<(Span, Option<String>)> {
    let mut segments = Vec::new();
    if let Some(&(first, _)) = markers.first() {
        if let Some(span) = trim_span(text, 0, first) {
            segments.push((span, None));
        }
    }
    for (i, (start, heading)) in markers.iter().enumerate() {
        let end = markers
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(text.len());
        if let Some(span) = trim_span(text, *start, end) {
            segments.push((span, Some(heading.clone())));
        }
    }
    segments
}

/// Group the sentences inside `span` into runs not exceeding `max_len`
/// characters. A single sentence over the budget stays whole, there is no
/// boundary inside it to cut at.
pub(crate) fn sentence_groups(text: &str, span: Span, max_len: usize) -> Vec<Span> {
    let slice = span.slice(text);
    let sentences = split_sentences(slice);
    if sentences.is_empty() {
        return vec![span];
    }
    let mut groups = Vec::new();
    // (start, end, chars) of the group being accumulated
    let mut current: Option<(usize, usize, usize)> = None;
    for (s_span, s_text) in sentences {
        let s_chars = s_text.chars().count();
        current = match current {
            None => Some((s_span.start, s_span.end, s_chars)),
            Some((start, end, chars)) if chars + s_chars > max_len => {
                groups.push(Span::new(span.start + start, span.start + end));
                Some((s_span.start, s_span.end, s_chars))
            }
            Some((start, _, chars)) => Some((start, s_span.end, chars + s_chars)),
        };
    }
    if let Some((start, end, _)) = current {
        groups.push(Span::new(span.start + start, span.start + end));
    }
    groups
}

/// Merge segments shorter than `min_len` characters into a neighbor so
/// stray fragments (orphan headings, page artifacts) do not surface as
/// clauses. A lone short segment is kept as-is.
pub(crate) fn merge_short(
    text: &str,
    segments: Vec<(Span, Option<String>)>,
    min_len: usize,
) -> Vec<(Span, Option<String>)> {
    let mut merged: Vec<(Span, Option<String>)> = Vec::new();
    for (span, heading) in segments {
        let short = span.slice(text).chars().count() < min_len;
        match merged.last_mut() {
            Some(last) if short => {
                last.0.end = span.end;
            }
            Some(last) if last.0.slice(text).chars().count() < min_len => {
                last.0.end = span.end;
                if last.1.is_none() {
                    last.1 = heading;
                }
            }
            _ => merged.push((span, heading)),
        }
    }
    merged
}
