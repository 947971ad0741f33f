// src/search.rs - Literal find and replace

/// Half-open byte range `[start, end)` of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<MatchSpan> for std::ops::Range<usize> {
    fn from(span: MatchSpan) -> Self {
        span.start..span.end
    }
}

/// Every case-sensitive occurrence of `needle`, left to right. Each search
/// resumes at the end of the previous match, so matches never overlap.
pub fn find_all(content: &str, needle: &str) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    if needle.is_empty() {
        return spans;
    }

    let mut from = 0;
    while let Some(found) = content[from..].find(needle) {
        let start = from + found;
        let end = start + needle.len();
        spans.push(MatchSpan::new(start, end));
        from = end;
    }
    spans
}

/// Replace every occurrence of `needle`, using the same scan as [`find_all`].
/// An empty needle leaves the content unchanged.
pub fn replace_all(content: &str, needle: &str, replacement: &str) -> String {
    replace_spans(content, &find_all(content, needle), replacement)
}

/// Substitute `replacement` for each span. Spans must be sorted and disjoint.
pub fn replace_spans(content: &str, spans: &[MatchSpan], replacement: &str) -> String {
    let removed: usize = spans.iter().map(MatchSpan::len).sum();
    let mut out =
        String::with_capacity(content.len() - removed + spans.len() * replacement.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&content[last..span.start]);
        out.push_str(replacement);
        last = span.end;
    }
    out.push_str(&content[last..]);
    out
}

/// First span starting at or after `offset`, wrapping to the first span.
pub fn next_after(spans: &[MatchSpan], offset: usize) -> Option<MatchSpan> {
    let idx = spans.partition_point(|s| s.start < offset);
    spans.get(idx).or_else(|| spans.first()).copied()
}

/// Whether `offset` falls inside one of the sorted `spans`.
pub fn is_highlighted(spans: &[MatchSpan], offset: usize) -> bool {
    let idx = spans.partition_point(|s| s.end <= offset);
    spans.get(idx).is_some_and(|s| s.contains(offset))
}
