use regex::RegexBuilder;

/// A contiguous piece of result content, either part of a query match or
/// plain text between matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), is_match: false }
    }

    fn matched(text: &str) -> Self {
        Self { text: text.to_string(), is_match: true }
    }
}

/// Splits `content` into segments, marking every case-insensitive,
/// non-overlapping occurrence of any whitespace-separated query token.
///
/// Tokens are matched literally: regex metacharacters in the query are
/// escaped, so a query like `a.b*c` highlights the exact substring `a.b*c`.
/// An empty or whitespace-only query returns the content as one plain
/// segment.
pub fn highlight(content: &str, query: &str) -> Vec<Segment> {
    let tokens: Vec<String> = query
        .trim()
        .split_whitespace()
        .map(regex::escape)
        .collect();

    if tokens.is_empty() {
        return vec![Segment::plain(content)];
    }

    let pattern = tokens.join("|");
    let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => regex,
        // Unreachable with escaped tokens; fall back to unhighlighted content
        Err(_) => return vec![Segment::plain(content)],
    };

    let mut segments = Vec::new();
    let mut last_end = 0;
    for found in regex.find_iter(content) {
        if found.start() > last_end {
            segments.push(Segment::plain(&content[last_end..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last_end = found.end();
    }
    if last_end < content.len() {
        segments.push(Segment::plain(&content[last_end..]));
    }

    if segments.is_empty() {
        return vec![Segment::plain(content)];
    }
    segments
}
