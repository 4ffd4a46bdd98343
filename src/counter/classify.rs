use crate::language::CommentSyntax;

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// Comment tokens consulted while classifying.
///
/// Only the first configured line prefix and the first block pair take part;
/// additional entries in a [`CommentSyntax`] are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentTokens<'a> {
    pub line: Option<&'a str>,
    pub block: Option<(&'a str, &'a str)>,
}

impl<'a> CommentTokens<'a> {
    #[must_use]
    pub fn from_syntax(syntax: &'a CommentSyntax) -> Self {
        Self {
            line: syntax.primary_line_comment(),
            block: syntax.primary_block_comment(),
        }
    }
}

/// Classify one line and return its kind plus whether a block comment is
/// still open afterwards.
///
/// `line` must already be trimmed by the caller. When a block comment closes
/// mid-line, the text after the end token is classified as a line of its own
/// and that result stands for the whole line.
#[must_use]
pub fn classify_line(
    line: &str,
    tokens: CommentTokens<'_>,
    in_block_comment: bool,
) -> (LineKind, bool) {
    let mut rest = line;
    let mut in_block = in_block_comment;

    loop {
        let open_block = tokens
            .block
            .filter(|(start, _)| in_block || rest.starts_with(start));

        let Some((_, end)) = open_block else {
            return (classify_outside_block(rest, tokens, in_block), in_block);
        };

        if rest.ends_with(end) {
            return (LineKind::Comment, false);
        }

        // Closed mid-line: whatever follows the end token decides the line.
        let Some((_, after)) = rest.split_once(end) else {
            return (LineKind::Comment, true);
        };
        rest = after;
        in_block = false;
    }
}

fn classify_outside_block(line: &str, tokens: CommentTokens<'_>, in_block: bool) -> LineKind {
    // Open state with no block tokens configured: nothing can close it.
    if in_block {
        return LineKind::Comment;
    }

    if line.is_empty() {
        return LineKind::Blank;
    }

    if tokens.line.is_some_and(|prefix| line.starts_with(prefix)) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
