//! Word-level differ producing run-length spans for inline highlighting.

use crate::alignment::{opcodes, OpTag};
use crate::config::DiffConfig;
use crate::diff::{WordSpan, WordStatus};

/// Diff two strings word-by-word.
///
/// Tokenizes on whitespace and aligns with exact word equality. Consecutive
/// words sharing an opcode are joined by single spaces into one span; a
/// replace run emits its deleted span before its added span, never
/// interleaved. Empty input on either side yields spans for the other side
/// only; two empty inputs yield an empty sequence.
pub fn diff_words(old: &str, new: &str) -> Vec<WordSpan> {
    diff_words_limited(old, new, DiffConfig::default().lcs_work_limit)
}

pub(crate) fn diff_words_limited(old: &str, new: &str, work_limit: usize) -> Vec<WordSpan> {
    let old_words: Vec<&str> = old.split_whitespace().collect();
    let new_words: Vec<&str> = new.split_whitespace().collect();

    let mut spans = Vec::new();
    for op in opcodes(&old_words, &new_words, work_limit) {
        match op.tag {
            OpTag::Equal => {
                spans.push(WordSpan::new(
                    old_words[op.i1..op.i2].join(" "),
                    WordStatus::Same,
                ));
            }
            OpTag::Replace => {
                spans.push(WordSpan::new(
                    old_words[op.i1..op.i2].join(" "),
                    WordStatus::Deleted,
                ));
                spans.push(WordSpan::new(
                    new_words[op.j1..op.j2].join(" "),
                    WordStatus::Added,
                ));
            }
            OpTag::Delete => {
                spans.push(WordSpan::new(
                    old_words[op.i1..op.i2].join(" "),
                    WordStatus::Deleted,
                ));
            }
            OpTag::Insert => {
                spans.push(WordSpan::new(
                    new_words[op.j1..op.j2].join(" "),
                    WordStatus::Added,
                ));
            }
        }
    }
    spans
}
