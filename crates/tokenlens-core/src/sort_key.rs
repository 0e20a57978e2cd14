// ABOUTME: Sort keys ranking token suggestions
// ABOUTME: Bare tokens before `$category.` tokens, digit runs compared numerically

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::resolve::{EXPLICIT_CATEGORY_TOKEN, sanitize_quoted};

/// Digits each number is padded to. Wider values still sort, but lexically.
pub const NUMERIC_WIDTH: usize = 12;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-?)(\d+)").expect("digit run pattern is valid"));

/// `$-true` style tokens: a negated word after the sigil or the category dot.
static NEGATED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^\$|\.)-(\w.+)$").expect("negated word pattern is valid"));

/// Stable sort key for a token suggestion.
///
/// * The first character classifies the token: `0` for bare tokens, `1` for
///   explicit `$category.name` tokens, so every bare token sorts first.
/// * Each digit run becomes a sign marker (`0` positive, `1` negative) plus
///   the magnitude zero-padded to [`NUMERIC_WIDTH`] digits. Negative numbers
///   therefore follow every positive one and sort by magnitude among
///   themselves (`$1 < $-1 < $-2`). Only non-negative values sort in
///   numeric order.
/// * `$-true` becomes `$ztrue`, placing it after `$true` and after numbers.
pub fn sort_key(token: &str) -> String {
    let token = sanitize_quoted(token);
    let class = if EXPLICIT_CATEGORY_TOKEN.is_match(token) {
        '1'
    } else {
        '0'
    };

    let numeric = DIGIT_RUN.replace_all(token, |captures: &Captures| {
        let sign = if captures[1].is_empty() { '0' } else { '1' };
        format!("{sign}{:0>width$}", &captures[2], width = NUMERIC_WIDTH)
    });
    let key = NEGATED_WORD.replace(&numeric, "${1}z${2}");

    format!("{class}{key}")
}
