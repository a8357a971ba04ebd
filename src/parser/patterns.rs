// file: src/parser/patterns.rs
// description: compiled regex patterns for text cleaning
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Layout characters left behind by PDF text extraction
    pub static ref CONTROL_CHARS: Regex = Regex::new(
        r"[\n\r\t\x0c]"
    ).expect("CONTROL_CHARS regex is valid");

    // Non-greedy and non-nesting: "(a (b) c)" leaves " c)"
    pub static ref PARENTHETICAL: Regex = Regex::new(
        r"\([^)]*\)"
    ).expect("PARENTHETICAL regex is valid");

    pub static ref NON_LINGUISTIC: Regex = Regex::new(
        r"[^a-zA-Z0-9\s.\-]"
    ).expect("NON_LINGUISTIC regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");
}
