// file: src/parser/cleaner.rs
// description: ordered regex passes turning raw PDF text into cleaned text
// reference: https://docs.rs/regex

use crate::error::Result;
use crate::models::{CleanedText, RawText};
use crate::parser::patterns::{CONTROL_CHARS, NON_LINGUISTIC, PARENTHETICAL, WHITESPACE_RUN};
use crate::pipeline::Stage;

/// Pure text cleaner. Pass order matters: parentheticals go before symbol
/// stripping so citations leave no residue, and whitespace collapse runs last
/// to absorb the gaps earlier passes create.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl TextCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, text: &str) -> String {
        let text = CONTROL_CHARS.replace_all(text, " ");
        let text = PARENTHETICAL.replace_all(&text, "");
        let text = NON_LINGUISTIC.replace_all(&text, "");
        let text = WHITESPACE_RUN.replace_all(&text, " ");

        text.trim().to_string()
    }
}

impl Stage for TextCleaner {
    type Input = RawText;
    type Output = CleanedText;

    fn name(&self) -> &'static str {
        "clean"
    }

    fn run(&self, input: RawText) -> Result<CleanedText> {
        Ok(CleanedText::new(self.clean(input.as_str())))
    }
}
