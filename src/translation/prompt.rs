/// Instruction sent as the first content part, ahead of the source lines.
pub const TRANSLATION_PREAMBLE: &str = "Consider that you are a translator. \
     Translate this text which is persian to english.\n\
     Delete anything related to programing languages comment notation in the text like // or /* or */\n\
     Note that the context of this text is about programming.\n\
     Also insert a \n after each part.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_names_language_pair() {
        assert!(TRANSLATION_PREAMBLE.contains("persian to english"));
    }

    #[test]
    fn test_preamble_strips_comment_notation() {
        for token in ["//", "/*", "*/"] {
            assert!(TRANSLATION_PREAMBLE.contains(token), "missing {token}");
        }
    }
}
