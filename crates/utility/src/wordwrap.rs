/// Greedy word wrap at `width` columns.
///
/// A word fits when the line so far plus the word is at most `width`; the
/// separating space is not counted, so a line may reach `width + 1`.
/// Whitespace runs collapse to a single space or a line break. A word longer
/// than `width` is split into `width`-sized pieces. Empty text or a zero width
/// is returned unchanged.
pub fn wordwrap(text: &str, width: usize) -> String {
    if text.is_empty() || width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line_len + word_len <= width {
            if line_len > 0 {
                out.push(' ');
                line_len += 1;
            }
            out.push_str(word);
            line_len += word_len;
            continue;
        }

        if line_len > 0 {
            out.push('\n');
            line_len = 0;
        }

        if word_len <= width {
            out.push_str(word);
            line_len = word_len;
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        for (i, chunk) in chars.chunks(width).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(chunk);
            line_len = chunk.len();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wordwrap("This is a test string", 10), "This is a\ntest string");
        assert_eq!(
            wordwrap("This is a test string that should wrap multiple times", 10),
            "This is a\ntest string\nthat should\nwrap\nmultiple\ntimes"
        );
        assert_eq!(
            wordwrap("This is a test! @#$%^&*() string", 10),
            "This is a\ntest!\n@#$%^&*()\nstring"
        );
    }

    #[test]
    fn short_and_empty_inputs() {
        assert_eq!(wordwrap("", 10), "");
        assert_eq!(wordwrap("Hello", 10), "Hello");
        assert_eq!(wordwrap("unchanged  text", 0), "unchanged  text");
    }

    #[test]
    fn breaks_long_words() {
        assert_eq!(wordwrap("abcdefghijkl xy", 5), "abcde\nfghij\nkl xy");
        assert_eq!(wordwrap("go abcdefghij", 5), "go\nabcde\nfghij");
    }

    proptest! {
        #[test]
        fn lines_stay_within_width_plus_separator(text in "[a-z ]{0,200}", width in 1usize..40) {
            let wrapped = wordwrap(&text, width);
            for line in wrapped.lines() {
                prop_assert!(line.chars().count() <= width + 1, "{line:?} > {width}");
            }
        }

        #[test]
        fn words_are_preserved(words in prop::collection::vec("[a-z]{1,8}", 0..30)) {
            let text = words.join(" ");
            let wrapped = wordwrap(&text, 12);
            let back: Vec<&str> = wrapped.split_whitespace().collect();
            prop_assert_eq!(back, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
