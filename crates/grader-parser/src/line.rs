//! Single-line tokenizer: `[#]key: value` into a typed field.

/// Values meaning "intentionally absent" for `figure` and `options`.
///
/// Matched case-insensitively for the ASCII token. The second token is the
/// two-character literal the upstream prompt format uses.
pub const NONE_SENTINELS: [&str; 2] = ["none", "없음"];

/// One recognized `key: value` pair. Values are trimmed but otherwise verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field<'a> {
    TestName(&'a str),
    Type(&'a str),
    Number(&'a str),
    Content(&'a str),
    Figure(&'a str),
    Options(&'a str),
    CorrectAnswer(&'a str),
    SelectedAnswer(&'a str),
    Unknown,
}

impl Field<'_> {
    /// Key name as written in the input grammar.
    pub(crate) const fn key(&self) -> &'static str {
        match self {
            Self::TestName(_) => "test_name",
            Self::Type(_) => "type",
            Self::Number(_) => "number",
            Self::Content(_) => "content",
            Self::Figure(_) => "figure",
            Self::Options(_) => "options",
            Self::CorrectAnswer(_) => "correct_answer",
            Self::SelectedAnswer(_) => "selected_answer",
            Self::Unknown => "unknown",
        }
    }
}

/// Tokenize one raw line.
///
/// Returns `None` for blank lines and lines without a `:` separator. One
/// leading `#` is stripped, the key is matched case-insensitively, and the
/// value is everything after the first `:` (so it may contain more colons).
pub(crate) fn read_line(raw: &str) -> Option<Field<'_>> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    let line = line.strip_prefix('#').unwrap_or(line);
    let (key, value) = line.split_once(':')?;
    let value = value.trim();

    let field = match key.trim().to_lowercase().as_str() {
        "test_name" => Field::TestName(value),
        "type" => Field::Type(value),
        "number" => Field::Number(value),
        "content" => Field::Content(value),
        "figure" => Field::Figure(value),
        "options" => Field::Options(value),
        "correct_answer" => Field::CorrectAnswer(value),
        "selected_answer" => Field::SelectedAnswer(value),
        _ => Field::Unknown,
    };
    Some(field)
}

/// Whether a trimmed value stands for "no value".
#[must_use]
pub fn is_none_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || NONE_SENTINELS
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

/// Map a sentinel-aware optional field.
pub(crate) fn optional_value(value: &str) -> Option<String> {
    (!is_none_sentinel(value)).then(|| value.to_string())
}

/// Map an answer field: verbatim, only blank means absent.
pub(crate) fn answer_value(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#type: essay", Some(Field::Type("essay")))]
    #[case("type: essay", Some(Field::Type("essay")))]
    #[case("  #TYPE :  essay  ", Some(Field::Type("essay")))]
    #[case("#Test_Name: Math: Chapter 2", Some(Field::TestName("Math: Chapter 2")))]
    #[case("#content: ratio is 1:2", Some(Field::Content("ratio is 1:2")))]
    #[case("#figure:", Some(Field::Figure("")))]
    #[case("#difficulty: hard", Some(Field::Unknown))]
    #[case("##type: essay", Some(Field::Unknown))]
    #[case("no separator here", None)]
    #[case("   ", None)]
    fn tokenizes_lines(#[case] raw: &str, #[case] expected: Option<Field<'_>>) {
        assert_eq!(read_line(raw), expected);
    }

    #[test]
    fn value_case_is_preserved() {
        assert_eq!(
            read_line("#CONTENT: What Is X?"),
            Some(Field::Content("What Is X?"))
        );
    }

    #[rstest]
    #[case("none", true)]
    #[case("None", true)]
    #[case(" NONE ", true)]
    #[case("없음", true)]
    #[case("", true)]
    #[case("nothing", false)]
    #[case("none of the above", false)]
    fn recognizes_sentinels(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_none_sentinel(value), expected);
    }

    #[test]
    fn answers_keep_sentinel_text() {
        assert_eq!(answer_value("none"), Some("none".to_string()));
        assert_eq!(answer_value("  "), None);
        assert_eq!(optional_value("none"), None);
        assert_eq!(optional_value("A)3 B)4"), Some("A)3 B)4".to_string()));
    }
}
