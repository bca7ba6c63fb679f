use minigrep::{CompileError, matches};

fn test_pattern(pattern: &str, text: &str, expected: bool) {
    let result = matches(text, pattern)
        .unwrap_or_else(|e| panic!("Failed to compile pattern '{pattern}': {e}"));
    assert_eq!(
        result, expected,
        "Pattern '{pattern}' against text '{text:?}' - expected: {expected}, got: {result}"
    );
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn test_literal_is_substring_search() {
        let cases = [
            ("a", "cat"),
            ("ell", "hello"),
            ("xyz", "xyz"),
            ("hi there", "oh hi there!"),
            ("dog", "cat"),
            ("hello", "hell"),
            ("ab", "ba"),
        ];
        for (pattern, text) in cases {
            test_pattern(pattern, text, text.contains(pattern));
        }
    }

    #[test]
    fn test_literal_with_both_anchors_is_equality() {
        test_pattern("^abc$", "abc", true);
        test_pattern("^abc$", "xabc", false);
        test_pattern("^abc$", "abcx", false);
    }

    #[test]
    fn test_empty_text() {
        test_pattern("a", "", false);
    }
}

#[cfg(test)]
mod dot_wildcard_tests {
    use super::*;

    #[test]
    fn test_dot_match() {
        test_pattern("c.t", "cat", true);
    }

    #[test]
    fn test_dot_excludes_newline() {
        test_pattern("c.t", "c\nt", false);
    }
}

#[cfg(test)]
mod quantifier_tests {
    use super::*;

    #[test]
    fn test_plus() {
        test_pattern("a+", "aaa", true);
        test_pattern("a+", "", false);
    }

    #[test]
    fn test_plus_backtracks() {
        test_pattern("a+ab", "aaab", true);
        test_pattern("^\\d+1$", "1111", true);
    }

    #[test]
    fn test_question_mark() {
        test_pattern("colou?r", "color", true);
        test_pattern("colou?r", "colour", true);
        test_pattern("^colou?r$", "colouur", false);
    }
}

#[cfg(test)]
mod class_tests {
    use super::*;

    #[test]
    fn test_negated_class() {
        test_pattern("[^xyz]", "apple", true);
        test_pattern("[^xyz]", "xyzzy", false);
    }

    #[test]
    fn test_positive_class() {
        test_pattern("[aeiou]+", "rhythm and blues", true);
        test_pattern("[aeiou]", "rhythm", false);
    }

    #[test]
    fn test_digit_and_word() {
        test_pattern("\\d", "5", true);
        test_pattern("\\w", "_", true);
        test_pattern("\\w", "%-!", false);
        test_pattern("\\d apples", "sally has 3 apples", true);
    }
}

#[cfg(test)]
mod group_tests {
    use super::*;

    #[test]
    fn test_alternation() {
        test_pattern("(cat|dog)", "cat", true);
        test_pattern("(cat|dog)", "fish", false);
        test_pattern("a (cat|dog)s", "a dogs life", true);
    }

    #[test]
    fn test_top_level_alternation() {
        test_pattern("cat|dog", "hotdog", true);
        test_pattern("cat|dog", "fish", false);
    }

    #[test]
    fn test_anchors_bind_to_whole_alternation() {
        test_pattern("^cat|dog$", "cat", true);
        test_pattern("^cat|dog$", "dog", true);
        test_pattern("^cat|dog$", "hotdog", false);
        test_pattern("^cat|dog$", "catfish", false);
    }

    #[test]
    fn test_group_plus() {
        test_pattern("(cat)+", "catcatcat", true);
        test_pattern("^(cat)+$", "catcatcat", true);
        test_pattern("(cat|dog)+$", "catdogcat", true);
        test_pattern("^(cat|dog)+$", "catdogcow", false);
    }

    #[test]
    fn test_optional_group() {
        let text = "I see 1 cat, 2 dogs and 3 cows";
        test_pattern("^I see (\\d (cat|dog|cow)s?(, | and )?)+$", text, true);
        test_pattern("^I see (\\d (cat|dog|cow)(, | and )?)+$", text, false);
    }
}

#[cfg(test)]
mod multi_line_tests {
    use super::*;

    #[test]
    fn test_any_line_matches() {
        test_pattern("^dog$", "cat\ndog\ncow\n", true);
        test_pattern("^do$", "cat\ndog\ncow\n", false);
    }
}

#[cfg(test)]
mod compile_error_tests {
    use super::*;

    #[test]
    fn test_unterminated_class() {
        assert_eq!(matches("abc", "[abc"), Err(CompileError::UnterminatedClass { pos: 0 }));
    }

    #[test]
    fn test_unterminated_group() {
        assert_eq!(matches("abc", "(abc"), Err(CompileError::UnterminatedGroup { pos: 0 }));
    }

    #[test]
    fn test_error_message() {
        let err = matches("", "ab(c|d").unwrap_err();
        assert_eq!(err.to_string(), "unterminated group opened at offset 2, expected ')'");
    }
}
