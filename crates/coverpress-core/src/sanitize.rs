// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text sanitizer for values placed on the cover page.

/// Remove every `(` and `)` from `text`.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Like [`sanitize`], but keeps an absent value absent.
pub fn sanitize_opt(text: Option<&str>) -> Option<String> {
    text.map(sanitize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parentheses() {
        assert_eq!(sanitize("Math (101)"), "Math 101");
    }

    #[test]
    fn empty_is_identity() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn absent_stays_absent() {
        assert_eq!(sanitize_opt(None), None);
        assert_eq!(sanitize_opt(Some("(a)")), Some("a".to_string()));
    }

    #[test]
    fn keeps_other_brackets_and_rtl_text() {
        assert_eq!(sanitize("[x] {y} ((z))"), "[x] {y} z");
        assert_eq!(sanitize("برمجة (1)"), "برمجة 1");
    }

    #[test]
    fn idempotent() {
        let once = sanitize("a(b)c)(");
        assert_eq!(sanitize(&once), once);
    }
}
