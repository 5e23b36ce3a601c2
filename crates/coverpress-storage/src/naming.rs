// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stored file names and the references handed back to callers.

use coverpress_core::{CoverText, MetadataFields, SubmissionId, sanitize};

/// Longest file name most filesystems accept, in bytes.
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Name under which a submission's PDF is stored.
///
/// Shape: `"{prefix} {subject}_{student label} {student}_{id}.pdf"`. The
/// student part is left out when no student name was given. Path separators
/// and control characters are replaced with `_` so the name always stays a
/// single path component. When the whole name would exceed
/// [`MAX_FILE_NAME_BYTES`], the student part and then the subject are cut on
/// character boundaries; the id and extension are always kept.
pub fn document_file_name(text: &CoverText, fields: &MetadataFields, id: &SubmissionId) -> String {
    let head = safe(&format!("{} ", text.file_name_prefix));
    let tail = format!("_{}.pdf", id.simple());
    let subject = safe(&sanitize(fields.subject_name()));
    let student = fields.student_name();
    let student_part = if student.is_empty() {
        String::new()
    } else {
        safe(&format!("_{} {}", text.file_name_student_label, student))
    };

    let budget = MAX_FILE_NAME_BYTES.saturating_sub(head.len() + tail.len());
    let (subject, student_part) = if subject.len() + student_part.len() <= budget {
        (subject.as_str(), student_part.as_str())
    } else {
        let student_cap = budget.saturating_sub(subject.len()).max(budget / 2);
        let student_part = truncate_bytes(&student_part, student_cap);
        let subject = truncate_bytes(&subject, budget - student_part.len());
        (subject, student_part)
    };

    format!("{head}{subject}{student_part}{tail}")
}

fn safe(part: &str) -> String {
    part.chars()
        .map(|c| if is_unsafe(c) { '_' } else { c })
        .collect()
}

fn is_unsafe(c: char) -> bool {
    matches!(c, '/' | '\\') || c.is_control()
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
fn truncate_bytes(s: &str, max: usize) -> &str {
    let mut end = max.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Percent-encode `name` for use as the last segment of a URL.
///
/// Unreserved ASCII (`A-Z a-z 0-9 - . _ ~`) is kept; every other byte of the
/// UTF-8 encoding becomes `%XX`.
pub fn percent_encode(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
