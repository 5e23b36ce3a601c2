// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Minimal right-to-left reordering for single-line labels.
//
// The glyph rasteriser draws characters left to right in string order. For a
// line whose first strong character is Arabic or Hebrew we reorder the string
// into visual order: directional runs are laid out right to left and the
// characters of right-to-left runs are reversed. Left-to-right runs (Latin
// names, digits) keep their internal order. No contextual shaping is done.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Strong(Direction),
    /// Digits: drawn left to right but never decide the line direction.
    Number,
    Neutral,
}

fn is_rtl(c: char) -> bool {
    let cp = c as u32;
    // Arabic-Indic digits behave like numbers, not letters.
    if (0x0660..=0x0669).contains(&cp) || (0x06F0..=0x06F9).contains(&cp) {
        return false;
    }
    matches!(
        cp,
        0x0590..=0x08FF | 0xFB1D..=0xFDFF | 0xFE70..=0xFEFF
    )
}

fn classify(c: char) -> Class {
    if is_rtl(c) {
        Class::Strong(Direction::Rtl)
    } else if c.is_numeric() {
        Class::Number
    } else if c.is_alphabetic() {
        Class::Strong(Direction::Ltr)
    } else {
        Class::Neutral
    }
}

/// Direction of the first strong character, left-to-right if there is none.
pub fn base_direction(text: &str) -> Direction {
    text.chars()
        .find_map(|c| match classify(c) {
            Class::Strong(dir) => Some(dir),
            Class::Number | Class::Neutral => None,
        })
        .unwrap_or(Direction::Ltr)
}

fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        other => other,
    }
}

/// Resolve every character to a direction. Neutrals between two runs of the
/// same direction take that direction; all other neutrals take `base`.
fn resolve(chars: &[char], base: Direction) -> Vec<Direction> {
    let classes: Vec<Class> = chars.iter().copied().map(classify).collect();
    let direction_of = |class: &Class| match class {
        Class::Strong(dir) => Some(*dir),
        Class::Number => Some(Direction::Ltr),
        Class::Neutral => None,
    };

    let mut prev_strong = Vec::with_capacity(classes.len());
    let mut last = None;
    for class in &classes {
        if let Some(dir) = direction_of(class) {
            last = Some(dir);
        }
        prev_strong.push(last);
    }

    let mut next_strong = vec![None; classes.len()];
    let mut next = None;
    for (i, class) in classes.iter().enumerate().rev() {
        if let Some(dir) = direction_of(class) {
            next = Some(dir);
        }
        next_strong[i] = next;
    }

    classes
        .iter()
        .enumerate()
        .map(|(i, class)| match class {
            Class::Strong(dir) => *dir,
            Class::Number => Direction::Ltr,
            Class::Neutral => match (prev_strong[i], next_strong[i]) {
                (Some(a), Some(b)) if a == b => a,
                _ => base,
            },
        })
        .collect()
}

/// Reorder `text` from logical to visual (left-to-right drawing) order.
pub fn visual_order(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let base = base_direction(text);
    let dirs = resolve(&chars, base);

    // Group into directional runs.
    let mut runs: Vec<(Direction, Vec<char>)> = Vec::new();
    for (c, dir) in chars.into_iter().zip(dirs) {
        match runs.last_mut() {
            Some((run_dir, run)) if *run_dir == dir => run.push(c),
            _ => runs.push((dir, vec![c])),
        }
    }

    if base == Direction::Rtl {
        runs.reverse();
    }

    let mut out = String::with_capacity(text.len());
    for (dir, run) in runs {
        match dir {
            Direction::Ltr => out.extend(run),
            Direction::Rtl => out.extend(run.into_iter().rev().map(mirror)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_is_unchanged() {
        assert_eq!(visual_order("Math 101 (A)"), "Math 101 (A)");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(visual_order(""), "");
        assert_eq!(base_direction("  : "), Direction::Ltr);
    }

    #[test]
    fn pure_rtl_is_reversed() {
        assert_eq!(visual_order("اسم"), "مسا");
    }

    #[test]
    fn label_sits_right_of_latin_value() {
        // Logical: label, colon, space, value. Visual: value first, then the
        // reversed label with its colon on the left.
        assert_eq!(visual_order("اسم: Ali"), "Ali :مسا");
    }

    #[test]
    fn trailing_number_moves_left() {
        assert_eq!(visual_order("الفصل 1242"), "1242 لصفلا");
    }

    #[test]
    fn rtl_value_after_rtl_label_keeps_word_order() {
        // Both runs are RTL, so the whole line reverses as one.
        assert_eq!(visual_order("اسم: علي"), "يلع :مسا");
    }

    #[test]
    fn brackets_are_mirrored_inside_rtl_runs() {
        assert_eq!(visual_order("(اسم)"), "(مسا)");
    }

    #[test]
    fn base_direction_uses_first_strong_char() {
        assert_eq!(base_direction("2024 اسم"), Direction::Rtl);
        assert_eq!(base_direction("Ali اسم"), Direction::Ltr);
    }
}
