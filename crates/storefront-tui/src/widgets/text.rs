//! Display-layer text truncation helpers
//!
//! Truncation never mutates the underlying data; it only shapes what a
//! widget draws into its area.

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to fit `width` display cells on one line, appending an
/// ellipsis when anything was cut
pub fn truncate_line(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap `text` into at most `max_lines` lines of `width` cells,
/// truncating the final line with an ellipsis if text remains
pub fn wrap_truncated(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().filter_map(|c| c.width()).sum();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if lines.len() == max_lines {
            break;
        }
        // A single word longer than the line gets hard-truncated
        if word_width > width {
            lines.push(truncate_line(word, width));
            if lines.len() == max_lines {
                break;
            }
        } else {
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
    }

    // Mark the cut when the text did not fit entirely
    let joined: String = lines.join(" ");
    if joined.chars().count() < text.split_whitespace().collect::<Vec<_>>().join(" ").chars().count()
    {
        if let Some(last) = lines.last_mut() {
            *last = truncate_line(&format!("{last}…"), width);
        }
    }

    lines
}
