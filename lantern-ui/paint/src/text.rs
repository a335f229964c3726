/// Glyphs appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Width measurement for a single line of text.
pub trait TextMeasure {
    /// Return the rendered width of `text` in logical pixels.
    fn width(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Greedy word wrap of `text` into at most `max_lines` lines no wider than
/// `max_width`.
///
/// Words are separated by spaces. When more words remain after the last
/// allowed line, that line is ended with [`ELLIPSIS`]. A single word wider
/// than `max_width` occupies its own line and is truncated. Empty text
/// yields one empty line and text that already fits is returned unchanged,
/// so wrapping any returned line again is a no-op.
pub fn wrap<M>(
    text: &str,
    max_width: f32,
    measure: &M,
    max_lines: usize,
) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let max_lines = max_lines.max(1);
    if text.is_empty() {
        return vec![String::new()];
    }
    if measure.width(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::with_capacity(max_lines);
    let mut current = String::new();
    let mut overflowed = false;

    for word in text.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure.width(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        lines.push(std::mem::replace(&mut current, word.to_string()));
        if lines.len() == max_lines {
            overflowed = true;
            break;
        }
    }

    if !overflowed && !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        // Text made only of spaces.
        return vec![truncate(text, max_width, measure)];
    }

    if overflowed {
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, max_width, measure);
        }
    }

    lines
        .into_iter()
        .map(|line| truncate(&line, max_width, measure))
        .collect()
}

/// Shorten `text` to fit `max_width`, ending it with [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. When not even the ellipsis
/// fits, the ellipsis alone is returned.
pub fn truncate<M>(text: &str, max_width: f32, measure: &M) -> String
where
    M: TextMeasure + ?Sized,
{
    if text.is_empty() || measure.width(text) <= max_width {
        return text.to_string();
    }
    with_ellipsis(text, max_width, measure)
}

/// Right-trim `text` one character at a time until it fits together with
/// the ellipsis.
fn with_ellipsis<M>(text: &str, max_width: f32, measure: &M) -> String
where
    M: TextMeasure + ?Sized,
{
    let base = text.trim_end();
    let mut end = base.len();

    loop {
        let prefix = base[..end].trim_end();
        let candidate = format!("{prefix}{ELLIPSIS}");
        if prefix.is_empty() || measure.width(&candidate) <= max_width {
            return candidate;
        }

        end = match base[..end].char_indices().next_back() {
            Some((index, _)) => index,
            None => return ELLIPSIS.to_string(),
        };
    }
}
