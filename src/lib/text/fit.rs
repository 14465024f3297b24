//! Module implementing the fitting of caption text within the canvas.
//!
//! Fitting decides whether a caption should be broken into two lines
//! and picks the largest font size at which every line is narrow enough.

use super::measure::TextMeasurer;


/// Outcome of fitting a single caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitResult {
    /// Chosen font size, in pixels. Always at least 1.
    pub font_size: u32,
    /// One or two lines the caption has been broken into.
    pub lines: Vec<String>,
}

impl FitResult {
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line-broken text, with lines separated by `"\n"`.
    #[inline]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}


/// Fit the caption text so that it's no wider than `max_text_width`,
/// using font size no larger than `max_font_size`.
///
/// If the text doesn't fit in a single line at `min_font_size`,
/// it is split in two (see `split`), and each of the lines gets at most
/// half of the `max_font_size`.
///
/// Text that cannot be made to fit (e.g. a single very long word)
/// is not an error; it just gets the smallest font size that's possible.
pub fn fit<M>(measurer: &M, text: &str,
              max_font_size: u32, min_font_size: u32, max_text_width: u32) -> FitResult
    where M: TextMeasurer + ?Sized
{
    let max_width = max_text_width as f32;

    let (single_line_width, _) = measurer.measure(text, min_font_size.max(1));
    let lines = if single_line_width > max_width {
        let lines = split(text);
        trace!("Text of width {} at size {} doesn't fit in {}px, split into {} line(s)",
            single_line_width, min_font_size, max_text_width, lines.len());
        lines
    } else {
        vec![text]
    };

    let ceiling = max_font_size / lines.len() as u32;
    let font_size = lines.iter()
        .map(|line| maximize_font_size(measurer, line, ceiling, max_width))
        .min()
        .unwrap_or(1);
    trace!("Font size for {:?} computed as {} (ceiling was {})", text, font_size, ceiling);

    FitResult{
        font_size,
        lines: lines.into_iter().map(String::from).collect(),
    }
}

/// Find the largest font size not exceeding `ceiling`
/// at which given line of text is no wider than `max_width`.
///
/// Returns 1 if there is no such size.
fn maximize_font_size<M>(measurer: &M, line: &str, ceiling: u32, max_width: f32) -> u32
    where M: TextMeasurer + ?Sized
{
    let fits = |size: u32| measurer.measure(line, size).0 <= max_width;
    if ceiling <= 1 {
        return 1;
    }
    if fits(ceiling) {
        return ceiling;
    }

    // Text width is monotonic in font size, so we can bisect.
    // Invariant: `hi` doesn't fit, while `lo` either fits or is 1.
    let (mut lo, mut hi) = (1, ceiling);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}


/// Split a line of text into two similarly sized pieces.
///
/// The split happens at the space closest to the middle of the text
/// (the leftmost one if there is a tie), and the space itself is dropped.
/// Spaces at the very beginning or end of the text do not count.
///
/// Texts that cannot be split are returned as the only element.
pub fn split(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let len = chars.len();
    if len < 3 {
        return vec![text];
    }

    let middle = len / 2;
    let split_at = chars[1..len - 1].iter().enumerate()
        .filter(|&(_, &(_, c))| c == ' ')
        .min_by_key(|&(i, _)| (i + 1).abs_diff(middle))
        .map(|(_, &(byte_index, _))| byte_index);

    match split_at {
        Some(i) => vec![&text[..i], &text[i + 1..]],
        None => vec![text],
    }
}
