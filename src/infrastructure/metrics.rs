//! Text measurement and wrapping for PDF export.
//!
//! Widths come from the standard Helvetica AFM table, in thousandths of an em,
//! covering ASCII 0x20..=0x7E. Index = (char as usize) - 32.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Measures rendered text width in millimetres.
pub trait TextMeasure {
    fn width_mm(&self, text: &str) -> f32;
}

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
      556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?     @
      278, 278, 584, 584, 584, 556, 1015,
    // A-Z
      667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
      722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
      278, 278, 278, 469, 556, 333,
    // a-z
      556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
      556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
      334, 260, 334, 584,
];

const HELVETICA_FALLBACK_WIDTH: u16 = 556;

/// Built-in Helvetica at a fixed point size.
#[derive(Debug, Clone, Copy)]
pub struct HelveticaMetrics {
    pub font_size_pt: f32,
}

impl HelveticaMetrics {
    pub fn new(font_size_pt: f32) -> Self {
        Self { font_size_pt }
    }

    fn char_width(c: char) -> u16 {
        let c = fold_latin1(c);
        let code = c as usize;
        if (32..=126).contains(&code) {
            HELVETICA_WIDTHS[code - 32]
        } else {
            HELVETICA_FALLBACK_WIDTH
        }
    }
}

impl TextMeasure for HelveticaMetrics {
    fn width_mm(&self, text: &str) -> f32 {
        let em: f32 = text
            .chars()
            .map(|c| f32::from(Self::char_width(c)) / 1000.0)
            .sum();
        em * self.font_size_pt * MM_PER_PT
    }
}

/// Maps accented Latin-1 letters to their base letter, which shares its
/// advance width in Helvetica.
fn fold_latin1(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => c,
    }
}

/// Greedy word wrap of a single line to `max_width_mm`.
///
/// Words are separated on single spaces. A word wider than the line is broken
/// between characters. An empty line yields one empty piece.
pub fn split_text_to_size(text: &str, max_width_mm: f32, measure: &dyn TextMeasure) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current: Option<String> = None;

    for word in text.split(' ') {
        if let Some(line) = current.as_mut() {
            let candidate = format!("{line} {word}");
            if measure.width_mm(&candidate) <= max_width_mm {
                *line = candidate;
                continue;
            }
            pieces.push(std::mem::take(line));
        }
        current = Some(break_long_word(word, max_width_mm, measure, &mut pieces));
    }

    pieces.extend(current);
    pieces
}

/// Pushes full-width chunks of `word` into `pieces` and returns the remainder.
fn break_long_word(
    word: &str,
    max_width_mm: f32,
    measure: &dyn TextMeasure,
    pieces: &mut Vec<String>,
) -> String {
    if measure.width_mm(word) <= max_width_mm {
        return word.to_string();
    }

    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if chunk.chars().count() > 1 && measure.width_mm(&chunk) > max_width_mm {
            chunk.pop();
            pieces.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    chunk
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Every character is 1 mm wide.
    pub(crate) struct Monospace;

    impl TextMeasure for Monospace {
        fn width_mm(&self, text: &str) -> f32 {
            text.chars().count() as f32
        }
    }

    #[test]
    fn test_helvetica_widths() {
        let metrics = HelveticaMetrics::new(1.0 / MM_PER_PT);
        // At this size one em is 1 mm.
        assert!((metrics.width_mm("a") - 0.556).abs() < 1e-4);
        assert!((metrics.width_mm("W") - 0.944).abs() < 1e-4);
        assert!((metrics.width_mm("ê") - metrics.width_mm("e")).abs() < 1e-6);
        assert!((metrics.width_mm("\u{4e2d}") - 0.556).abs() < 1e-4);
    }

    #[test]
    fn test_helvetica_scales_with_font_size() {
        let small = HelveticaMetrics::new(6.0);
        let large = HelveticaMetrics::new(12.0);
        let text = "Dear Hiring Team at Acme,";
        assert!((large.width_mm(text) - 2.0 * small.width_mm(text)).abs() < 1e-3);
    }

    #[test]
    fn test_split_short_line_is_untouched() {
        assert_eq!(split_text_to_size("hello world", 20.0, &Monospace), vec!["hello world"]);
    }

    #[test]
    fn test_split_empty_line_yields_one_piece() {
        assert_eq!(split_text_to_size("", 20.0, &Monospace), vec![String::new()]);
    }

    #[test]
    fn test_split_wraps_on_spaces() {
        let pieces = split_text_to_size("the quick brown fox jumps", 10.0, &Monospace);
        assert_eq!(pieces, vec!["the quick", "brown fox", "jumps"]);
        assert!(pieces.iter().all(|p| Monospace.width_mm(p) <= 10.0));
    }

    #[test]
    fn test_split_breaks_long_words() {
        let pieces = split_text_to_size("ab https://github.com/ana", 8.0, &Monospace);
        assert_eq!(pieces, vec!["ab", "https://", "github.c", "om/ana"]);
    }

    #[test]
    fn test_split_preserves_all_text() {
        let text = "Fiquei impressionado com a missão da Acme e gostaria de contribuir para a vossa equipa.";
        let pieces = split_text_to_size(text, 60.0, &HelveticaMetrics::new(12.0));
        assert!(pieces.len() > 1);
        assert_eq!(pieces.join(" "), text);
    }
}
