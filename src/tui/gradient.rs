//! Linear RGB gradients across text

use crossterm::style::{style, Stylize};

use super::theme::Rgb;

/// Blend two colors channel by channel. `t` is clamped to `[0, 1]`.
pub fn interpolate(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |x: u8, y: u8| {
        let v = f64::from(x) + (f64::from(y) - f64::from(x)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Assign a color to every character of `text`.
///
/// The text is split into `stops.len() - 1` segments of equal length; the
/// last segment also takes the remainder when the length does not divide
/// evenly. Within a segment the color moves from one stop towards the next.
pub fn apply_gradient(text: &str, stops: &[Rgb]) -> Vec<(char, Rgb)> {
    let chars: Vec<char> = text.chars().collect();

    match stops {
        [] => Vec::new(),
        [only] => chars.into_iter().map(|c| (c, *only)).collect(),
        _ => {
            let segments = stops.len() - 1;
            let len = chars.len();
            let seg_len = (len / segments).max(1);

            chars
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    let index = (i / seg_len).min(segments - 1);
                    let start = index * seg_len;
                    let span = if index == segments - 1 {
                        len - start
                    } else {
                        seg_len
                    };
                    let t = (i - start) as f64 / span as f64;
                    (c, interpolate(stops[index], stops[index + 1], t))
                })
                .collect()
        }
    }
}

/// Render `text` with a gradient. Whitespace is left unstyled but still
/// advances through the gradient, so multi-line art keeps its shape.
pub fn gradient_text(text: &str, stops: &[Rgb]) -> String {
    if stops.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() * 8);
    for (c, color) in apply_gradient(text, stops) {
        if c.is_whitespace() {
            out.push(c);
        } else {
            out.push_str(&style(c).with(color.into()).to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::strip_ansi;
    use proptest::prelude::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(RED, BLUE, 0.0), RED);
        assert_eq!(interpolate(RED, BLUE, 1.0), BLUE);
        assert_eq!(interpolate(RED, BLUE, 0.5), Rgb::new(128, 0, 128));
    }

    #[test]
    fn test_interpolate_clamps_t() {
        assert_eq!(interpolate(RED, BLUE, -3.0), RED);
        assert_eq!(interpolate(RED, BLUE, 7.5), BLUE);
        assert_eq!(interpolate(RED, BLUE, f64::NAN), RED);
    }

    #[test]
    fn test_single_stop() {
        let colors = apply_gradient("abc", &[GREEN]);
        assert!(colors.iter().all(|(_, c)| *c == GREEN));
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_two_stops() {
        let colors: Vec<Rgb> = apply_gradient("abcd", &[RED, BLUE])
            .into_iter()
            .map(|(_, c)| c)
            .collect();
        assert_eq!(colors[0], RED);
        assert_eq!(colors[2], Rgb::new(128, 0, 128));
        assert_eq!(colors[3], Rgb::new(64, 0, 191));
    }

    #[test]
    fn test_remainder_goes_to_last_segment() {
        // 5 chars over 2 segments: [0,1] then [2,3,4]
        let colors: Vec<Rgb> = apply_gradient("abcde", &[RED, GREEN, BLUE])
            .into_iter()
            .map(|(_, c)| c)
            .collect();
        assert_eq!(colors[0], RED);
        assert_eq!(colors[1], Rgb::new(128, 128, 0));
        assert_eq!(colors[2], GREEN);
        assert_eq!(colors[4], interpolate(GREEN, BLUE, 2.0 / 3.0));
    }

    #[test]
    fn test_text_shorter_than_segments() {
        let colors = apply_gradient("ab", &[RED, GREEN, BLUE, RED]);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].1, RED);
        assert_eq!(colors[1].1, GREEN);
    }

    #[test]
    fn test_multibyte_counts_once() {
        let colors = apply_gradient("\u{1f680}\u{2728}", &[RED, BLUE]);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0], ('\u{1f680}', RED));
    }

    #[test]
    fn test_gradient_text_keeps_content() {
        let art = "ab\n cd";
        assert_eq!(strip_ansi(&gradient_text(art, &[RED, BLUE])), art);
        assert_eq!(gradient_text(art, &[]), art);
    }

    fn rgb() -> impl Strategy<Value = Rgb> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    proptest! {
        #[test]
        fn interpolate_identities(a in rgb(), b in rgb(), t in 0.0f64..=1.0) {
            prop_assert_eq!(interpolate(a, a, t), a);
            prop_assert_eq!(interpolate(a, b, 0.0), a);
            prop_assert_eq!(interpolate(a, b, 1.0), b);
        }

        #[test]
        fn gradient_is_deterministic(s in ".{0,40}", stops in prop::collection::vec(rgb(), 1..5)) {
            let first = apply_gradient(&s, &stops);
            prop_assert_eq!(first.len(), s.chars().count());
            prop_assert_eq!(first, apply_gradient(&s, &stops));
        }
    }
}
