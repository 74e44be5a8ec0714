//! Team color rendering for terminal output.
//!
//! # Responsibility
//! - Map a team's hex color to the closest colored-circle emoji.
//!
//! # Invariants
//! - Known preset colors map exactly; anything else falls back to the
//!   nearest entry by squared RGB distance.

const EMOJI_MAP: &[(&str, &str, [i64; 3])] = &[
    ("\u{1f535}", "#1a73e8", [26, 115, 232]),  // blue
    ("\u{1f534}", "#d93025", [217, 48, 37]),   // red
    ("\u{1f7e3}", "#e91e8c", [233, 30, 140]),  // purple
    ("\u{1f7e2}", "#1e8e3e", [30, 142, 62]),   // green
    ("\u{1f7e1}", "#f9ab00", [249, 171, 0]),   // yellow
    ("\u{26aa}", "#ffffff", [255, 255, 255]),  // white
    ("\u{1f7e0}", "#ff6d00", [255, 109, 0]),   // orange
    ("\u{26ab}", "#000000", [0, 0, 0]),        // black
    ("\u{1f7e4}", "#795548", [121, 85, 72]),   // brown
];

/// Picks the display emoji for a `#rrggbb` color.
pub fn color_to_emoji(hex: &str) -> &'static str {
    if let Some((emoji, _, _)) = EMOJI_MAP
        .iter()
        .find(|(_, known, _)| known.eq_ignore_ascii_case(hex))
    {
        return emoji;
    }

    let Some([r, g, b]) = parse_hex(hex) else {
        return EMOJI_MAP[0].0;
    };
    EMOJI_MAP
        .iter()
        .min_by_key(|(_, _, [er, eg, eb])| {
            (r - er).pow(2) + (g - eg).pow(2) + (b - eb).pow(2)
        })
        .map(|(emoji, _, _)| *emoji)
        .unwrap_or(EMOJI_MAP[0].0)
}

fn parse_hex(hex: &str) -> Option<[i64; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        i64::from_str_radix(digits.get(range)?, 16).ok()
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
