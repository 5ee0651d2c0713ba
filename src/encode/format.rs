//! Tick label formatting and locale mapping.

use num_format::{Locale, ToFormattedString};

const SI_SYMBOLS: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Format `v` with `precision` significant digits and an SI prefix:
/// `30000 → "30k"`, `1500 → "1.5k"`, `100000 → "100k"`, `0 → "0.0"`.
///
/// Trailing zeros are kept, so every label of an axis has the same digit count.
pub fn format_si(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let p = precision.max(1);
    let sign = if v < 0.0 { "-" } else { "" };
    let (digits, exponent) = decimal_parts(v.abs(), p);
    let prefix_exp = (exponent.div_euclid(3)).clamp(-8, 8) * 3;
    let i = exponent - prefix_exp + 1;
    let n = digits.len() as i32;

    let body = if i == n {
        digits
    } else if i > n {
        format!("{digits}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (head, tail) = digits.split_at(i as usize);
        format!("{head}.{tail}")
    } else {
        // below the smallest prefix (yocto)
        let q = (p as i32 + i - 1).max(1) as usize;
        let (fine, _) = decimal_parts(v.abs(), q);
        format!("0.{}{fine}", "0".repeat((-i) as usize))
    };
    let symbol = SI_SYMBOLS[(8 + prefix_exp / 3) as usize];
    format!("{sign}{body}{symbol}")
}

/// Significant digits (no decimal point) and base-10 exponent of `v`.
fn decimal_parts(v: f64, precision: usize) -> (String, i32) {
    let s = format!("{:.*e}", precision - 1, v);
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    (mantissa.replace('.', ""), exp.parse().unwrap_or(0))
}

/// Year labels: whole numbers, no grouping.
pub fn format_year(v: f64) -> String {
    (v.round() as i64).to_string()
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Whole-number value with locale thousands separators (`45,000` / `45.000`).
pub fn format_grouped(v: f64, locale: &Locale) -> String {
    let n = v.round() as i64;
    n.to_formatted_string(locale)
}
