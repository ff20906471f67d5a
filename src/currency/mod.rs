//! Amount formatting for schedule output.

/// Separators used when rendering numbers for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl NumberStyle {
    /// Picks separators from a BCP 47 language tag; unknown tags use `1,234.56`.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(style: &NumberStyle, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, style.grouping_separator);
    if let Some(fraction) = fraction {
        rendered.push(style.decimal_separator);
        rendered.push_str(fraction);
    }
    if value < 0.0 {
        rendered.insert(0, '-');
    }
    rendered
}

/// Renders `amount` with the currency code prefix, e.g. `PHP 15,000.00`.
pub fn format_amount(style: &NumberStyle, amount: f64, code: &str) -> String {
    format!(
        "{} {}",
        code,
        format_number(style, amount, minor_units_for(code))
    )
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
