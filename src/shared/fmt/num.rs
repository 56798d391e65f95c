//! Number formatting for chart labels.
//!
//! Crosshair readouts always show two decimals; axis ticks trim trailing zeros
//! and group thousands.

/// Crosshair price readout: fixed two decimals, no grouping.
pub fn price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Axis tick label with `decimals` places, trailing zeros trimmed and
/// thousands grouped with commas.
pub fn tick(value: f64, decimals: usize) -> String {
    group_thousands(trim_zeros(format!("{:.1$}", value, decimals)))
}

fn trim_zeros(formatted: String) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn group_thousands(formatted: String) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
