#[doc = "Rounds `value` to `places` decimal places; exact ties go to the even digit"]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor: f64 = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[doc = r#"
    Formats a number with `,` thousands separators and a fixed number of decimals.

    # Examples
    ```ignore
    assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
    assert_eq!(format_thousands(-1500.0, 0), "-1,500");
    ```
"#]
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted: String = format!("{:.*}", decimals, value.abs());

    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped: String = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);

    /* "-0" and "-0.00" collapse to zero */
    let is_negative: bool = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    if is_negative {
        grouped.push('-');
    }

    let digits: usize = int_part.len();
    for (idx, c) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    grouped
}

#[doc = "`$` followed by the thousands-separated amount"]
pub fn format_currency(value: f64, decimals: usize) -> String {
    format!("${}", format_thousands(value, decimals))
}
