//! Formatting utilities used for CLI output and the storage file.

use unicode_width::UnicodeWidthStr;

/// Default decimal text form of a duration in hours.
///
/// Whole numbers keep a trailing `.0` (`2.0`, not `2`) so files written by
/// older versions and by this one look the same.
pub fn hours_text(hours: f64) -> String {
    format!("{:?}", hours)
}

/// Two-decimal text of `value`, rounding half away from zero on its shortest
/// decimal form: `0.125` gives `0.13` and `1.005` gives `1.01`.
pub fn two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    // Display never uses exponent notation for f64.
    let text = format!("{}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    digits.push(frac.next().unwrap_or(0));
    digits.push(frac.next().unwrap_or(0));

    if frac.next().is_some_and(|d| d >= 5) {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let int_text: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_text: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();

    let negative = value < 0.0 && digits.iter().any(|&d| d != 0);
    format!("{}{}.{}", if negative { "-" } else { "" }, int_text, frac_text)
}

/// Pad on the right up to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Pad on the left up to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}
