//! Value formatting.
//!
//! Display strings always truncate toward negative infinity, never round:
//! a 12.99% crit rate shows as `12.9%`, an ATK of 42.9 shows as `42`.
//! Whether a value renders as a percentage is decided solely by the
//! `percent` flag of its property record.

/// Highest placeholder index recognised by [`expand_template`].
const MAX_PLACEHOLDER: usize = 10;

/// Highest fractional digit count recognised by `[f{d}]` placeholders.
const MAX_FRACTION_DIGITS: usize = 4;

/// Render a stat value for display.
///
/// Percent values are multiplied by 100 and truncated to one decimal;
/// everything else is truncated to an integer.
///
/// # Examples
///
/// ```rust
/// use railstat::format::format_value;
///
/// assert_eq!(format_value(0.1299, true), "12.9%");
/// assert_eq!(format_value(42.9, false), "42");
/// assert_eq!(format_value(0.5, true), "50.0%");
/// ```
pub fn format_value(value: f64, percent: bool) -> String {
    if percent {
        format!("{:.1}%", (value * 1000.0).floor() / 10.0)
    } else {
        format!("{}", value.floor() as i64)
    }
}

/// How a placeholder renders its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    /// `[i]`: truncated integer.
    Integer,
    /// `[f{d}]`: fixed number of fractional digits.
    Fixed(usize),
}

impl Placeholder {
    fn render(self, value: f64, percent: bool) -> String {
        let value = if percent { value * 100.0 } else { value };
        let mut out = match self {
            Placeholder::Integer => format!("{}", value.floor() as i64),
            Placeholder::Fixed(digits) => format!("{:.*}", digits, value),
        };
        if percent {
            out.push('%');
        }
        out
    }
}

/// Try to parse a placeholder starting at `bytes[0] == b'#'`.
///
/// Returns `(parameter index, placeholder, percent, consumed bytes)`.
fn parse_placeholder(bytes: &[u8]) -> Option<(usize, Placeholder, bool, usize)> {
    let mut pos = 1;
    let digits_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    // at most "10"
    if pos == digits_start || pos - digits_start > 2 {
        return None;
    }
    let index: usize = std::str::from_utf8(&bytes[digits_start..pos]).ok()?.parse().ok()?;
    if !(1..=MAX_PLACEHOLDER).contains(&index) {
        return None;
    }

    if bytes.get(pos) != Some(&b'[') {
        return None;
    }
    pos += 1;
    let placeholder = match *bytes.get(pos)? {
        b'i' => {
            pos += 1;
            Placeholder::Integer
        }
        b'f' => {
            let digit = *bytes.get(pos + 1)?;
            if !digit.is_ascii_digit() {
                return None;
            }
            let digits = usize::from(digit - b'0');
            if !(1..=MAX_FRACTION_DIGITS).contains(&digits) {
                return None;
            }
            pos += 2;
            Placeholder::Fixed(digits)
        }
        _ => return None,
    };
    if bytes.get(pos) != Some(&b']') {
        return None;
    }
    pos += 1;

    let percent = bytes.get(pos) == Some(&b'%');
    if percent {
        pos += 1;
    }
    Some((index, placeholder, percent, pos))
}

/// Expand `#n[i]`, `#n[i]%`, `#n[f{d}]` and `#n[f{d}]%` placeholders.
///
/// `#n` refers to `params[n - 1]` for `n` in `1..=10`, and `d` is in
/// `1..=4`. The `%` forms multiply by 100 before rendering and keep the
/// `%` sign. Placeholders pointing past the end of `params` are left as
/// they are. The template is scanned once, so substituted text is never
/// re-expanded.
///
/// # Examples
///
/// ```rust
/// use railstat::format::expand_template;
///
/// assert_eq!(expand_template("#1[i]%", &[0.28]), "28%");
/// assert_eq!(
///     expand_template("Deals #1[f1]% ATK, heals #2[i] HP", &[0.5, 120.7]),
///     "Deals 50.0% ATK, heals 120 HP"
/// );
/// assert_eq!(expand_template("#2[i] stays", &[1.0]), "#2[i] stays");
/// ```
pub fn expand_template(template: &str, params: &[f64]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('#') {
        let start = pos + offset;
        match parse_placeholder(&bytes[start..]) {
            Some((index, placeholder, percent, len)) if index <= params.len() => {
                out.push_str(&template[copied..start]);
                out.push_str(&placeholder.render(params[index - 1], percent));
                pos = start + len;
                copied = pos;
            }
            _ => pos = start + 1,
        }
    }
    out.push_str(&template[copied..]);
    out
}
