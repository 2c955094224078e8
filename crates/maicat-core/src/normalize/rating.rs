/// Parse a difficulty label like `"13"` or `"13+"` to a numeric rating.
///
/// Everything except ASCII digits and the decimal point is stripped
/// before the numeric parse; a `+` anywhere in the original label adds
/// `plus_step` to the base value. Returns `None` when the label carries
/// no rating at all - absence, not zero, so callers can skip the tier.
pub fn parse_level_value(label: &str, plus_step: f64) -> Option<f64> {
    let digits: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    let base: f64 = digits.parse().ok()?;
    Some(if label.contains('+') {
        base + plus_step
    } else {
        base
    })
}
