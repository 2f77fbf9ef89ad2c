use serde_json::Value;

/// Coerce a raw score value from an evaluation payload into a number.
///
/// The conversion backend is inconsistent: scores arrive as JSON numbers,
/// as numeric strings (sometimes with a comma decimal separator), or not at
/// all. Anything that does not survive coercion is `None`; callers apply
/// the band fallback policy instead of erroring.
pub fn coerce_score(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
        }
        _ => None,
    }
}
