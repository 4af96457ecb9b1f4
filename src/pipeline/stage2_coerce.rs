use crate::model::row::CellValue;

/// Total numeric coercion for source cells.
///
/// Missing or empty cells, NaN, and text that is not a decimal number after
/// removing `$` and `,` all read as 0. The only non-decimal text accepted is
/// `Infinity` with an optional sign. This never fails and never reports.
pub fn coerce_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Missing => 0.0,
        CellValue::Number(n) => {
            if n.is_nan() {
                0.0
            } else {
                *n
            }
        }
        CellValue::Text(text) => coerce_text(text),
    }
}

fn coerce_text(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }
    let unsigned = cleaned.strip_prefix(['+', '-']).unwrap_or(cleaned);
    if unsigned != "Infinity" && !is_decimal_literal(unsigned) {
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => 0.0,
    }
}

/// Digits with an optional point and exponent. Rejects `inf`, `nan` and hex spellings.
fn is_decimal_literal(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_coerce.rs"]
mod tests;
