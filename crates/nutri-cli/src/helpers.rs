//! Input parsing and error hints shared by command handlers.

use nutri_core::{NutriError, ReferenceTable};

const UNIT_SUFFIXES: &[&str] = &["pcs", "pc", "ml", "g"];

/// Parse a quantity token such as `150`, `150g`, `250ml`, or `2pc`.
///
/// Returns `None` when the token does not look like a number at all. Values
/// that parse but are not positive are returned as-is; the ledger rejects them.
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim();
    let starts_numeric = token
        .chars()
        .next()
        .map(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        .unwrap_or(false);
    if !starts_numeric {
        return None;
    }

    let lower = token.to_ascii_lowercase();
    let number = UNIT_SUFFIXES
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix))
        .unwrap_or(lower.as_str());
    number.trim().parse::<f64>().ok()
}

/// Parse a `NAME` or `NAME:QUANTITY` entry argument.
///
/// # Errors
///
/// Returns `NutriError::InvalidQuantity` when a quantity follows the colon but
/// is not numeric.
pub fn parse_entry_spec(spec: &str) -> Result<(String, Option<f64>), NutriError> {
    match spec.rsplit_once(':') {
        Some((name, quantity)) => {
            let value = parse_quantity(quantity)
                .ok_or_else(|| NutriError::InvalidQuantity(quantity.trim().to_string()))?;
            Ok((name.to_string(), Some(value)))
        }
        None => Ok((spec.to_string(), None)),
    }
}

/// Split session `add` arguments into a food name and optional quantity.
///
/// The last token is the quantity when it is numeric and at least one name
/// token precedes it. A unit may follow as its own token (`rice 150 g`).
pub fn split_name_and_quantity(args: &str) -> (String, Option<f64>) {
    let args = args.trim();
    let body = match args.rsplit_once(char::is_whitespace) {
        Some((rest, unit)) if UNIT_SUFFIXES.contains(&unit.to_ascii_lowercase().as_str()) => {
            rest.trim_end()
        }
        _ => args,
    };

    if let Some((name, last)) = body.rsplit_once(char::is_whitespace) {
        if let Some(quantity) = parse_quantity(last) {
            return (name.trim().to_string(), Some(quantity));
        }
    }
    (args.to_string(), None)
}

/// A follow-up suggestion for a ledger error.
pub fn error_hint(err: &NutriError, reference: &ReferenceTable) -> Option<String> {
    match err {
        NutriError::FoodNotFound { .. } => Some(format!(
            "Try: {} (or --mode lenient)",
            reference.names().join(", ")
        )),
        NutriError::EmptyName => Some("Enter a food name, e.g. apple, chicken, salad".to_string()),
        NutriError::InvalidQuantity(_) => Some(
            "Quantity is grams, millilitres, or pieces and must be a positive number".to_string(),
        ),
        NutriError::InvalidConfig(_) => {
            Some("Run `nutri config show` to inspect settings".to_string())
        }
        NutriError::InvalidReference(_) => None,
    }
}
