//! Derived-total calculation for service orders.
//!
//! # Responsibility
//! - Parse operator-entered monetary text leniently.
//! - Compute the order total from estimate, parts and labor.
//!
//! # Invariants
//! - Parsing is total: every possible string maps to a number, with 0.0 as
//!   the fallback. Leniency here is the contract, not an accident; callers
//!   must never see an error for malformed money text.
//! - A zero estimate is the sentinel meaning "charge parts + labor".
//! - Totals are rounded to 2 decimals, half away from zero.

/// Parses monetary text into a number, never failing.
///
/// Accepts either a comma or a dot as the decimal separator. Blank,
/// unparseable or non-finite input (`NaN`, `inf`, overflowing exponents)
/// yields `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Computes an order's total charge.
///
/// A technician either quotes a flat estimate or leaves it at zero to let
/// the itemized parts + labor sum apply.
pub fn compute_total(estimate: &str, parts_cost: &str, labor_cost: &str) -> f64 {
    let estimate = parse_amount(estimate);
    let total = if estimate == 0.0 {
        parse_amount(parts_cost) + parse_amount(labor_cost)
    } else {
        estimate
    };
    round_currency(total)
}

fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{compute_total, parse_amount};

    #[test]
    fn parse_amount_accepts_comma_and_dot_decimals() {
        assert_eq!(parse_amount("150,00"), 150.0);
        assert_eq!(parse_amount("150.25"), 150.25);
        assert_eq!(parse_amount(" 80,5 "), 80.5);
    }

    #[test]
    fn parse_amount_never_fails() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12,34,56"), 0.0);
        assert_eq!(parse_amount("R$ 100"), 0.0);
        assert_eq!(parse_amount("-42,5"), -42.5);
    }

    #[test]
    fn parse_amount_rejects_non_finite_values() {
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("1e309"), 0.0);
    }

    #[test]
    fn zero_estimate_sums_parts_and_labor() {
        assert_eq!(compute_total("", "150,00", "80,00"), 230.0);
        assert_eq!(compute_total("0", "150,00", "80,00"), 230.0);
        assert_eq!(compute_total("garbage", "150,00", "80,00"), 230.0);
    }

    #[test]
    fn nonzero_estimate_overrides_itemized_sum() {
        assert_eq!(compute_total("300", "150,00", "80,00"), 300.0);
        assert_eq!(compute_total("99,90", "1", "1"), 99.9);
    }

    #[test]
    fn totals_round_to_two_decimals() {
        assert_eq!(compute_total("", "0.005", "0"), 0.01);
        assert_eq!(compute_total("10.004", "", ""), 10.0);
        assert_eq!(compute_total("", "33,335", "0"), 33.34);
    }

    #[test]
    fn compute_total_is_finite_for_arbitrary_text() {
        let weird = ["", "NaN-ish", "1e309", "-0,0", "0x10", "١٢٣", "\u{0}"];
        for estimate in weird {
            for parts in weird {
                let total = compute_total(estimate, parts, "1");
                assert!(total.is_finite(), "estimate={estimate:?} parts={parts:?}");
            }
        }
    }
}
