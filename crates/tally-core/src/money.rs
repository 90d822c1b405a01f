//! Conversion between human decimal amounts and minor currency units
//!
//! All amounts are stored as signed integer minor units (e.g. cents) to
//! avoid floating-point drift. Floats only appear at the input/output
//! boundary where humans type decimal amounts.

/// Convert a decimal amount to minor units.
///
/// Rounds to the nearest minor unit rather than truncating, so a minor
/// unit is never lost on negative fractional inputs (`-0.01` maps to `-1`,
/// not `0`).
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Convert minor units back to a decimal amount for display.
///
/// Exact for any integer input since minor units have no further
/// subdivision. The reverse round-trip through `to_minor_units` is only
/// approximate for arbitrary decimals at the float input boundary.
pub fn to_major_units(minor: i64) -> f64 {
    minor as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_instead_of_truncating() {
        assert_eq!(to_minor_units(12.34), 1234);
        assert_eq!(to_minor_units(-32.00), -3200);
        assert_eq!(to_minor_units(-0.01), -1);
        assert_eq!(to_minor_units(0.0), 0);
        // float artifacts like 19.99 -> 1998.9999... must still land on 1999
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(-19.99), -1999);
    }

    #[test]
    fn minor_units_round_trip_exactly() {
        for n in [-1_000_000i64, -3800, -1, 0, 1, 299, 1234, 1_000_000] {
            assert_eq!(to_minor_units(to_major_units(n)), n);
        }
    }

    #[test]
    fn two_decimal_inputs_round_trip() {
        assert_eq!(to_major_units(to_minor_units(-0.01)), -0.01);
        assert_eq!(to_major_units(to_minor_units(12.34)), 12.34);
    }
}
