//! Decibel helpers shared by the transfer curves.

/// Convert dB to linear amplitude.
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert dB to nepers (natural-log amplitude), so `db_to_linear(db) == exp(db_to_nepers(db))`.
#[inline]
pub fn db_to_nepers(db: f64) -> f64 {
    db * std::f64::consts::LN_10 / 20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_is_zero_db() {
        assert_eq!(db_to_linear(0.0), 1.0);
        assert_eq!(db_to_nepers(0.0), 0.0);
    }

    #[test]
    fn minus_twenty_db_is_a_tenth() {
        assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn nepers_agree_with_linear() {
        for db in [-60.0, -20.0, -3.0, 6.0] {
            let via_exp = db_to_nepers(db).exp();
            assert!((via_exp - db_to_linear(db)).abs() < 1e-12, "{db} dB");
        }
    }
}
