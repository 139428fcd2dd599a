//! Rounding used for every whole-number output
//!
//! Ties round toward positive infinity (2712.5 -> 2713, -2.5 -> -2).

/// Round to the nearest whole number, ties toward +infinity
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // x + 0.5 would round 0.49999999999999994 up
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// `round_half_up` as an integer
pub fn round_to_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_up() {
        assert_eq!(round_half_up(2712.5), 2713.0);
        assert_eq!(round_half_up(612.5), 613.0);
        assert_eq!(round_half_up(0.5), 1.0);
    }

    #[test]
    fn test_negative_ties_round_toward_positive() {
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_just_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(240.975), 241.0);
        assert_eq!(round_half_up(71.4), 71.0);
    }

    #[test]
    fn test_round_to_i64() {
        assert_eq!(round_to_i64(3212.5), 3213);
        assert_eq!(round_to_i64(-0.4), 0);
    }
}
