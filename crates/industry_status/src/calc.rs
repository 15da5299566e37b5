//! Integer percentage helpers shared by the panel calculations.

/// `value` as a percentage of `total`, truncated toward zero.
///
/// Returns 0 when `total` is 0 so callers never divide by zero.
pub fn calc_percentage(value: i32, total: i32) -> i32 {
    if total == 0 {
        return 0;
    }
    // Widen so `value * 100` cannot overflow for large production counters.
    let pct = i64::from(value) * 100 / i64::from(total);
    pct.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Clamp `value` into `[min, max]`.
pub fn calc_bound(value: i32, min: i32, max: i32) -> i32 {
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(calc_percentage(1, 3), 33);
        assert_eq!(calc_percentage(2, 3), 66);
        assert_eq!(calc_percentage(199, 200), 99);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(calc_percentage(50, 0), 0);
        assert_eq!(calc_percentage(0, 0), 0);
    }

    #[test]
    fn test_percentage_can_exceed_hundred() {
        assert_eq!(calc_percentage(120, 80), 150);
    }

    #[test]
    fn test_percentage_large_values_do_not_overflow() {
        assert_eq!(calc_percentage(i32::MAX, i32::MAX), 100);
        assert_eq!(calc_percentage(i32::MAX, 1), i32::MAX);
    }

    #[test]
    fn test_bound() {
        assert_eq!(calc_bound(150, 0, 100), 100);
        assert_eq!(calc_bound(-3, 0, 100), 0);
        assert_eq!(calc_bound(42, 0, 100), 42);
    }
}
