#![no_std]

//! Scaled accounting shared by the pools of the protocol.
//!
//! A pool tracks two sums: the *scaled* units handed out to depositors and the
//! *actual* amount of asset backing them. Depositors keep their scaled units
//! while the actual sum moves (yield, rebasing IBTs, withdrawals), and convert
//! back to actual units when they leave.

/// Converts `actual_value` deposited into a pool holding `initial_sum` scaled
/// units backed by `actual_sum` actual units into scaled units.
///
/// Returns 0 whenever a sum is 0. An empty pool is bootstrapped 1:1 by the
/// caller.
pub fn get_scaled_input(actual_value: i128, initial_sum: i128, actual_sum: i128) -> i128 {
    if initial_sum == 0 || actual_sum == 0 {
        return 0;
    }
    mul_div(actual_value, initial_sum, actual_sum)
}

/// Converts `scaled_output` units of a pool holding `initial_sum` scaled units
/// backed by `actual_sum` actual units back into actual units.
///
/// Returns 0 whenever a sum is 0.
pub fn get_actual_output(scaled_output: i128, initial_sum: i128, actual_sum: i128) -> i128 {
    if initial_sum == 0 || actual_sum == 0 {
        return 0;
    }
    mul_div(scaled_output, actual_sum, initial_sum)
}

/// `a * b / denominator`, rounded down. Traps on overflow.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        return 0;
    }
    match a.checked_mul(b) {
        Some(product) => product / denominator,
        None => panic!("scaled accounting overflow"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_inputs_return_zero() {
        assert_eq!(get_scaled_input(0, 0, 0), 0);
        assert_eq!(get_actual_output(0, 0, 0), 0);
    }

    #[test]
    fn test_zero_denominator_short_circuits() {
        assert_eq!(get_scaled_input(10, 10, 0), 0);
        assert_eq!(get_scaled_input(10, 0, 10), 0);
        assert_eq!(get_actual_output(10, 0, 10), 0);
        assert_eq!(get_actual_output(10, 10, 0), 0);
        assert_eq!(mul_div(10, 10, 0), 0);
    }

    #[test]
    fn test_scaling_of_input_is_consistent() {
        // First deposit of 10 doubled before a second deposit of 10
        assert_eq!(get_scaled_input(10, 10, 20), 5);
    }

    #[test]
    fn test_scaling_of_output_is_consistent() {
        assert_eq!(get_actual_output(5, 15, 30), 10);
    }

    #[test]
    fn test_deposit_then_withdraw_in_grown_pool() {
        // Pool of 100 scaled backed by 150 actual, a user deposits 30
        let scaled = get_scaled_input(30, 100, 150);
        assert_eq!(scaled, 20);

        // Pool doubles before the user leaves
        let out = get_actual_output(scaled, 120, 360);
        assert_eq!(out, 60);
    }

    #[test]
    fn test_rounds_down() {
        assert_eq!(get_scaled_input(1, 1, 3), 0);
        assert_eq!(get_actual_output(2, 3, 4), 2);
    }

    #[test]
    #[should_panic(expected = "scaled accounting overflow")]
    fn test_overflow_traps() {
        mul_div(i128::MAX, 2, 1);
    }
}
