/// Converts an `i64` to `f64` for float promotion.
///
/// Values beyond `2^53` in magnitude are rounded to the nearest
/// representable float.
///
/// # Example
/// ```
/// use calcite::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// For `z < 0.5` the reflection formula is used. Poles (zero and the negative
/// integers) produce an infinite or NaN result, which callers must reject.
///
/// # Example
/// ```
/// use calcite::util::num::euler_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((euler_gamma(5.0) - 24.0).abs() < 1e-10);
/// // Γ(0.5) = √π
/// assert!((euler_gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn euler_gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * euler_gamma(1.0 - z))
    } else {
        let z_minus_1 = z - 1.0;
        let mut x = COEFFS[0];

        for (i, &c) in (1_u32..).zip(COEFFS.iter().skip(1)) {
            x += c / (z_minus_1 + f64::from(i));
        }

        let t = z_minus_1 + G + 0.5;
        // t^(z - 1/2) alone overflows from z ~ 143 on.
        let half_power = t.powf((z_minus_1 + 0.5) / 2.0);

        std::f64::consts::TAU.sqrt() * half_power * (-t).exp() * half_power * x
    }
}

/// Computes `n!` for a non-negative `n`.
///
/// Returns `None` if the result does not fit in an `i64` (from `21!` on) or
/// `n` is negative.
///
/// # Example
/// ```
/// use calcite::util::num::checked_factorial;
///
/// assert_eq!(checked_factorial(0), Some(1));
/// assert_eq!(checked_factorial(5), Some(120));
/// assert_eq!(checked_factorial(21), None);
/// ```
#[must_use]
pub fn checked_factorial(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    (2..=n).try_fold(1_i64, i64::checked_mul)
}

/// Computes the `n`th Fibonacci number with `fib(0) = 0` and `fib(1) = 1`.
///
/// The sequence is walked iteratively; `None` is returned for negative `n`
/// and on overflow (from `fib(93)` on).
#[must_use]
pub fn checked_fibonacci(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let (mut current, mut next) = (0_i64, 1_i64);
    for _ in 0..n {
        let sum = current.checked_add(next)?;
        current = next;
        next = sum;
    }
    Some(current)
}

/// Trial-division primality test.
///
/// Every value below 2 is not prime.
///
/// # Example
/// ```
/// use calcite::util::num::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub const fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Euclid's algorithm on unsigned magnitudes. `gcd(0, 0)` is `0`.
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_matches_factorials_at_integers() {
        for (n, expected) in [(1.0, 1.0), (2.0, 1.0), (3.0, 2.0), (6.0, 120.0)] {
            assert!((euler_gamma(n) - expected).abs() < 1e-9, "gamma({n})");
        }
    }

    #[test]
    fn gamma_reflection_for_small_arguments() {
        // Γ(-0.5) = -2√π
        let expected = -2.0 * std::f64::consts::PI.sqrt();
        assert!((euler_gamma(-0.5) - expected).abs() < 1e-9);
    }

    #[test]
    fn gamma_stays_finite_up_to_its_float_limit() {
        for z in [143.0, 151.0, 171.0] {
            assert!(euler_gamma(z).is_finite(), "gamma({z})");
        }
        assert!(euler_gamma(172.0).is_infinite());
    }

    #[test]
    fn gamma_pole_is_not_finite() {
        assert!(!euler_gamma(0.0).is_finite());
    }

    #[test]
    fn factorial_limits() {
        assert_eq!(checked_factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(checked_factorial(-1), None);
    }

    #[test]
    fn fibonacci_sequence() {
        let first: Vec<_> = (0..10).map(|n| checked_fibonacci(n).unwrap()).collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(checked_fibonacci(92), Some(7_540_113_804_746_346_429));
        assert_eq!(checked_fibonacci(93), None);
        assert_eq!(checked_fibonacci(-3), None);
    }

    #[test]
    fn primes_below_thirty() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(1_000_000_007));
    }

    #[test]
    fn gcd_edge_cases() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(17, 5), 1);
    }
}
