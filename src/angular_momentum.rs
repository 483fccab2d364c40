// Angular-momentum coupling: selection rules and Wigner 3j/6j symbols.
//
// All arguments are doubled integers (2j, 2m), so half-integer spins stay in
// integer arithmetic. The symbols are evaluated with Racah's single-sum formulas.

use once_cell::sync::Lazy;

/// Largest n for which n! is finite in f64.
const MAX_FACTORIAL: usize = 170;

static FACTORIALS: Lazy<Vec<f64>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(MAX_FACTORIAL + 1);
    table.push(1.0);
    for n in 1..=MAX_FACTORIAL {
        let previous = table[n - 1];
        table.push(previous * n as f64);
    }
    table
});

/// n! as f64. Values beyond 170! overflow and are returned as infinity.
#[inline]
pub fn factorial(n: usize) -> f64 {
    FACTORIALS.get(n).copied().unwrap_or(f64::INFINITY)
}

/// n!/m!, computed as a product so that large arguments with a small
/// difference stay finite.
pub fn factorial_ratio(n: usize, m: usize) -> f64 {
    if n >= m {
        ((m + 1)..=n).fold(1.0, |acc, k| acc * k as f64)
    } else {
        1.0 / ((n + 1)..=m).fold(1.0, |acc, k| acc * k as f64)
    }
}

/// True if the sum of the arguments is even.
///
/// For doubled angular momenta this means the physical sum is an integer.
#[inline]
pub fn sum_is_even(two_a: i32, two_b: i32, two_c: i32) -> bool {
    (two_a + two_b + two_c) % 2 == 0
}

/// Triangle rule |a - b| <= c <= a + b, together with an integer a + b + c.
pub fn triangle(two_a: i32, two_b: i32, two_c: i32) -> bool {
    if two_a < 0 || two_b < 0 || two_c < 0 {
        return false;
    }
    sum_is_even(two_a, two_b, two_c) && (two_a - two_b).abs() <= two_c && two_c <= two_a + two_b
}

/// Selection rules for the Clebsch-Gordan coefficient <j1 m1 j2 m2 | J M>.
///
/// Magnitudes of the projections are compared first, then conservation of the
/// projection, then the triangle rule.
pub fn cg_nonzero(two_j1: i32, two_j2: i32, two_j: i32, two_m1: i32, two_m2: i32, two_m: i32) -> bool {
    if two_m1.abs() > two_j1 || two_m2.abs() > two_j2 || two_m.abs() > two_j {
        return false;
    }
    if two_m1 + two_m2 != two_m {
        return false;
    }
    triangle(two_j1, two_j2, two_j)
}

/// Selection rules for the 6j symbol {j1 j2 j3; J1 J2 J3}.
///
/// Each of the four triads (j1 j2 j3), (j1 J2 J3), (J1 j2 J3) and (J1 J2 j3)
/// must have an even doubled sum and satisfy the triangle inequality.
pub fn racah_nonzero(two_j1: i32, two_j2: i32, two_j3: i32, two_big_j1: i32, two_big_j2: i32, two_big_j3: i32) -> bool {
    triangle(two_j1, two_j2, two_j3)
        && triangle(two_j1, two_big_j2, two_big_j3)
        && triangle(two_big_j1, two_j2, two_big_j3)
        && triangle(two_big_j1, two_big_j2, two_j3)
}

// Physical value of a doubled quantity that is known to be even.
#[inline]
fn half(two_x: i32) -> usize {
    (two_x / 2) as usize
}

// Triangle coefficient Delta(a b c) = (a+b-c)!(a-b+c)!(-a+b+c)!/(a+b+c+1)!
fn triangle_coefficient(two_a: i32, two_b: i32, two_c: i32) -> f64 {
    factorial(half(two_a + two_b - two_c))
        * factorial(half(two_a - two_b + two_c))
        * factorial(half(-two_a + two_b + two_c))
        / factorial(half(two_a + two_b + two_c) + 1)
}

#[inline]
fn phase(exponent: i32) -> f64 {
    if exponent.rem_euclid(2) == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Wigner 3j symbol (j1 j2 j3; m1 m2 m3) for doubled arguments.
///
/// Returns exactly zero whenever a selection rule forbids the coupling.
pub fn wigner_3j(two_j1: i32, two_j2: i32, two_j3: i32, two_m1: i32, two_m2: i32, two_m3: i32) -> f64 {
    if two_m1 + two_m2 + two_m3 != 0 {
        return 0.0;
    }
    if !cg_nonzero(two_j1, two_j2, two_j3, two_m1, two_m2, -two_m3) {
        return 0.0;
    }
    // j + m must be an integer for each pair.
    if (two_j1 + two_m1) % 2 != 0 || (two_j2 + two_m2) % 2 != 0 || (two_j3 + two_m3) % 2 != 0 {
        return 0.0;
    }

    let prefactor = phase((two_j1 - two_j2 - two_m3) / 2)
        * (triangle_coefficient(two_j1, two_j2, two_j3)
            * factorial(half(two_j1 + two_m1))
            * factorial(half(two_j1 - two_m1))
            * factorial(half(two_j2 + two_m2))
            * factorial(half(two_j2 - two_m2))
            * factorial(half(two_j3 + two_m3))
            * factorial(half(two_j3 - two_m3)))
        .sqrt();

    // Arguments of the six factorials in the denominator, as functions of k.
    let a1 = (two_j1 + two_j2 - two_j3) / 2;
    let a2 = (two_j1 - two_m1) / 2;
    let a3 = (two_j2 + two_m2) / 2;
    let b1 = (two_j3 - two_j2 + two_m1) / 2;
    let b2 = (two_j3 - two_j1 - two_m2) / 2;

    let k_min = 0.max(-b1).max(-b2);
    let k_max = a1.min(a2).min(a3);

    let mut sum = 0.0;
    for k in k_min..=k_max {
        let denominator = factorial(k as usize)
            * factorial((a1 - k) as usize)
            * factorial((a2 - k) as usize)
            * factorial((a3 - k) as usize)
            * factorial((b1 + k) as usize)
            * factorial((b2 + k) as usize);
        sum += phase(k) / denominator;
    }

    prefactor * sum
}

/// Wigner 6j symbol {j1 j2 j3; J1 J2 J3} for doubled arguments.
pub fn wigner_6j(two_j1: i32, two_j2: i32, two_j3: i32, two_big_j1: i32, two_big_j2: i32, two_big_j3: i32) -> f64 {
    if !racah_nonzero(two_j1, two_j2, two_j3, two_big_j1, two_big_j2, two_big_j3) {
        return 0.0;
    }

    let prefactor = (triangle_coefficient(two_j1, two_j2, two_j3)
        * triangle_coefficient(two_j1, two_big_j2, two_big_j3)
        * triangle_coefficient(two_big_j1, two_j2, two_big_j3)
        * triangle_coefficient(two_big_j1, two_big_j2, two_j3))
    .sqrt();

    let triads = [
        (two_j1 + two_j2 + two_j3) / 2,
        (two_j1 + two_big_j2 + two_big_j3) / 2,
        (two_big_j1 + two_j2 + two_big_j3) / 2,
        (two_big_j1 + two_big_j2 + two_j3) / 2,
    ];
    let quads = [
        (two_j1 + two_j2 + two_big_j1 + two_big_j2) / 2,
        (two_j2 + two_j3 + two_big_j2 + two_big_j3) / 2,
        (two_j3 + two_j1 + two_big_j3 + two_big_j1) / 2,
    ];

    let t_min = triads.iter().copied().max().unwrap_or(0);
    let t_max = quads.iter().copied().min().unwrap_or(-1);

    let mut sum = 0.0;
    for t in t_min..=t_max {
        let mut denominator = 1.0;
        for triad in triads {
            denominator *= factorial((t - triad) as usize);
        }
        for quad in quads {
            denominator *= factorial((quad - t) as usize);
        }
        sum += phase(t) * factorial((t + 1) as usize) / denominator;
    }

    prefactor * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, epsilon: f64) {
        assert!((a - b).abs() < epsilon, "{} != {} (epsilon {})", a, b, epsilon);
    }

    #[test]
    fn test_factorial_table() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert!(factorial(171).is_infinite());
        assert_close(factorial_ratio(6, 2), 360.0, 1e-12);
        assert_close(factorial_ratio(2, 6), 1.0 / 360.0, 1e-15);
    }

    #[test]
    fn test_triangle() {
        assert!(triangle(2, 2, 4));
        assert!(triangle(1, 1, 0));
        assert!(!triangle(2, 2, 6));
        // Odd sum is not a valid coupling.
        assert!(!triangle(1, 2, 2));
        assert!(!triangle(-2, 2, 0));
    }

    #[test]
    fn test_cg_selection_rules() {
        assert!(cg_nonzero(1, 1, 2, 1, -1, 0));
        // |m| larger than j
        assert!(!cg_nonzero(1, 1, 2, 2, -1, 1));
        assert!(!cg_nonzero(1, 1, 2, 1, -2, -1));
        assert!(!cg_nonzero(1, 1, 2, 1, -1, 3));
        // m1 + m2 != M
        assert!(!cg_nonzero(1, 1, 2, 1, -1, 2));
        // triangle violated
        assert!(!cg_nonzero(1, 1, 3, 1, -1, 0));
    }

    #[test]
    fn test_racah_selection_rules() {
        assert!(racah_nonzero(1, 1, 2, 1, 1, 2));
        assert!(!racah_nonzero(1, 1, 1, 1, 1, 2));
        assert!(!racah_nonzero(1, 1, 2, 2, 1, 1));
        assert!(!racah_nonzero(1, 1, 2, 1, 1, 1));
        assert!(!racah_nonzero(1, 1, 4, 1, 1, 2));
        assert!(!racah_nonzero(1, 1, 2, 3, 1, 4));
        assert!(!racah_nonzero(3, 1, 2, 1, 1, 4));
        assert!(!racah_nonzero(1, 1, 2, 1, 1, 4));
    }

    #[test]
    fn test_wigner_3j_known_values() {
        // (1 1 0; 0 0 0) = -1/sqrt(3)
        assert_close(wigner_3j(2, 2, 0, 0, 0, 0), -1.0 / 3f64.sqrt(), 1e-12);
        // (1/2 1/2 1; 1/2 -1/2 0) = 1/sqrt(6)
        assert_close(wigner_3j(1, 1, 2, 1, -1, 0), 1.0 / 6f64.sqrt(), 1e-12);
        // (1 1 2; 1 -1 0) = 1/sqrt(30)
        assert_close(wigner_3j(2, 2, 4, 2, -2, 0), 1.0 / 30f64.sqrt(), 1e-12);
        // (2 2 2; 0 0 0) = -sqrt(2/35)
        assert_close(wigner_3j(4, 4, 4, 0, 0, 0), -(2.0f64 / 35.0).sqrt(), 1e-12);
        // Odd J sum with all m = 0 vanishes.
        assert_close(wigner_3j(2, 2, 2, 0, 0, 0), 0.0, 1e-15);
        assert_eq!(wigner_3j(2, 2, 4, 2, 2, 0), 0.0);
    }

    #[test]
    fn test_wigner_6j_known_values() {
        // {1/2 1/2 1; 1/2 1/2 1} = 1/6
        assert_close(wigner_6j(1, 1, 2, 1, 1, 2), 1.0 / 6.0, 1e-12);
        // {1 1 1; 1 1 1} = 1/6
        assert_close(wigner_6j(2, 2, 2, 2, 2, 2), 1.0 / 6.0, 1e-12);
        // {1 1 0; 1 1 2} = 1/3
        assert_close(wigner_6j(2, 2, 0, 2, 2, 4), 1.0 / 3.0, 1e-12);
        // {2 2 2; 2 2 2} = -3/70
        assert_close(wigner_6j(4, 4, 4, 4, 4, 4), -3.0 / 70.0, 1e-12);
        assert_eq!(wigner_6j(1, 1, 1, 1, 1, 2), 0.0);
    }

    #[test]
    fn test_wigner_3j_orthogonality() {
        // sum over m1, m2 of (j1 j2 j; m1 m2 -m)^2 = 1/(2j+1)
        let (two_j1, two_j2) = (3, 4);
        for two_j in [1, 3, 5, 7] {
            let two_m = 1;
            let mut sum = 0.0;
            let mut two_m1 = -two_j1;
            while two_m1 <= two_j1 {
                let two_m2 = two_m - two_m1;
                let value = wigner_3j(two_j1, two_j2, two_j, two_m1, two_m2, -two_m);
                sum += value * value;
                two_m1 += 2;
            }
            assert_close(sum, 1.0 / (two_j as f64 + 1.0), 1e-12);
        }
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            /// Even permutations of the columns leave the 3j symbol unchanged.
            #[test]
            fn prop_3j_cyclic_symmetry(two_j1 in 0i32..8, two_j2 in 0i32..8, two_j3 in 0i32..8, two_m1 in -8i32..8, two_m2 in -8i32..8) {
                let two_m3 = -two_m1 - two_m2;
                let a = wigner_3j(two_j1, two_j2, two_j3, two_m1, two_m2, two_m3);
                let b = wigner_3j(two_j2, two_j3, two_j1, two_m2, two_m3, two_m1);
                prop_assert!((a - b).abs() < 1e-12);
            }

            /// The 6j symbol is invariant under column permutations.
            #[test]
            fn prop_6j_column_symmetry(a in 0i32..7, b in 0i32..7, c in 0i32..7, d in 0i32..7, e in 0i32..7, f in 0i32..7) {
                let x = wigner_6j(a, b, c, d, e, f);
                let y = wigner_6j(b, a, c, e, d, f);
                let z = wigner_6j(c, b, a, f, e, d);
                prop_assert!((x - y).abs() < 1e-12);
                prop_assert!((x - z).abs() < 1e-12);
            }
        }
    }
}
