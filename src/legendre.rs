// Legendre polynomials and the order-2 associated Legendre functions that
// appear in the angular-correlation expansions.

/// Legendre polynomial P_n(x) by the Bonnet recurrence.
pub fn legendre_p(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut p_previous = 1.0;
            let mut p_current = x;
            for l in 1..n {
                let l = l as f64;
                let p_next = ((2.0 * l + 1.0) * x * p_current - l * p_previous) / (l + 1.0);
                p_previous = p_current;
                p_current = p_next;
            }
            p_current
        }
    }
}

/// Associated Legendre function P_n^2(x) = (1 - x^2) d^2/dx^2 P_n(x).
///
/// For order 2 the Condon-Shortley phase is +1, so this agrees with both
/// common sign conventions. Returns zero for n < 2.
pub fn associated_legendre_p2(n: usize, x: f64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let m = 2.0;
    // P_2^2 = 3 (1 - x^2), P_3^2 = 5 x P_2^2
    let mut p_previous = 3.0 * (1.0 - x * x);
    if n == 2 {
        return p_previous;
    }
    let mut p_current = 5.0 * x * p_previous;
    for l in 3..n {
        let l = l as f64;
        let p_next = ((2.0 * l + 1.0) * x * p_current - (l + m) * p_previous) / (l + 1.0 - m);
        p_previous = p_current;
        p_current = p_next;
    }
    p_current
}
