// Shared helpers for integrating and probing functions on the unit sphere.
#![allow(dead_code)]

use std::f64::consts::PI;

use angcorr::legendre::legendre_p;
use angcorr::{AngularCorrelation, CascadeStep, Parity, State, Transition};

/// Nodes and weights of the n-point Gauss-Legendre rule on [-1, 1].
pub fn gauss_legendre(n: usize) -> Vec<(f64, f64)> {
    (1..=n)
        .map(|i| {
            // Tricomi's initial guess, refined by Newton's method.
            let mut x = (PI * (i as f64 - 0.25) / (n as f64 + 0.5)).cos();
            let mut derivative = 0.0;
            for _ in 0..100 {
                let p = legendre_p(n, x);
                derivative = n as f64 * (x * p - legendre_p(n - 1, x)) / (x * x - 1.0);
                let dx = p / derivative;
                x -= dx;
                if dx.abs() < 1e-15 {
                    break;
                }
            }
            let weight = 2.0 / ((1.0 - x * x) * derivative * derivative);
            (x, weight)
        })
        .collect()
}

/// Integral of f(theta, phi) over the unit sphere: Gauss-Legendre in
/// cos(theta) and the trapezoidal rule in phi. Exact for polynomials in
/// cos(theta) up to degree 2 n_theta - 1 times trigonometric polynomials in
/// phi up to degree n_phi - 1.
pub fn integrate_sphere<F: Fn(f64, f64) -> f64>(f: F, n_theta: usize, n_phi: usize) -> f64 {
    let d_phi = 2.0 * PI / n_phi as f64;
    gauss_legendre(n_theta)
        .into_iter()
        .map(|(x, weight)| {
            let theta = x.acos();
            let ring: f64 = (0..n_phi).map(|j| f(theta, j as f64 * d_phi)).sum();
            weight * ring * d_phi
        })
        .sum()
}

/// n quasi-uniformly distributed directions (theta, phi) on the Fibonacci
/// spiral.
pub fn fibonacci_sphere(n: usize) -> Vec<[f64; 2]> {
    let golden_angle = PI * (3.0 - 5.0f64.sqrt());
    (0..n)
        .map(|i| {
            let z = 1.0 - (2.0 * i as f64 + 1.0) / n as f64;
            let phi = (golden_angle * i as f64).rem_euclid(2.0 * PI);
            [z.acos(), phi]
        })
        .collect()
}

pub fn state(two_j: i32, parity: Parity) -> State {
    State::with_parity(two_j, parity).unwrap()
}

pub fn unknown(two_j: i32) -> State {
    State::new(two_j).unwrap()
}

/// 0+ -> 1+ -> 1+ -> 0+ with a mixed unobserved intermediate transition.
pub fn nrf_with_intermediate(delta: f64) -> AngularCorrelation {
    let steps: Vec<CascadeStep> = vec![
        (Transition::m1(0.0), state(2, Parity::Positive)),
        (Transition::m1(delta), state(2, Parity::Positive)),
        (Transition::m1(0.0), state(0, Parity::Positive)),
    ];
    AngularCorrelation::new(state(0, Parity::Positive), steps).unwrap()
}

/// A set of valid correlations of both flavours, including mixed and
/// unobserved transitions.
pub fn correlation_zoo() -> Vec<(String, AngularCorrelation)> {
    let p = Parity::Positive;
    let n = Parity::Negative;
    let cascades: Vec<(State, Vec<CascadeStep>)> = vec![
        (unknown(0), vec![(Transition::dipole(0.0), unknown(2)), (Transition::dipole(0.0), unknown(0))]),
        (unknown(0), vec![(Transition::quadrupole(0.0), unknown(4)), (Transition::quadrupole(0.0), unknown(0))]),
        (unknown(0), vec![(Transition::dipole(0.0), unknown(2)), (Transition::dipole(2.0), unknown(4))]),
        (
            unknown(0),
            vec![
                (Transition::dipole(0.0), unknown(2)),
                (Transition::dipole(2.0), unknown(2)),
                (Transition::dipole(0.0), unknown(4)),
            ],
        ),
        (
            unknown(12),
            vec![
                (Transition::quadrupole(0.0), unknown(8)),
                (Transition::dipole(0.0), unknown(6)),
                (Transition::quadrupole(0.0), unknown(2)),
            ],
        ),
        (unknown(3), vec![(Transition::dipole(-0.4), unknown(5)), (Transition::quadrupole(1.5), unknown(1))]),
        (state(0, p), vec![(Transition::m1(0.0), state(2, p)), (Transition::m1(0.0), state(0, p))]),
        (state(0, p), vec![(Transition::e1(0.0), state(2, n)), (Transition::e1(0.0), state(0, p))]),
        (state(0, p), vec![(Transition::e2(0.0), state(4, p)), (Transition::e2(0.0), state(0, p))]),
        (state(0, p), vec![(Transition::m1(0.0), state(2, p)), (Transition::m1(-1.0), state(2, p))]),
        (
            state(3, p),
            vec![
                (Transition::with_em(angcorr::EMCharacter::Magnetic, 6, 2.0).unwrap(), state(9, p)),
                (Transition::m1(-2.0), state(7, p)),
            ],
        ),
        (
            state(3, p),
            vec![
                (Transition::with_em(angcorr::EMCharacter::Magnetic, 6, 0.0).unwrap(), state(9, p)),
                (Transition::m1(2.0), state(7, p)),
                (Transition::m1(0.0), state(7, p)),
            ],
        ),
        (state(7, p), vec![(Transition::e2(0.0), state(3, p)), (Transition::m1(0.5), state(3, p))]),
        (state(3, n), vec![(Transition::e1(0.3), state(5, p)), (Transition::e2(-0.7), state(1, p))]),
    ];
    let mut zoo: Vec<(String, AngularCorrelation)> = cascades
        .into_iter()
        .map(|(initial, steps)| {
            let label = std::iter::once(initial.to_string())
                .chain(steps.iter().map(|(_, s)| s.to_string()))
                .collect::<Vec<_>>()
                .join(" -> ");
            (label, AngularCorrelation::new(initial, steps).unwrap())
        })
        .collect();
    for delta in [0.0, 1.0, 100.0] {
        zoo.push((format!("0+ -> 1+ -> 1+ -> 0+ (delta = {})", delta), nrf_with_intermediate(delta)));
    }
    zoo
}
