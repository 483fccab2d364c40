// Rotations parameterized by Euler angles (Phi, Theta, Psi) in the zxz
// ("x") convention: R = R_z(Psi) R_x(Theta) R_z(Phi).
//
// A frame given by Euler angles maps the canonical z axis onto its own z'
// axis. Reference frames of a cascade are chained by multiplying their
// rotation matrices.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Matrix3, Rotation3, Vector3};

/// Euler angles (Phi, Theta, Psi) in radians.
pub type EulerAngles = [f64; 3];

/// Direction in spherical coordinates (theta, phi) in radians.
pub type CoordDir = [f64; 2];

// Below this value of sin(Theta), Phi and Psi are not separable numerically.
const GIMBAL_LOCK_TOLERANCE: f64 = 1e-8;

/// True if all three angles are exactly zero.
#[inline]
pub fn no_rotation_required(phi_theta_psi: EulerAngles) -> bool {
    phi_theta_psi == [0.0, 0.0, 0.0]
}

pub fn rotation_matrix(phi_theta_psi: EulerAngles) -> Matrix3<f64> {
    let [phi, theta, psi] = phi_theta_psi;
    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), psi)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), theta)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), phi);
    rotation.into_inner()
}

/// Euler angles of a rotation matrix.
///
/// Theta is returned in [0, pi]. For Theta = 0 or pi only Phi + Psi (or
/// Phi - Psi) is defined, so Psi is set to zero and Phi is taken from the
/// sine-bearing element A01 to keep its sign.
pub fn angles(a: &Matrix3<f64>) -> EulerAngles {
    let theta = a[(2, 2)].clamp(-1.0, 1.0).acos();
    let sin_theta = a[(2, 0)].hypot(a[(2, 1)]);
    if sin_theta < GIMBAL_LOCK_TOLERANCE {
        [(-a[(0, 1)]).atan2(a[(0, 0)]), theta, 0.0]
    } else {
        [a[(2, 0)].atan2(a[(2, 1)]), theta, a[(0, 2)].atan2(-a[(1, 2)])]
    }
}

/// Euler angles of the inverse rotation.
pub fn inverse(phi_theta_psi: EulerAngles) -> EulerAngles {
    [-phi_theta_psi[2], -phi_theta_psi[1], -phi_theta_psi[0]]
}

/// Rotate a Cartesian vector.
pub fn rotate(x_y_z: [f64; 3], phi_theta_psi: EulerAngles) -> [f64; 3] {
    if no_rotation_required(phi_theta_psi) {
        return x_y_z;
    }
    let rotated = rotation_matrix(phi_theta_psi) * Vector3::from(x_y_z);
    [rotated.x, rotated.y, rotated.z]
}

/// Undo `rotate`.
pub fn rotate_back(xp_yp_zp: [f64; 3], phi_theta_psi: EulerAngles) -> [f64; 3] {
    if no_rotation_required(phi_theta_psi) {
        return xp_yp_zp;
    }
    rotate(xp_yp_zp, inverse(phi_theta_psi))
}

pub fn rotate_direction(theta_phi: CoordDir, phi_theta_psi: EulerAngles) -> CoordDir {
    if no_rotation_required(phi_theta_psi) {
        return theta_phi;
    }
    to_direction(rotate(to_cartesian(theta_phi), phi_theta_psi))
}

pub fn rotate_direction_back(thetap_phip: CoordDir, phi_theta_psi: EulerAngles) -> CoordDir {
    if no_rotation_required(phi_theta_psi) {
        return thetap_phip;
    }
    to_direction(rotate_back(to_cartesian(thetap_phip), phi_theta_psi))
}

/// Apply `relative` inside the frame given by `reference`.
///
/// The result is the single rotation R(reference) R(relative).
pub fn compose(reference: EulerAngles, relative: EulerAngles) -> EulerAngles {
    angles(&(rotation_matrix(reference) * rotation_matrix(relative)))
}

/// Unit vector of a direction.
pub fn to_cartesian(theta_phi: CoordDir) -> [f64; 3] {
    let (sin_theta, cos_theta) = theta_phi[0].sin_cos();
    let (sin_phi, cos_phi) = theta_phi[1].sin_cos();
    [sin_theta * cos_phi, sin_theta * sin_phi, cos_theta]
}

/// Direction of a unit vector, with phi in [0, 2 pi).
pub fn to_direction(x_y_z: [f64; 3]) -> CoordDir {
    let theta = x_y_z[2].clamp(-1.0, 1.0).acos();
    let mut phi = x_y_z[1].atan2(x_y_z[0]).rem_euclid(2.0 * PI);
    if phi >= 2.0 * PI {
        phi -= 2.0 * PI;
    }
    [theta, phi]
}

/// Frame whose z axis points along `theta_phi`, turned by `phi_free` about
/// that axis.
pub fn from_spherical(theta_phi: CoordDir, phi_free: f64) -> EulerAngles {
    [phi_free, theta_phi[0], theta_phi[1] + FRAC_PI_2]
}

/// Direction of the z axis of a frame. Inverse of `from_spherical`.
pub fn to_spherical(phi_theta_psi: EulerAngles) -> CoordDir {
    let theta = phi_theta_psi[1];
    if (0.0..=PI).contains(&theta) {
        let mut phi = (phi_theta_psi[2] - FRAC_PI_2).rem_euclid(2.0 * PI);
        if phi >= 2.0 * PI {
            phi -= 2.0 * PI;
        }
        [theta, phi]
    } else {
        to_direction(rotate([0.0, 0.0, 1.0], phi_theta_psi))
    }
}
