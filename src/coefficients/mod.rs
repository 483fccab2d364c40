// Coupling coefficients of the angular-correlation expansion.
//
// Each coefficient is evaluated once from doubled quantum numbers and then
// reused. The mixing-ratio dependent ones (A_nu, alpha_nu, E_nu, U_nu) are
// polynomials in delta whose F and kappa factors are cached on construction.
pub mod alphav_coefficient;
pub mod av_coefficient;
pub mod ev_coefficient;
pub mod f_coefficient;
pub mod kappa_coefficient;
pub mod uv_coefficient;

pub use alphav_coefficient::AlphavCoefficient;
pub use av_coefficient::AvCoefficient;
pub use ev_coefficient::EvCoefficient;
pub use f_coefficient::FCoefficient;
pub use kappa_coefficient::KappaCoefficient;
pub use uv_coefficient::UvCoefficient;
