use derive_more::Display;

/// Central body the altitude derivations are referenced to
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{mu: {} km^3/s^2, radius: {} km}}",
    "mu",
    "equatorial_radius"
)]
pub struct ReferenceBody {
    /// Standard gravitational parameter [km^3/s^2]
    pub mu: f64,

    /// Mean equatorial radius [km]
    pub equatorial_radius: f64,
}

impl ReferenceBody {
    pub const EARTH: Self = ReferenceBody {
        mu: 398_600.4418,
        equatorial_radius: 6378.137,
    };
}
