use derive_more::Display;

/// Mean orbital elements decoded from a catalog record's second line
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display)]
#[display(
    fmt = "{{e: {}, n: {} rev/day, i: {} deg}}",
    "eccentricity",
    "mean_motion_rev_per_day",
    "inclination_deg"
)]
pub struct MeanElements {
    /// Inclination [deg]
    pub inclination_deg: f64,

    /// Right ascension of the ascending node [deg]
    pub raan_deg: f64,

    /// Eccentricity, dimensionless, encoded with an implied leading "0."
    pub eccentricity: f64,

    /// Argument of perigee [deg]
    pub arg_perigee_deg: f64,

    /// Mean anomaly [deg]
    pub mean_anomaly_deg: f64,

    /// Mean motion [rev/day]
    pub mean_motion_rev_per_day: f64,
}
