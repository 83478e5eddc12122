//! Response series and peak summary.
//!
//! [`ResponseSeries`] holds the time grid and the three kinematic series of one
//! evaluation, all of equal length. [`ResponseSummary`] is built *only* from a
//! `ResponseSeries`, so the reported peaks can never drift from the series.
use crate::response::core::derived::peak_abs;
use ndarray::Array1;

/// ResponseSeries — time grid plus displacement, velocity, and acceleration.
///
/// Fields
/// ------
/// - `time`: `t_i = i·dt`.
/// - `displacement`: strategy output (raw scale of the chosen strategy).
/// - `velocity`: backward difference of `displacement`.
/// - `acceleration`: backward difference of `velocity`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSeries {
    pub time: Array1<f64>,
    pub displacement: Array1<f64>,
    pub velocity: Array1<f64>,
    pub acceleration: Array1<f64>,
}

impl ResponseSeries {
    /// All-zero series of length `n` on the grid `i·dt`.
    pub fn zeros(n: usize, dt: f64) -> Self {
        ResponseSeries {
            time: Array1::from_iter((0..n).map(|i| i as f64 * dt)),
            displacement: Array1::zeros(n),
            velocity: Array1::zeros(n),
            acceleration: Array1::zeros(n),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(t, displacement, velocity, acceleration)` per sample, in time order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(self.displacement.iter())
            .zip(self.velocity.iter())
            .zip(self.acceleration.iter())
            .map(|(((&t, &u), &v), &a)| (t, u, v, a))
    }
}

/// ResponseSummary — peak absolute values of a [`ResponseSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResponseSummary {
    pub max_displacement: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
}

impl ResponseSummary {
    /// Peaks of `series`; every field is 0 for an empty series.
    pub fn from_series(series: &ResponseSeries) -> Self {
        ResponseSummary {
            max_displacement: peak_abs(series.displacement.view()),
            max_velocity: peak_abs(series.velocity.view()),
            max_acceleration: peak_abs(series.acceleration.view()),
        }
    }
}

impl std::fmt::Display for ResponseSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Max Displacement: {:.4} m", self.max_displacement)?;
        writeln!(f, "Max Velocity: {:.4} m/s", self.max_velocity)?;
        write!(f, "Max Acceleration: {:.4} m/s²", self.max_acceleration)
    }
}
