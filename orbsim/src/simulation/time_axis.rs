use crate::simulation::params::Parameters;
use crate::simulation::states::TimeAxis;

/// Timestamps for a trajectory of `steps` steps: `steps + 1` samples,
/// `t_i = i * h0`
pub fn time_axis(params: &Parameters, steps: usize) -> TimeAxis {
    let h = params.h0();
    TimeAxis::from_times((0..=steps).map(|i| i as f64 * h).collect())
}
