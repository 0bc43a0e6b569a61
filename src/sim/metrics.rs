// ---------------------------------------------------------------------------
// Trajectory metrics
// ---------------------------------------------------------------------------

/// Earliest recorded time after which `values` stays within
/// `target * error_threshold_percent / 100` of `target` for the rest of the
/// trajectory.
///
/// Touching the band and leaving it again does not count; the suffix from
/// the settling index onward must sit entirely inside the band. Returns
/// `None` if the trajectory is empty or never settles. Single reverse scan:
/// walk back from the end and stop at the first sample outside the band.
pub fn settling_time(
    time: &[f64],
    values: &[f64],
    target: f64,
    error_threshold_percent: f64,
) -> Option<f64> {
    debug_assert_eq!(time.len(), values.len());

    let threshold = target * error_threshold_percent / 100.0;
    let mut settled_at = None;
    for (i, value) in values.iter().enumerate().rev() {
        if (value - target).abs() > threshold {
            break;
        }
        settled_at = Some(i);
    }
    settled_at.map(|i| time[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn empty_trajectory_never_settles() {
        assert_eq!(settling_time(&[], &[], 5.0, 1.0), None);
    }

    #[test]
    fn touch_and_leave_is_not_settling() {
        // Enters the 10% band at t=1, exits at t=2, re-enters for good at t=3
        let v = [0.0, 9.5, 12.0, 9.8, 10.1, 9.9];
        assert_eq!(settling_time(&T, &v, 10.0, 10.0), Some(3.0));
    }

    #[test]
    fn settles_immediately_when_always_in_band() {
        let v = [10.0, 10.2, 9.9, 10.05, 9.95, 10.0];
        assert_eq!(settling_time(&T, &v, 10.0, 10.0), Some(0.0));
    }

    #[test]
    fn never_in_band() {
        let v = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(settling_time(&T, &v, 10.0, 1.0), None);
    }

    #[test]
    fn final_sample_out_of_band_means_not_settled() {
        let v = [10.0, 10.0, 10.0, 10.0, 10.0, 20.0];
        assert_eq!(settling_time(&T, &v, 10.0, 10.0), None);
    }

    #[test]
    fn boundary_sample_exactly_on_threshold_counts() {
        // |9.0 - 10.0| == threshold for a 10% band: inclusive comparison
        let v = [0.0, 0.0, 9.0, 10.0, 10.0, 10.0];
        assert_eq!(settling_time(&T, &v, 10.0, 10.0), Some(2.0));
    }

    #[test]
    fn negative_target_gives_negative_threshold_and_no_settling() {
        // threshold = -5 * 1 / 100 < 0: the band is empty
        let v = [-5.0; 6];
        assert_eq!(settling_time(&T, &v, -5.0, 1.0), None);
    }
}
