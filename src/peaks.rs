//! Peak location in 1-D signals.

/// Finds the indices of local maxima above `threshold`, in ascending order.
///
/// A sample is a peak when the signal strictly rises into it and does not
/// rise out of it. Flat-topped plateaus therefore report their first sample
/// only. The first and last samples are treated as rising-into and
/// falling-out-of respectively.
pub fn find_peak_locations(data: &[f32], threshold: f32) -> Vec<usize> {
    let n = data.len();
    let mut peaks = Vec::new();
    for i in 0..n {
        let rising = i == 0 || data[i] > data[i - 1];
        let not_rising_next = i + 1 == n || data[i] >= data[i + 1];
        if rising && not_rising_next && data[i] > threshold {
            peaks.push(i);
        }
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_isolated_sharp_peaks() {
        let peak_locs = [2usize, 8, 25, 76];
        let mut data = vec![0.0f32; 100];
        for &loc in &peak_locs {
            data[loc] = 100.0;
        }

        let found = find_peak_locations(&data, 1.0);
        assert_eq!(found, peak_locs);
    }

    #[test]
    fn flat_top_peaks_report_first_sample() {
        let plateau_starts = [5usize, 15, 35, 75];
        let mut data = vec![0.0f32; 100];
        for &start in &plateau_starts {
            for value in data.iter_mut().skip(start).take(5) {
                *value = 100.0;
            }
        }

        let found = find_peak_locations(&data, 1.0);
        assert_eq!(found, plateau_starts);
    }

    #[test]
    fn signal_below_threshold_has_no_peaks() {
        let mut data = vec![0.0f32; 20];
        data[10] = 0.5;
        assert!(find_peak_locations(&data, 1.0).is_empty());
    }

    #[test]
    fn empty_signal_has_no_peaks() {
        assert!(find_peak_locations(&[], 0.0).is_empty());
    }
}
