use crate::color::{ColorRamp, Rgb};
use crate::interpolation::PiecewiseLinear;
use ccm_feed::error::{DataError, Result};
use ccm_feed::PointFeature;
use log::info;
use serde::Serialize;

/// Circle radii (px) at the radius anchors, smallest to largest.
pub const RADIUS_OUTPUTS: [f64; 6] = [4.0, 8.0, 10.0, 14.0, 18.0, 50.0];

/// Stroke width (px) at the minimum and maximum case count.
pub const STROKE_WIDTHS: [f64; 2] = [1.0, 1.75];

/// Minimum, maximum and arithmetic mean of a dataset's case counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaseRange {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub count: usize,
}

impl CaseRange {
    /// Single pass over the counts. Fails with `EmptyDataset` when there are none.
    pub fn from_counts(counts: impl IntoIterator<Item = u64>) -> Result<Self> {
        let mut min = u64::MAX;
        let mut max = 0u64;
        let mut sum = 0u128;
        let mut count = 0usize;
        for c in counts {
            min = min.min(c);
            max = max.max(c);
            sum += c as u128;
            count += 1;
        }
        if count == 0 {
            return Err(DataError::EmptyDataset);
        }
        // Rounding in the division must not push the mean outside the range
        let mean = (sum as f64 / count as f64).clamp(min as f64, max as f64);
        Ok(CaseRange {
            min,
            max,
            mean,
            count,
        })
    }

    /// Anchor inputs at fixed fractions of the mean, clamped into `[min, max]`.
    ///
    /// Case counts are heavily right-skewed, so most of the visual range is
    /// spent below the mean.
    fn anchors<const N: usize>(&self, inner: [f64; N]) -> Vec<f64> {
        let (lo, hi) = (self.min as f64, self.max as f64);
        std::iter::once(lo)
            .chain(inner.iter().map(|v| v.clamp(lo, hi)))
            .chain(std::iter::once(hi))
            .collect()
    }

    fn radius_anchors(&self) -> Vec<f64> {
        let m = self.mean;
        self.anchors([m / 8.0, m / 4.0, m / 2.0, m])
    }

    fn color_anchors(&self) -> Vec<f64> {
        let m = self.mean;
        self.anchors([m / 8.0, m / 4.0, m / 2.0, m, (m + self.max as f64) / 2.0])
    }
}

/// Radius, color and stroke-width mappings derived from one dataset load.
///
/// Every mapping is non-decreasing over `[min, max]`, returns its first stop
/// at `min` and clamps case counts outside the range to the nearest end.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelScale {
    range: CaseRange,
    radius: PiecewiseLinear,
    color_position: PiecewiseLinear,
    stroke_width: PiecewiseLinear,
    ramp: ColorRamp,
}

impl ChannelScale {
    pub fn from_features(features: &[PointFeature]) -> Result<Self> {
        Self::from_case_counts(features.iter().map(|f| f.cases))
    }

    pub fn from_case_counts(counts: impl IntoIterator<Item = u64>) -> Result<Self> {
        let range = CaseRange::from_counts(counts)?;
        let scale = Self::from_range(range);
        info!(
            "Derived channel scale over {} points: min={} max={} mean={:.1}",
            range.count, range.min, range.max, range.mean
        );
        Ok(scale)
    }

    pub fn from_range(range: CaseRange) -> Self {
        let radius = build(&range.radius_anchors(), RADIUS_OUTPUTS.iter().copied());
        let ramp = ColorRamp::cases();
        let color_position = build(&range.color_anchors(), (0..ramp.len()).map(|i| i as f64));
        let stroke_width = build(
            &[range.min as f64, range.max as f64],
            STROKE_WIDTHS.iter().copied(),
        );
        ChannelScale {
            range,
            radius,
            color_position,
            stroke_width,
            ramp,
        }
    }

    pub fn range(&self) -> &CaseRange {
        &self.range
    }

    pub fn radius(&self, cases: u64) -> f64 {
        self.radius.eval(cases as f64)
    }

    /// Fractional position on the case color ramp (0 = first stop).
    pub fn color_position(&self, cases: u64) -> f64 {
        self.color_position.eval(cases as f64)
    }

    pub fn color(&self, cases: u64) -> Rgb {
        self.ramp.sample(self.color_position(cases))
    }

    pub fn stroke_width(&self, cases: u64) -> f64 {
        self.stroke_width.eval(cases as f64)
    }

    /// `(case count, radius)` control points.
    pub fn radius_stops(&self) -> Vec<(f64, f64)> {
        self.radius.stops().iter().map(|s| (s.input, s.output)).collect()
    }

    /// `(case count, color)` control points.
    pub fn color_stops(&self) -> Vec<(f64, Rgb)> {
        self.color_position
            .stops()
            .iter()
            .map(|s| (s.input, self.ramp.sample(s.output)))
            .collect()
    }

    /// `(case count, stroke width)` control points.
    pub fn stroke_width_stops(&self) -> Vec<(f64, f64)> {
        self.stroke_width
            .stops()
            .iter()
            .map(|s| (s.input, s.output))
            .collect()
    }
}

fn build(inputs: &[f64], outputs: impl Iterator<Item = f64>) -> PiecewiseLinear {
    let mut pairs = inputs.iter().copied().zip(outputs);
    match pairs.next() {
        Some(first) => PiecewiseLinear::new(first, pairs),
        // Anchor lists always start with the minimum
        None => PiecewiseLinear::new((0.0, 0.0), std::iter::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CASE_RAMP;

    /// Right-skewed sample: many small outbreaks, a few very large ones.
    fn skewed() -> Vec<u64> {
        vec![1, 2, 3, 5, 8, 13, 40, 120, 900, 4_000, 12_000, 80_000, 100_000]
    }

    fn ascending_samples(range: &CaseRange) -> Vec<u64> {
        let span = range.max - range.min;
        (0..=200u64).map(|i| range.min + span * i / 200).collect()
    }

    #[test]
    fn test_range_min_mean_max() {
        let range = CaseRange::from_counts(skewed()).unwrap();
        assert_eq!(range.min, 1);
        assert_eq!(range.max, 100_000);
        assert_eq!(range.count, 13);
        assert!(range.min as f64 <= range.mean && range.mean <= range.max as f64);
        let expected = skewed().iter().sum::<u64>() as f64 / 13.0;
        assert!((range.mean - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(
            CaseRange::from_counts(Vec::<u64>::new()),
            Err(DataError::EmptyDataset)
        ));
        assert!(matches!(
            ChannelScale::from_features(&[]),
            Err(DataError::EmptyDataset)
        ));
    }

    #[test]
    fn test_channels_monotonic_over_range() {
        let scale = ChannelScale::from_case_counts(skewed()).unwrap();
        let samples = ascending_samples(scale.range());
        for pair in samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(scale.radius(a) <= scale.radius(b), "radius {} -> {}", a, b);
            assert!(scale.color_position(a) <= scale.color_position(b), "color {} -> {}", a, b);
            assert!(scale.stroke_width(a) <= scale.stroke_width(b), "stroke {} -> {}", a, b);
        }
    }

    #[test]
    fn test_endpoints_hit_first_and_last_stops() {
        let scale = ChannelScale::from_case_counts(skewed()).unwrap();
        assert_eq!(scale.radius(1), RADIUS_OUTPUTS[0]);
        assert_eq!(scale.radius(100_000), RADIUS_OUTPUTS[5]);
        assert_eq!(scale.color(1), CASE_RAMP[0]);
        assert_eq!(scale.color(100_000), CASE_RAMP[6]);
        assert_eq!(scale.stroke_width(1), STROKE_WIDTHS[0]);
        assert_eq!(scale.stroke_width(100_000), STROKE_WIDTHS[1]);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let scale = ChannelScale::from_case_counts([10, 20, 30]).unwrap();
        assert_eq!(scale.radius(0), scale.radius(10));
        assert_eq!(scale.radius(u64::MAX), scale.radius(30));
        assert_eq!(scale.color(1_000_000), CASE_RAMP[6]);
        assert_eq!(scale.stroke_width(2), STROKE_WIDTHS[0]);
    }

    #[test]
    fn test_skew_compensation_spreads_small_counts() {
        let scale = ChannelScale::from_case_counts(skewed()).unwrap();
        // Linear min-max scaling would put 4,000 cases at ~5.8px; the mean
        // anchors push it past the third radius stop.
        assert!(scale.radius(4_000) > 10.0);
        let linear = 4.0 + 46.0 * (4_000.0 - 1.0) / (100_000.0 - 1.0);
        assert!(scale.radius(4_000) > linear);
    }

    #[test]
    fn test_stop_inputs_strictly_ascending() {
        let scale = ChannelScale::from_case_counts([100, 100, 100, 5_000]).unwrap();
        for stops in [scale.radius_stops(), scale.stroke_width_stops()] {
            for pair in stops.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
        }
        let colors = scale.color_stops();
        for pair in colors.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert_eq!(colors[0].1, CASE_RAMP[0]);
        assert_eq!(colors[colors.len() - 1].1, CASE_RAMP[6]);
    }

    #[test]
    fn test_single_value_dataset() {
        let scale = ChannelScale::from_case_counts([1000]).unwrap();
        let range = scale.range();
        assert_eq!((range.min, range.max), (1000, 1000));
        assert_eq!(range.mean, 1000.0);
        assert_eq!(scale.radius_stops().len(), 1);
        assert_eq!(scale.radius(1000), RADIUS_OUTPUTS[0]);
        assert_eq!(scale.color(1000), CASE_RAMP[0]);
    }

    #[test]
    fn test_zero_counts_dataset() {
        let scale = ChannelScale::from_case_counts([0, 0, 0, 7]).unwrap();
        assert_eq!(scale.radius(0), RADIUS_OUTPUTS[0]);
        assert_eq!(scale.radius(7), RADIUS_OUTPUTS[5]);
    }
}
