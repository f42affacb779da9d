//! Visual-channel scales for case points.
//!
//! This crate derives the statistical range of a dataset's case counts and
//! turns it into the radius, color and stroke-width mappings the map layer
//! is styled with.

pub mod channel_scale;
pub mod color;
pub mod paint;

pub use channel_scale::{CaseRange, ChannelScale};
pub use color::{ColorRamp, Rgb};

/// Piecewise-linear interpolation between ordered stops.
pub mod interpolation {
    use serde::Serialize;

    /// A single control point of a piecewise-linear function
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct Stop {
        pub input: f64,
        pub output: f64,
    }

    /// A piecewise-linear function with strictly ascending stop inputs.
    ///
    /// Inputs below the first stop evaluate to the first output, inputs above
    /// the last stop to the last output.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PiecewiseLinear {
        stops: Vec<Stop>,
    }

    impl PiecewiseLinear {
        /// Build from a first stop and any number of further `(input, output)`
        /// pairs given in ascending input order.
        ///
        /// A pair whose input does not exceed the last kept input is dropped,
        /// so coinciding anchors keep the earlier stop.
        pub fn new(first: (f64, f64), rest: impl IntoIterator<Item = (f64, f64)>) -> Self {
            let mut stops = vec![Stop {
                input: first.0,
                output: first.1,
            }];
            for (input, output) in rest {
                let last = stops[stops.len() - 1].input;
                if input > last {
                    stops.push(Stop { input, output });
                }
            }
            PiecewiseLinear { stops }
        }

        /// Evaluate at `x`, clamping outside the stop domain.
        pub fn eval(&self, x: f64) -> f64 {
            let first = self.stops[0];
            let last = self.stops[self.stops.len() - 1];
            if x.is_nan() || x <= first.input {
                return first.output;
            }
            if x >= last.input {
                return last.output;
            }
            for window in self.stops.windows(2) {
                let (a, b) = (window[0], window[1]);
                if x <= b.input {
                    let t = (x - a.input) / (b.input - a.input);
                    return a.output + t * (b.output - a.output);
                }
            }
            last.output
        }

        pub fn stops(&self) -> &[Stop] {
            &self.stops
        }

        /// `(first input, last input)`
        pub fn domain(&self) -> (f64, f64) {
            (self.stops[0].input, self.stops[self.stops.len() - 1].input)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_eval_between_stops() {
            let f = PiecewiseLinear::new((0.0, 1.0), [(10.0, 2.0), (20.0, 4.0)]);
            assert_eq!(f.eval(0.0), 1.0);
            assert_eq!(f.eval(5.0), 1.5);
            assert_eq!(f.eval(10.0), 2.0);
            assert_eq!(f.eval(15.0), 3.0);
            assert_eq!(f.eval(20.0), 4.0);
        }

        #[test]
        fn test_eval_clamps() {
            let f = PiecewiseLinear::new((10.0, 1.0), [(20.0, 1.75)]);
            assert_eq!(f.eval(-100.0), 1.0);
            assert_eq!(f.eval(1e12), 1.75);
            assert_eq!(f.eval(f64::NAN), 1.0);
        }

        #[test]
        fn test_coinciding_inputs_keep_first() {
            let f = PiecewiseLinear::new((5.0, 4.0), [(5.0, 8.0), (5.0, 10.0), (9.0, 50.0)]);
            assert_eq!(f.stops().len(), 2);
            assert_eq!(f.eval(5.0), 4.0);
            assert_eq!(f.domain(), (5.0, 9.0));
        }

        #[test]
        fn test_single_stop() {
            let f = PiecewiseLinear::new((1000.0, 4.0), [(1000.0, 50.0)]);
            assert_eq!(f.stops().len(), 1);
            assert_eq!(f.eval(0.0), 4.0);
            assert_eq!(f.eval(1000.0), 4.0);
            assert_eq!(f.eval(2000.0), 4.0);
        }
    }
}
