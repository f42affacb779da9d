//! mapbox-gl style expressions for the case circle layer.
//!
//! The rendering engine evaluates these itself, so the expressions carry the
//! same stops as [`ChannelScale`] evaluates natively.

use crate::channel_scale::ChannelScale;
use serde_json::{json, Value};

/// Feature property the expressions read the case count from.
pub const CASES_PROPERTY: &str = "cases";

/// Default `circle-opacity`.
pub const DEFAULT_CIRCLE_OPACITY: f64 = 0.75;

/// `["interpolate", ["linear"], ["get", "cases"], in0, out0, in1, out1, ...]`
fn interpolate_expression(stops: impl IntoIterator<Item = (f64, Value)>) -> Value {
    let mut expr = vec![
        json!("interpolate"),
        json!(["linear"]),
        json!(["get", CASES_PROPERTY]),
    ];
    for (input, output) in stops {
        expr.push(json!(input));
        expr.push(output);
    }
    Value::Array(expr)
}

impl ChannelScale {
    /// Paint properties for a mapbox-gl `circle` layer.
    pub fn paint(&self, circle_opacity: f64) -> Value {
        json!({
            "circle-radius": interpolate_expression(
                self.radius_stops().into_iter().map(|(i, o)| (i, json!(o)))
            ),
            "circle-color": interpolate_expression(
                self.color_stops().into_iter().map(|(i, c)| (i, json!(c.to_hex())))
            ),
            "circle-opacity": circle_opacity,
            "circle-stroke-width": interpolate_expression(
                self.stroke_width_stops().into_iter().map(|(i, o)| (i, json!(o)))
            ),
        })
    }
}
