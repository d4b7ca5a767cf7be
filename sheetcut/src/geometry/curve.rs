use serde::{Deserialize, Serialize};

/// Curvature of a cylindrical piece.
/// When enabled, the piece width given by the caller is the chord of an arc with this radius.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CurveSpec {
    pub enabled: bool,
    /// Radius of the cylinder in mm
    pub radius: f64,
}

/// Outcome of [`flatten`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flattening {
    /// No curvature requested, the chord width is used as is
    Disabled { width: f64 },
    /// The chord was converted into the arc length it spans
    Flattened { chord: f64, width: f64 },
    /// The chord is longer than the diameter, so no arc of this radius spans it.
    /// Falls back to the chord width.
    Degenerate { chord: f64, radius: f64 },
}

impl Flattening {
    /// Effective width used for packing
    pub fn width(&self) -> f64 {
        match *self {
            Flattening::Disabled { width } | Flattening::Flattened { width, .. } => width,
            Flattening::Degenerate { chord, .. } => chord,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Flattening::Degenerate { .. })
    }
}

/// Converts the chord width `pw` of a curved piece into its flattened arc length:
/// `2r * asin(pw / 2r)`.
///
/// The arc is never shorter than its chord, so the returned width is `>= pw` whenever the transform applies.
/// Expects a validated `pw > 0` and, for an enabled curve, `radius > 0`.
pub fn flatten(pw: f64, curve: Option<&CurveSpec>) -> Flattening {
    match curve {
        Some(c) if c.enabled => {
            let diameter = 2.0 * c.radius;
            if pw > diameter {
                Flattening::Degenerate {
                    chord: pw,
                    radius: c.radius,
                }
            } else {
                let width = diameter * (pw / diameter).asin();
                // rounding can shave an ulp off nearly straight arcs
                Flattening::Flattened {
                    chord: pw,
                    width: width.max(pw),
                }
            }
        }
        _ => Flattening::Disabled { width: pw },
    }
}
