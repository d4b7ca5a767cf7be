use anyhow::Result;
use log::warn;

use crate::entities::{Instance, Piece};
use crate::error::SolveError;
use crate::geometry::{Flattening, flatten};
use crate::io::ext_repr::SolveRequest;

fn ensure_positive(field: &'static str, value: f64) -> Result<(), SolveError> {
    match value.is_finite() && value > 0.0 {
        true => Ok(()),
        false => Err(SolveError::invalid(field, value, "must be finite and > 0")),
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), SolveError> {
    match value.is_finite() && value >= 0.0 {
        true => Ok(()),
        false => Err(SolveError::invalid(field, value, "must be finite and >= 0")),
    }
}

/// Checks every dimension of `request`, without packing anything.
pub fn validate(request: &SolveRequest) -> Result<(), SolveError> {
    ensure_positive("usable_w", request.usable_w)?;
    ensure_positive("usable_h", request.usable_h)?;
    ensure_positive("piece_w", request.piece_w)?;
    ensure_positive("piece_h", request.piece_h)?;
    ensure_non_negative("gap", request.gap)?;
    if let Some(curve) = request.curve.filter(|c| c.enabled) {
        ensure_positive("curve.radius", curve.radius)?;
    }
    Ok(())
}

/// Converts a request into a validated [`Instance`], flattening the piece width if it is curved.
pub fn import(request: &SolveRequest) -> Result<Instance> {
    validate(request)?;

    let flattening = flatten(request.piece_w, request.curve.as_ref());
    if let Flattening::Degenerate { chord, radius } = flattening {
        warn!(
            "[IMPORT] chord width {chord} exceeds the diameter of radius {radius}, packing with the unflattened width"
        );
    }

    Ok(Instance {
        usable_w: request.usable_w,
        usable_h: request.usable_h,
        piece: Piece::new(flattening.width(), request.piece_h),
        gap: request.gap,
        flattening,
    })
}
