use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use sheetcut::geometry::CurveSpec;
use sheetcut::io::ext_repr::{ExtPlacedPiece, SolveRequest};

/// Raw sheet, including the unusable border
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
    /// Width of the unusable border on all four sides
    #[serde(default)]
    pub offset: f64,
}

impl Sheet {
    /// Width and height left after removing the border on all four sides
    pub fn usable_area(&self) -> Result<(f64, f64)> {
        ensure!(
            self.offset.is_finite() && self.offset >= 0.0,
            "sheet offset must be finite and >= 0, got {}",
            self.offset
        );
        let (w, h) = (self.width - 2.0 * self.offset, self.height - 2.0 * self.offset);
        ensure!(
            w > 0.0 && h > 0.0,
            "sheet of {}x{} has no usable area left with an offset of {}",
            self.width,
            self.height,
            self.offset
        );
        Ok((w, h))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PieceSize {
    /// Width, the chord width if the piece is curved
    pub width: f64,
    pub height: f64,
}

/// A cutting job as entered by a user: the whole sheet, the piece, the gap and optional curvature
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Job {
    pub sheet: Sheet,
    pub piece: PieceSize,
    #[serde(default)]
    pub gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveSpec>,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            sheet: Sheet {
                width: 1500.0,
                height: 1200.0,
                offset: 3.0,
            },
            piece: PieceSize {
                width: 200.0,
                height: 150.0,
            },
            gap: 5.0,
            curve: Some(CurveSpec {
                enabled: false,
                radius: 1000.0,
            }),
        }
    }
}

impl Job {
    /// Strips the sheet border and builds the request for the solver
    pub fn to_request(&self) -> Result<SolveRequest> {
        let (usable_w, usable_h) = self.sheet.usable_area()?;
        Ok(SolveRequest {
            usable_w,
            usable_h,
            piece_w: self.piece.width,
            piece_h: self.piece.height,
            gap: self.gap,
            curve: self.curve,
        })
    }

    /// Moves placements from usable-area coordinates to sheet coordinates
    pub fn to_sheet_coordinates(&self, pieces: &mut [ExtPlacedPiece]) {
        for p in pieces.iter_mut() {
            p.x += self.sheet.offset;
            p.y += self.sheet.offset;
        }
    }
}
