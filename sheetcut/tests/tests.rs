#[cfg(test)]
mod tests {
    use anyhow::Result;
    use float_cmp::approx_eq;
    use test_case::test_case;

    use sheetcut::entities::{Orientation, Piece, SegmentKind};
    use sheetcut::error::SolveError;
    use sheetcut::geometry::CurveSpec;
    use sheetcut::io::ext_repr::{SolveRequest, SolveWarning};
    use sheetcut::packing::grid::pack;
    use sheetcut::packing::scenario::ScenarioKind;
    use sheetcut::packing::solver::{LayoutSolver, solve_layout};
    use sheetcut::packing::{compare, solve, solve_batch};
    use sheetcut::util::assertions;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn request(usable_w: f64, usable_h: f64, piece_w: f64, piece_h: f64, gap: f64) -> SolveRequest {
        SolveRequest {
            usable_w,
            usable_h,
            piece_w,
            piece_h,
            gap,
            curve: None,
        }
    }

    #[test_case(1494.0, 1194.0, 200.0, 150.0, 5.0; "default sheet")]
    #[test_case(500.0, 430.0, 200.0, 90.0, 5.0; "right remainder")]
    #[test_case(620.0, 400.0, 200.0, 100.0, 10.0; "bottom remainder")]
    #[test_case(1000.0, 700.0, 300.0, 200.0, 0.0; "no gap")]
    #[test_case(100.0, 100.0, 30.0, 30.0, 10.0; "square piece")]
    #[test_case(2440.0, 1220.0, 333.3, 127.7, 3.2; "fractional dimensions")]
    #[test_case(100.0, 100.0, 150.0, 120.0, 0.0; "piece too large")]
    fn layout_is_valid(usable_w: f64, usable_h: f64, piece_w: f64, piece_h: f64, gap: f64) {
        init_logger();
        let layout = solve_layout(usable_w, usable_h, piece_w, piece_h, gap);
        assert!(assertions::pieces_within_area(&layout.placements, usable_w, usable_h));
        assert!(assertions::pieces_disjoint(&layout.placements));
        assert!(assertions::gap_respected(&layout.placements, gap));
    }

    #[test_case(1494.0, 1194.0, 200.0, 150.0, 5.0; "default sheet")]
    #[test_case(500.0, 430.0, 200.0, 90.0, 5.0; "right remainder")]
    #[test_case(620.0, 400.0, 200.0, 100.0, 10.0; "bottom remainder")]
    #[test_case(450.0, 320.0, 100.0, 70.0, 5.0; "rotated baseline wins")]
    fn hybrid_never_worse_than_baselines(usable_w: f64, usable_h: f64, piece_w: f64, piece_h: f64, gap: f64) {
        let solver = LayoutSolver::new(usable_w, usable_h, Piece::new(piece_w, piece_h), gap);
        let hybrid = solver.solve().total_count();
        let horizontal = solver.horizontal_only().total_count();
        let vertical = solver.vertical_only().total_count();
        assert!(hybrid >= horizontal.max(vertical));
    }

    #[test]
    fn default_sheet_counts() {
        let solver = LayoutSolver::new(1494.0, 1194.0, Piece::new(200.0, 150.0), 5.0);
        assert_eq!(solver.horizontal_only().total_count(), 49);
        assert_eq!(solver.vertical_only().total_count(), 45);

        let layout = solver.solve();
        assert_eq!(layout.total_count(), 51);
        assert_eq!(layout.description(), "Main Rotated(45) | Bottom Remain Original(6)");
        // main block first, all rotated, then the bottom strip in the original orientation
        assert!(layout.placements[..45].iter().all(|p| p.rotated));
        assert!(layout.placements[45..].iter().all(|p| !p.rotated));
        assert_eq!(layout.placements[45].y, 1025.0);
    }

    #[test]
    fn equal_trials_keep_the_original_orientation() {
        // both main orientations reach 10 pieces
        let layout = solve_layout(500.0, 430.0, 200.0, 90.0, 5.0);
        assert_eq!(layout.total_count(), 10);
        assert_eq!(layout.segments[0].kind, SegmentKind::Main);
        assert_eq!(layout.segments[0].orientation, Orientation::Original);
        assert_eq!(layout.segments[1].kind, SegmentKind::RightRemainder);
        assert_eq!(layout.segments[1].orientation, Orientation::Rotated);
        assert_eq!(layout.description(), "Main Original(8) | Right Remain Rotated(2)");

        let right = &layout.placements[8..];
        assert_eq!((right[0].x, right[0].y), (410.0, 0.0));
        assert_eq!((right[1].x, right[1].y), (410.0, 205.0));
        assert!(right.iter().all(|p| p.rotated && p.w == 90.0));
    }

    #[test_case(1494.0, 1194.0, 5.0; "default sheet")]
    #[test_case(500.0, 430.0, 5.0; "narrow sheet")]
    #[test_case(731.0, 2011.0, 0.0; "portrait sheet")]
    fn orientation_symmetry(usable_w: f64, usable_h: f64, gap: f64) {
        let a = solve_layout(usable_w, usable_h, 150.0, 200.0, gap);
        let b = solve_layout(usable_w, usable_h, 200.0, 150.0, gap);
        assert_eq!(a.total_count(), b.total_count());
    }

    #[test]
    fn solving_is_idempotent() -> Result<()> {
        let req = request(1494.0, 1194.0, 200.0, 150.0, 5.0);
        let first = solve(&req)?;
        for _ in 0..5 {
            assert_eq!(solve(&req)?, first);
        }
        Ok(())
    }

    #[test]
    fn grid_reference_values() {
        let block = pack(100.0, 100.0, 30.0, 30.0, 10.0);
        assert_eq!((block.cols, block.rows, block.count()), (2, 2, 4));
        assert_eq!((block.used_w, block.used_h), (70.0, 70.0));

        let block = pack(100.0, 100.0, 150.0, 30.0, 0.0);
        assert_eq!(block.count(), 0);
        assert!(block.positions.is_empty());
    }

    #[test]
    fn piece_that_never_fits_is_not_an_error() -> Result<()> {
        let result = solve(&request(100.0, 100.0, 150.0, 120.0, 0.0))?;
        assert_eq!(result.total_count, 0);
        assert!(result.pieces.is_empty());
        assert!(result.description.starts_with("No placement possible"));
        Ok(())
    }

    #[test_case(request(0.0, 100.0, 10.0, 10.0, 0.0), "usable_w"; "zero width")]
    #[test_case(request(100.0, -5.0, 10.0, 10.0, 0.0), "usable_h"; "negative height")]
    #[test_case(request(100.0, 100.0, 0.0, 10.0, 0.0), "piece_w"; "zero piece width")]
    #[test_case(request(100.0, 100.0, 10.0, f64::NAN, 0.0), "piece_h"; "nan piece height")]
    #[test_case(request(100.0, 100.0, 10.0, 10.0, -1.0), "gap"; "negative gap")]
    #[test_case(request(f64::INFINITY, 100.0, 10.0, 10.0, 0.0), "usable_w"; "infinite width")]
    fn invalid_dimensions_are_rejected(req: SolveRequest, expected_field: &str) {
        let err = solve(&req).unwrap_err();
        match err.downcast_ref::<SolveError>() {
            Some(SolveError::InvalidDimension { field, .. }) => assert_eq!(*field, expected_field),
            None => panic!("expected an InvalidDimension error, got {err}"),
        }
    }

    #[test]
    fn enabled_curve_requires_a_positive_radius() {
        let mut req = request(1000.0, 1000.0, 200.0, 150.0, 5.0);
        req.curve = Some(CurveSpec {
            enabled: true,
            radius: 0.0,
        });
        assert!(solve(&req).is_err());

        // a disabled curve is ignored entirely
        req.curve = Some(CurveSpec {
            enabled: false,
            radius: 0.0,
        });
        assert!(solve(&req).is_ok());
    }

    #[test]
    fn curved_piece_is_packed_flat() -> Result<()> {
        let mut req = request(1494.0, 1194.0, 200.0, 150.0, 5.0);
        req.curve = Some(CurveSpec {
            enabled: true,
            radius: 1000.0,
        });
        let result = solve(&req)?;
        assert!(approx_eq!(f64, result.flat_piece_w, 2000.0 * 0.1f64.asin(), epsilon = 1e-9));
        assert!(result.warnings.is_empty());
        // the flattened width is used everywhere, including the remainder strips
        assert!(
            result
                .pieces
                .iter()
                .all(|p| p.w == result.flat_piece_w || p.h == result.flat_piece_w)
        );
        assert_eq!(result.total_count, 51);
        Ok(())
    }

    #[test]
    fn degenerate_curve_is_reported() -> Result<()> {
        let mut req = request(1494.0, 1194.0, 200.0, 150.0, 5.0);
        let plain = solve(&req)?;

        req.curve = Some(CurveSpec {
            enabled: true,
            radius: 90.0,
        });
        let degenerate = solve(&req)?;
        assert_eq!(degenerate.flat_piece_w, 200.0);
        assert_eq!(degenerate.total_count, plain.total_count);
        assert_eq!(
            degenerate.warnings,
            vec![SolveWarning::DegenerateCurve {
                chord: 200.0,
                radius: 90.0
            }]
        );
        assert!(plain.warnings.is_empty());
        Ok(())
    }

    #[test]
    fn comparison_ranks_by_count() -> Result<()> {
        let comparison = compare(&request(1494.0, 1194.0, 200.0, 150.0, 5.0))?;
        let kinds = comparison.scenarios.iter().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![ScenarioKind::Hybrid, ScenarioKind::HorizontalOnly, ScenarioKind::VerticalOnly]
        );
        assert_eq!(comparison.best().layout.total_count(), 51);

        let expected = 51.0 * 200.0 * 150.0 / (1494.0 * 1194.0) * 100.0;
        assert!(approx_eq!(f64, comparison.best().efficiency_pct, expected, epsilon = 1e-9));
        Ok(())
    }

    #[test]
    fn comparison_ties_keep_scenario_order() -> Result<()> {
        // square piece: every scenario is the same single grid
        let comparison = compare(&request(100.0, 100.0, 30.0, 30.0, 10.0))?;
        let kinds = comparison.scenarios.iter().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![ScenarioKind::HorizontalOnly, ScenarioKind::VerticalOnly, ScenarioKind::Hybrid]
        );
        assert!(comparison.scenarios.iter().all(|s| s.layout.total_count() == 4));
        Ok(())
    }

    #[test]
    fn batch_matches_sequential() {
        let requests = vec![
            request(1494.0, 1194.0, 200.0, 150.0, 5.0),
            request(500.0, 430.0, 200.0, 90.0, 5.0),
            request(0.0, 430.0, 200.0, 90.0, 5.0),
            request(620.0, 400.0, 200.0, 100.0, 10.0),
        ];
        let batch = solve_batch(&requests);
        assert_eq!(batch.len(), requests.len());
        for (req, res) in requests.iter().zip(batch) {
            match (solve(req), res) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                _ => panic!("batch and sequential results differ for {req:?}"),
            }
        }
    }

    #[test]
    fn request_round_trips_through_json() -> Result<()> {
        let json = r#"{"usable_w": 1494, "usable_h": 1194, "piece_w": 200, "piece_h": 150, "gap": 5,
                       "curve": {"enabled": true, "radius": 1000}}"#;
        let req: SolveRequest = serde_json::from_str(json)?;
        assert_eq!(req.curve.map(|c| c.radius), Some(1000.0));

        let without_gap: SolveRequest =
            serde_json::from_str(r#"{"usable_w": 10, "usable_h": 10, "piece_w": 2, "piece_h": 2}"#)?;
        assert_eq!(without_gap.gap, 0.0);
        assert_eq!(without_gap.curve, None);
        Ok(())
    }
}
