//! Golden outputs and cross-pattern properties.

use std::sync::Arc;
use std::thread;

use rstest::rstest;

use ascii_patterns::errors::Result;
use ascii_patterns::{
    Butterfly, Diamond, Pattern, PatternError, PatternSpec, Polygon, Pyramid, Rhombus, Sandglass,
    Shuriken, Square, Swastik, Triangle, XPattern,
};

fn rows(text: &str) -> Vec<&str> {
    text.lines().collect()
}

fn is_vertically_mirrored(text: &str) -> bool {
    let rows = rows(text);
    rows.iter().eq(rows.iter().rev())
}

// ==================== Golden Scenarios ====================

#[test]
fn test_triangle_golden() -> Result<()> {
    assert_eq!(Triangle::new(3)?.draw(), "* \n* * \n* * * \n");
    Ok(())
}

#[test]
fn test_square_golden() -> Result<()> {
    assert_eq!(Square::new(3)?.draw(), "* * * \n* * * \n* * * \n");
    Ok(())
}

#[test]
fn test_pyramid_golden() -> Result<()> {
    assert_eq!(Pyramid::new(3)?.draw(), "  * \n * * \n* * * \n");
    Ok(())
}

#[test]
fn test_butterfly_golden() -> Result<()> {
    assert_eq!(
        Butterfly::new(3)?.draw(),
        " *   * \n** **\n*   *\n*   *\n** **\n *   * \n"
    );
    Ok(())
}

#[test]
fn test_polygon_triangle_grid() -> Result<()> {
    let out = Polygon::new(15, 3)?.draw();
    let rows = rows(&out);
    assert_eq!(rows.len(), 31);
    assert!(rows.iter().all(|row| row.len() == 31));
    Ok(())
}

#[test]
fn test_polygon_rejects_two_sides() {
    let err = Polygon::new(15, 2).unwrap_err();
    assert!(matches!(err, PatternError::InvalidParameter { .. }));
    assert!(err.to_string().contains("at least 3 sides"));
}

// ==================== Shape Dimensions ====================

#[rstest]
fn test_pyramid_dimensions(#[values(1, 2, 5, 8)] n: usize) -> Result<()> {
    let out = Pyramid::new(n)?.draw();
    let rows = rows(&out);
    assert_eq!(rows.len(), n);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), n + i + 1);
        assert_eq!(row.matches('*').count(), i + 1);
    }
    Ok(())
}

#[rstest]
fn test_output_ends_with_newline(#[values(1, 3, 7)] n: usize) -> Result<()> {
    for out in [
        Triangle::new(n)?.draw(),
        Square::new(n)?.draw(),
        Diamond::new(n)?.draw(),
        Butterfly::new(n)?.draw(),
    ] {
        assert!(out.ends_with('\n'));
        assert!(!out.ends_with("\n\n"));
    }
    Ok(())
}

// ==================== Symmetry ====================

#[rstest]
fn test_symmetric_shapes(#[values(1, 2, 5, 9)] n: usize) -> Result<()> {
    assert!(is_vertically_mirrored(&Diamond::new(n)?.draw()));
    assert!(is_vertically_mirrored(&Rhombus::new(n)?.draw()));
    assert!(is_vertically_mirrored(&Butterfly::new(n)?.draw()));
    Ok(())
}

#[rstest]
fn test_x_pattern_has_both_symmetries(#[values(3, 5, 11)] n: usize) -> Result<()> {
    let out = XPattern::new(n)?.draw();
    assert!(is_vertically_mirrored(&out));
    assert!(rows(&out)
        .iter()
        .all(|row| row.chars().eq(row.chars().rev())));
    Ok(())
}

// ==================== Parity Constraints ====================

#[rstest]
#[case(PatternSpec::Swastik { size: 4 })]
#[case(PatternSpec::Swastik { size: 3 })]
#[case(PatternSpec::Sandglass { size: 8 })]
#[case(PatternSpec::Shuriken { size: 6 })]
#[case(PatternSpec::Shuriken { size: 3 })]
#[case(PatternSpec::XPattern { size: 2 })]
#[case(PatternSpec::XPattern { size: 1 })]
fn test_parity_constraints_reject(#[case] spec: PatternSpec) {
    assert!(matches!(
        spec.build(),
        Err(PatternError::InvalidParameter { .. })
    ));
}

#[test]
fn test_parity_constraints_accept_odd_sizes() {
    for size in (5..=21).step_by(2) {
        assert!(Swastik::new(size).is_ok(), "swastik {size}");
        assert!(Shuriken::new(size).is_ok(), "shuriken {size}");
        assert!(Sandglass::new(size).is_ok(), "sandglass {size}");
        assert!(XPattern::new(size).is_ok(), "x pattern {size}");
    }
}

#[test]
fn test_zero_sizes_rejected_everywhere() {
    let specs = [
        PatternSpec::Ganesh { size: 0 },
        PatternSpec::Circle { size: 0 },
        PatternSpec::Heart { size: 0 },
        PatternSpec::Star { size: 0 },
        PatternSpec::Pentagram { size: 0 },
        PatternSpec::Polygon { size: 0, sides: 5 },
        PatternSpec::ZigZag { height: 0, width: 3 },
        PatternSpec::Wave {
            length: 10,
            amplitude: 2,
            frequency: 0,
        },
    ];
    for spec in specs {
        assert!(spec.build().is_err(), "{spec:?}");
    }
}

#[rstest]
#[case(PatternSpec::Triangle { size: usize::MAX })]
#[case(PatternSpec::Square { size: 5_000 })]
#[case(PatternSpec::Diamond { size: usize::MAX / 2 })]
#[case(PatternSpec::Butterfly { size: usize::MAX })]
#[case(PatternSpec::Sandglass { size: usize::MAX })]
#[case(PatternSpec::Circle { size: usize::MAX })]
#[case(PatternSpec::XPattern { size: usize::MAX })]
#[case(PatternSpec::Star { size: 1 << 40 })]
#[case(PatternSpec::Ganesh { size: usize::MAX })]
#[case(PatternSpec::Kite { size: usize::MAX })]
#[case(PatternSpec::Polygon { size: 15, sides: usize::MAX })]
#[case(PatternSpec::Polygon { size: usize::MAX, sides: 6 })]
#[case(PatternSpec::Ladder { height: 2, width: usize::MAX })]
#[case(PatternSpec::ZigZag { height: 3, width: usize::MAX })]
#[case(PatternSpec::Rectangle { height: 1, width: usize::MAX, hollow: true })]
#[case(PatternSpec::Wave { length: usize::MAX, amplitude: 1, frequency: 1 })]
#[case(PatternSpec::Wave { length: 10, amplitude: usize::MAX, frequency: 1 })]
#[case(PatternSpec::HalfPyramid { height: usize::MAX, variant: "left".to_string() })]
fn test_oversized_parameters_rejected(#[case] spec: PatternSpec) {
    let err = spec.build().unwrap_err();
    assert!(matches!(err, PatternError::InvalidParameter { .. }), "{spec:?}");
    assert!(err.to_string().contains("too large"), "{err}");
}

// ==================== Determinism & Concurrency ====================

#[test]
fn test_render_is_deterministic_across_threads() {
    let pattern: Arc<dyn Pattern> = Arc::new(Swastik::new(11).expect("valid size"));
    let expected = pattern.draw();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pattern = Arc::clone(&pattern);
            thread::spawn(move || pattern.draw())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}
