use lattice_knot::pipeline::{analyze, AnalysisOptions, InvariantOutcome};
use lattice_knot::topology::polymer::{AxisOrder, Polymer};
use lattice_knot::KnotError;

// Closed loop visiting the corners of a unit cube: an unknot whose sheared
// projection still shows one crossing.
const CUBE: &str = "0 0 0\n0 0 1\n1 0 1\n1 0 0\n1 1 0\n1 1 1\n0 1 1\n0 1 0\n";

// Space-filling loop on the 4x4x4 lattice (a Hamiltonian cycle through all
// 64 sites), dense enough to exercise every extraction case.
const DENSE_4X4X4: &str = "0 0 0\n0 0 1\n0 0 2\n0 0 3\n1 0 3\n1 0 2\n1 0 1\n1 0 0\n\
2 0 0\n2 0 1\n2 0 2\n2 0 3\n2 1 3\n2 1 2\n2 2 2\n2 2 1\n2 2 0\n2 3 0\n3 3 0\n\
3 3 1\n2 3 1\n2 3 2\n3 3 2\n3 3 3\n2 3 3\n1 3 3\n1 3 2\n1 3 1\n1 3 0\n0 3 0\n\
0 3 1\n0 3 2\n0 3 3\n0 2 3\n0 1 3\n1 1 3\n1 1 2\n1 1 1\n1 1 0\n2 1 0\n2 1 1\n\
3 1 1\n3 1 2\n3 1 3\n3 0 3\n3 0 2\n3 0 1\n3 0 0\n3 1 0\n3 2 0\n3 2 1\n3 2 2\n\
3 2 3\n2 2 3\n1 2 3\n1 2 2\n1 2 1\n1 2 0\n0 2 0\n0 2 1\n0 2 2\n0 1 2\n0 1 1\n\
0 1 0\n";

#[test]
fn cube_loop_reduces_to_the_unknot() {
    let polymer = Polymer::parse(CUBE, AxisOrder::Xyz).unwrap();
    let analysis = analyze(&polymer, AnalysisOptions::default()).unwrap();
    assert_eq!(analysis.crossings_before, 1);
    assert_eq!(analysis.crossings_after, Some(0));
    assert!(matches!(
        analysis.outcome,
        InvariantOutcome::TooFewCrossings
    ));
}

#[test]
fn cube_loop_is_unknotted_along_every_axis() {
    for order in [AxisOrder::Xyz, AxisOrder::Yzx, AxisOrder::Zxy] {
        let polymer = Polymer::parse(CUBE, order).unwrap();
        let analysis = analyze(&polymer, AnalysisOptions::default()).unwrap();
        assert!(
            matches!(analysis.outcome, InvariantOutcome::TooFewCrossings),
            "axis order {order:?} should still yield the unknot",
        );
    }
}

#[test]
fn dense_loop_invariants_are_internally_consistent() {
    for order in [AxisOrder::Xyz, AxisOrder::Yzx, AxisOrder::Zxy] {
        let polymer = Polymer::parse(DENSE_4X4X4, order).unwrap();
        let analysis = analyze(&polymer, AnalysisOptions::default()).unwrap();
        match analysis.outcome {
            InvariantOutcome::Computed {
                ref dowker,
                ref alexander,
                ref determinant,
            } => {
                let after = analysis.crossings_after.unwrap();
                assert!(after <= analysis.crossings_before);
                assert_eq!(dowker.len(), after);
                assert_eq!(alexander.matrix.size(), after);
                assert!(determinant.is_some());
            }
            InvariantOutcome::TooFewCrossings | InvariantOutcome::NoUnderpass => {}
        }
    }
}

#[test]
fn open_chain_is_rejected() {
    // Last point does not close back to the first with a unit step.
    let polymer = Polymer::parse("0 0 0\n1 0 0\n2 0 0\n", AxisOrder::Xyz).unwrap();
    let err = analyze(&polymer, AnalysisOptions::default()).unwrap_err();
    assert!(matches!(err, KnotError::NonAdjacentPoints { .. }));
}

#[test]
fn revisited_site_is_rejected() {
    let polymer = Polymer::parse(
        "0 0 0\n1 0 0\n1 1 0\n0 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n",
        AxisOrder::Xyz,
    )
    .unwrap();
    let err = analyze(&polymer, AnalysisOptions::default()).unwrap_err();
    assert!(matches!(err, KnotError::DuplicateSite { .. }));
}
