// =========================================================================
// FALSIFY-MX: Matrix algebra contract
//
// Each test states an identity the rest of a network relies on and tries
// to break it on a concrete input.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A, exactly
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from([[1.5, -2.0, 3.25], [4.0, 0.1, -6.0]]);
    let att = a.transpose().transpose();

    assert_eq!(att, a, "FALSIFIED MX-001: (A^T)^T != A");
}

/// FALSIFY-MX-002: Transpose swaps shape and elements
#[test]
fn falsify_mx_002_transpose_swaps() {
    let a = Matrix::from_vec(3, 5, (0..15).map(|i| i as f32).collect()).expect("valid");
    let at = a.transpose();

    assert_eq!(at.shape(), (5, 3), "FALSIFIED MX-002: shape={:?}", at.shape());
    for i in 0..3 {
        for j in 0..5 {
            assert_eq!(
                at[(j, i)],
                a[(i, j)],
                "FALSIFIED MX-002: A^T[{j},{i}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-003: Matmul shape: (m x k) * (k x n) = (m x n)
#[test]
fn falsify_mx_003_times_shape() {
    let c = Matrix::ones(2, 3)
        .times(&Matrix::ones(3, 4))
        .expect("compatible dims");

    assert_eq!(c.shape(), (2, 4), "FALSIFIED MX-003: shape={:?}", c.shape());
    assert!(
        c.as_slice().iter().all(|&x| x == 3.0),
        "FALSIFIED MX-003: ones(2,3)*ones(3,4) should be all 3"
    );
}

/// FALSIFY-MX-004: Identity: A * I = I * A = A, exactly
#[test]
fn falsify_mx_004_identity_times() {
    let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let eye = Matrix::eye(3);

    assert_eq!(a.times(&eye).expect("3x3"), a, "FALSIFIED MX-004: A*I != A");
    assert_eq!(eye.times(&a).expect("3x3"), a, "FALSIFIED MX-004: I*A != A");
}

/// FALSIFY-MX-005: Scaling by one is the identity, exactly
#[test]
fn falsify_mx_005_scalar_one() {
    let a = Matrix::from([[0.1, -0.2], [1.0e-20, 3.0e20]]);
    assert_eq!(a.scalar_times(1.0), a, "FALSIFIED MX-005: 1*A != A");
}

/// FALSIFY-MX-006: Add-then-subtract restores A for representable values
#[test]
fn falsify_mx_006_plus_minus_inverse() {
    let a = Matrix::from([[1.0, -2.5], [8.0, 0.75]]);
    let b = Matrix::from([[4.0, 0.5], [-16.0, 1.25]]);
    let back = a.plus(&b).and_then(|s| s.minus(&b)).expect("same shape");

    assert_eq!(back, a, "FALSIFIED MX-006: (A+B)-B != A");
}

/// FALSIFY-MX-007: Chained products associate within tolerance
#[test]
fn falsify_mx_007_times_associative() {
    let a = Matrix::from([[0.3, -1.2, 2.0], [1.1, 0.7, -0.4]]);
    let b = Matrix::from([[1.5, 0.2], [-0.6, 2.2], [0.9, -1.3]]);
    let c = Matrix::from([[0.25, -3.0, 1.0], [2.0, 0.5, -0.75]]);

    let left = a.times(&b).and_then(|ab| ab.times(&c)).expect("compatible");
    let right = b.times(&c).and_then(|bc| a.times(&bc)).expect("compatible");

    assert_eq!(left.shape(), right.shape());
    for (l, r) in left.as_slice().iter().zip(right.as_slice()) {
        assert!(
            (l - r).abs() < 1e-4,
            "FALSIFIED MX-007: (AB)C={l} vs A(BC)={r}"
        );
    }
}

/// FALSIFY-MX-008: (AB)^T = B^T A^T
#[test]
fn falsify_mx_008_transpose_of_product() {
    let a = Matrix::from([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    let b = Matrix::from([[7.0, 8.0, 9.0], [10.0, 11.0, 12.0]]);

    let lhs = a.times(&b).expect("3x2 * 2x3").transpose();
    let rhs = b.transpose().times(&a.transpose()).expect("3x2 * 2x3");

    assert_eq!(lhs, rhs, "FALSIFIED MX-008: (AB)^T != B^T A^T");
}

/// FALSIFY-MX-009: Worked 2x2 example
#[test]
fn falsify_mx_009_worked_2x2() {
    let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from([[5.0, 6.0], [7.0, 8.0]]);

    assert_eq!(
        a.times(&b).expect("2x2"),
        Matrix::from([[19.0, 22.0], [43.0, 50.0]])
    );
    assert_eq!(
        a.plus(&b).expect("2x2"),
        Matrix::from([[6.0, 8.0], [10.0, 12.0]])
    );
    assert_eq!(a.transpose(), Matrix::from([[1.0, 3.0], [2.0, 4.0]]));
    assert_eq!(a.sum(), 10.0);
}

/// FALSIFY-MX-010: rms_error is non-negative, zero on itself, symmetric
#[test]
fn falsify_mx_010_rms_error_metric() {
    let a = Matrix::from([[0.5, -1.0, 2.0]]);
    let b = Matrix::from([[1.5, 1.0, -2.0]]);

    assert_eq!(a.rms_error(&a).expect("same"), 0.0, "FALSIFIED MX-010: d(a,a) != 0");
    let ab = a.rms_error(&b).expect("same");
    let ba = b.rms_error(&a).expect("same");
    assert!(ab > 0.0, "FALSIFIED MX-010: d(a,b)={ab} <= 0");
    assert_eq!(ab, ba, "FALSIFIED MX-010: d(a,b)={ab} != d(b,a)={ba}");
    // sqrt(1 + 4 + 16)
    assert!((ab - 21.0_f32.sqrt()).abs() < 1e-6);
}

/// FALSIFY-MX-011: Hadamard product is commutative
#[test]
fn falsify_mx_011_hadamard_commutative() {
    let a = Matrix::from([[1.5, -2.0], [0.3, 7.0]]);
    let b = Matrix::from([[-0.5, 4.0], [3.3, 0.125]]);

    assert_eq!(
        a.hadamard_times(&b).expect("same"),
        b.hadamard_times(&a).expect("same"),
        "FALSIFIED MX-011: A.*B != B.*A"
    );
}
