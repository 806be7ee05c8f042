//! Integration tests exercising the public API the way a network does.

use nnmatrix::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

fn sigmoid(m: &Matrix) -> Matrix {
    let mut out = m.clone();
    for i in 0..m.n_rows() {
        for j in 0..m.n_cols() {
            out[(i, j)] = 1.0 / (1.0 + (-m[(i, j)]).exp());
        }
    }
    out
}

#[test]
fn test_single_layer_gradient_step_reduces_error() {
    let mut weights = Matrix::from([[0.1, -0.2], [0.4, 0.3]]);
    let bias = Matrix::filled(2, 1, 0.0);
    let input = Matrix::from([[1.0], [0.5]]);
    let target = Matrix::from([[1.0], [0.0]]);

    let forward = |w: &Matrix| -> Result<Matrix> {
        Ok(sigmoid(&w.times(&input)?.plus(&bias)?))
    };

    let before = forward(&weights)
        .and_then(|out| out.rms_error(&target))
        .expect("shapes line up");

    for _ in 0..50 {
        let out = forward(&weights).expect("shapes line up");
        // dE/dz for squared error through a sigmoid
        let one = Matrix::filled(2, 1, 1.0);
        let delta = out
            .minus(&target)
            .and_then(|e| e.hadamard_times(&out))
            .and_then(|e| e.hadamard_times(&one.minus(&out)?))
            .expect("same shape");
        let grad = delta.times(&input.transpose()).expect("2x1 * 1x2");
        let step = weights.minus(&grad.scalar_times(0.5)).expect("same shape");
        weights.set_from(&step).expect("same shape");
    }

    let after = forward(&weights)
        .and_then(|out| out.rms_error(&target))
        .expect("shapes line up");
    assert!(after < before, "error went from {before} to {after}");
}

#[test]
fn test_mismatch_is_reported_with_both_shapes() {
    let err = Matrix::new(2, 3)
        .times(&Matrix::new(2, 3))
        .expect_err("cols=3 != rows=2");
    let msg = err.to_string();
    assert!(msg.contains("(2,3) vs (2,3)"), "unexpected message: {msg}");

    let err = Matrix::new(2, 2)
        .plus(&Matrix::new(3, 2))
        .expect_err("2x2 vs 3x2");
    assert!(matches!(err, MatrixError::ShapeMismatch { .. }));
}

#[test]
fn test_network_weights_share_one_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("weights.bin");

    let w1 = Matrix::from([[0.5, -0.25, 1.0], [2.0, 0.125, -3.5]]);
    let w2 = Matrix::from([[1.5], [-0.75]]);

    {
        let mut out = BufWriter::new(File::create(&path).expect("create file"));
        w1.save(&mut out).expect("write w1");
        w2.save(&mut out).expect("write w2");
        out.flush().expect("flush");
    }

    let mut input = BufReader::new(File::open(&path).expect("open file"));
    let mut r1 = Matrix::new(2, 3);
    let mut r2 = Matrix::new(2, 1);
    r1.load(&mut input).expect("read w1");
    r2.load(&mut input).expect("read w2");

    assert_eq!(r1, w1);
    assert_eq!(r2, w2);

    // nothing left for a third matrix
    let mut r3 = Matrix::new(1, 1);
    assert!(matches!(r3.load(&mut input), Err(MatrixError::Io(_))));
}

#[test]
fn test_print_layer_output() {
    let m = Matrix::from([[1.0 / 3.0, -2.0], [0.5, 10.0]]);
    let mut out = Vec::new();
    m.print(&mut out).expect("vec write");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "[ 0.33333 -2 ]\n[ 0.5 10 ]\n"
    );
}
