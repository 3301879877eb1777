//! End-to-end tests for the graph-projection operators.
//!
//! These tests validate the projection contract across all three
//! factorization strategies and the shared indicator interface.

use nalgebra::DMatrix;
use prox_core::linalg::sparse::from_triplets;
use prox_core::{GraphIndicator, LinearOperator, NonPosIndicator, ProxError, ProxOperator};

fn residual_inf(ind: &GraphIndicator, x: &[f64], y: &[f64]) -> f64 {
    let mut ax = vec![0.0; ind.nrows()];
    ind.operator().apply(x, &mut ax);
    ax.iter()
        .zip(y.iter())
        .map(|(&a, &b)| (a - b).abs())
        .fold(0.0f64, f64::max)
}

fn tall_matrix() -> DMatrix<f64> {
    DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0])
}

#[test]
fn test_tall_concrete_scenario() {
    // A = [[1,0],[0,1],[1,1]], c = (1,1), d = 0:
    // (I + AᵀA) x = c with Gram [[3,1],[1,3]] gives x = (0.25, 0.25).
    let ind = GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap();

    let (x, y) = ind.project(&[1.0, 1.0], &[0.0, 0.0, 0.0], 1.0).unwrap();
    assert!((x[0] - 0.25).abs() < 1e-12);
    assert!((x[1] - 0.25).abs() < 1e-12);
    assert_eq!(y.len(), 3);
    assert!((y[2] - 0.5).abs() < 1e-12);
    assert!(residual_inf(&ind, &x, &y) < 1e-12);
}

#[test]
fn test_graph_residual_all_strategies() {
    let c = [0.7, -1.3];
    let cases: Vec<GraphIndicator> = vec![
        // Tall dense
        GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap(),
        // Wide dense (transpose shape)
        GraphIndicator::new(
            LinearOperator::dense(DMatrix::from_row_slice(
                2,
                3,
                &[1.0, 0.0, 1.0, 0.0, 1.0, 1.0],
            ))
            .unwrap(),
        )
        .unwrap(),
        // Sparse
        GraphIndicator::new(
            LinearOperator::sparse(from_triplets(
                3,
                2,
                vec![(0, 0, 1.0), (1, 1, 1.0), (2, 0, 1.0), (2, 1, 1.0)],
            ))
            .unwrap(),
        )
        .unwrap(),
    ];

    for ind in &cases {
        let cq: Vec<f64> = (0..ind.ncols()).map(|j| c[j % 2] + j as f64).collect();
        let dq: Vec<f64> = (0..ind.nrows()).map(|i| 0.5 - i as f64).collect();
        let (x, y) = ind.project(&cq, &dq, 1.0).unwrap();

        assert!(
            residual_inf(ind, &x, &y) < 1e-10,
            "graph residual too large for {}x{}",
            ind.nrows(),
            ind.ncols()
        );
        assert_eq!(ind.evaluate(&x, &y), 0.0);
    }
}

#[test]
fn test_projection_idempotent_on_set() {
    let ind = GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap();

    let c = [3.0, -2.0];
    let mut d = vec![0.0; 3];
    ind.operator().apply(&c, &mut d);

    let (x, y) = ind.project(&c, &d, 1.0).unwrap();
    for j in 0..2 {
        assert!((x[j] - c[j]).abs() < 1e-10);
    }
    for i in 0..3 {
        assert!((y[i] - d[i]).abs() < 1e-10);
    }
}

#[test]
fn test_dense_sparse_consistency() {
    let dense = GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap();
    let sparse = GraphIndicator::new(
        LinearOperator::sparse(from_triplets(
            3,
            2,
            vec![(0, 0, 1.0), (1, 1, 1.0), (2, 0, 1.0), (2, 1, 1.0)],
        ))
        .unwrap(),
    )
    .unwrap();

    let c = [0.2, 1.9];
    let d = [-1.0, 0.5, 2.0];
    let (xd, yd) = dense.project(&c, &d, 1.0).unwrap();
    let (xs, ys) = sparse.project(&c, &d, 1.0).unwrap();

    for j in 0..2 {
        assert!((xd[j] - xs[j]).abs() < 1e-10, "x mismatch at {}", j);
    }
    for i in 0..3 {
        assert!((yd[i] - ys[i]).abs() < 1e-10, "y mismatch at {}", i);
    }
}

#[test]
fn test_moreau_decomposition_across_shapes() {
    // The orthogonal complement of the graph of A is the (swapped) graph
    // of -Aᵀ, so projecting (d, c) through the wide strategy must return
    // exactly the Moreau complement of the tall projection.
    let a = tall_matrix();
    let tall = GraphIndicator::new(LinearOperator::dense(a.clone()).unwrap()).unwrap();
    let wide = GraphIndicator::new(LinearOperator::dense(-a.transpose()).unwrap()).unwrap();

    let c = [1.0, -0.5];
    let d = [0.25, 2.0, -1.5];
    let (x, y) = tall.project(&c, &d, 1.0).unwrap();
    let (w, u) = wide.project(&d, &c, 1.0).unwrap();

    for i in 0..3 {
        assert!((w[i] - (d[i] - y[i])).abs() < 1e-10, "w mismatch at {}", i);
    }
    for j in 0..2 {
        assert!((u[j] - (c[j] - x[j])).abs() < 1e-10, "u mismatch at {}", j);
    }
}

#[test]
fn test_factorization_reused_across_calls() {
    let inds = vec![
        GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap(),
        GraphIndicator::new(
            LinearOperator::sparse(from_triplets(2, 4, vec![(0, 0, 1.0), (1, 3, -2.0)])).unwrap(),
        )
        .unwrap(),
    ];

    for ind in &inds {
        for k in 0..10 {
            let c: Vec<f64> = (0..ind.ncols()).map(|j| (j + k) as f64).collect();
            let d: Vec<f64> = (0..ind.nrows()).map(|i| -(i as f64) * k as f64).collect();
            ind.project(&c, &d, 1.0).unwrap();
        }
        assert_eq!(ind.factorization_count(), 1);
    }
}

#[test]
fn test_row_operator_form() {
    // A single vector is a 1×n row operator: the graph is a hyperplane-like
    // subspace of R^{n+1}.
    let ind = GraphIndicator::new(LinearOperator::row(&[1.0, 1.0]).unwrap()).unwrap();
    assert_eq!(ind.nrows(), 1);
    assert_eq!(ind.ncols(), 2);

    let (x, y) = ind.project(&[1.0, 0.0], &[2.0], 1.0).unwrap();
    assert!(residual_inf(&ind, &x, &y) < 1e-12);
    // x1 + x2 = y; minimizer of the quadratic is x = (4/3, 1/3), y = 5/3.
    assert!((x[0] - 4.0 / 3.0).abs() < 1e-12);
    assert!((x[1] - 1.0 / 3.0).abs() < 1e-12);
    assert!((y[0] - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_degenerate_inputs() {
    let err = LinearOperator::dense(DMatrix::zeros(0, 4)).unwrap_err();
    assert!(matches!(err, ProxError::InvalidOperator { rows: 0, cols: 4 }));

    let ind = GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap();
    let err = ind.project(&[1.0, 1.0], &[0.0], 1.0).unwrap_err();
    assert!(matches!(
        err,
        ProxError::DimensionMismatch {
            expected: 3,
            actual: 1
        }
    ));
}

#[test]
fn test_scale_parameter_is_inert() {
    let ind = GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap();
    let c = [1.0, 1.0];
    let d = [0.0, 1.0, 0.0];

    let (x1, y1) = ind.project(&c, &d, 1.0).unwrap();
    let (x2, y2) = ind.project(&c, &d, 1e6).unwrap();
    assert_eq!(x1, x2);
    assert_eq!(y1, y2);
}

#[test]
fn test_nonpos_orthant_contract() {
    let ind = NonPosIndicator::new(3);
    let y = ind.project(&[1.0, -2.0, 3.0]).unwrap();
    assert_eq!(y, vec![0.0, -2.0, 0.0]);
    assert_eq!(ind.evaluate(&y), 0.0);
    assert!(ind.is_convex() && ind.is_set() && ind.is_cone());
}

#[test]
fn test_concurrent_projection_after_construction() {
    // Construction populates the cache; afterwards project is read-only
    // and may be invoked from several threads at once.
    let ind = GraphIndicator::new(LinearOperator::dense(tall_matrix()).unwrap()).unwrap();

    std::thread::scope(|s| {
        for t in 0..4 {
            let ind = &ind;
            s.spawn(move || {
                for k in 0..25 {
                    let c = [t as f64, k as f64];
                    let d = [0.0, 1.0, -(t as f64)];
                    let (x, y) = ind.project(&c, &d, 1.0).unwrap();
                    assert!(residual_inf(ind, &x, &y) < 1e-10);
                }
            });
        }
    });

    assert_eq!(ind.factorization_count(), 1);
}
