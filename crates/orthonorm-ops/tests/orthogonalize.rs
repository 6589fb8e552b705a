use approx::assert_relative_eq;
use orthonorm_ops::{
    metrics::{
        column_norms, dot_columns, gram_matrix, is_orthonormal, numerical_rank,
        orthogonality_defect,
    },
    orthogonalize, orthogonalize_as, OrthoError,
};
use orthonorm_tensor::Matrix;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols).map(|_| rng.random_range(-1.0..1.0)).collect();
    Matrix::from_shape_vec([rows, cols], data).expect("shape matches data")
}

#[test]
fn full_rank_inputs_become_orthonormal() {
    for (seed, [rows, cols]) in [[8, 5], [6, 6], [3, 1], [20, 7]].into_iter().enumerate() {
        let u = random_matrix(rows, cols, seed as u64);
        let v = orthogonalize(&u);

        assert_eq!(v.shape, u.shape);
        assert!(orthogonality_defect(&v) < 1e-9, "{rows}x{cols}");
        for n in column_norms(&v) {
            assert_relative_eq!(n, 1.0, epsilon = 1e-9);
        }
        assert_eq!(numerical_rank(&v, 1e-9), cols);
    }
}

#[test]
fn gram_matrix_of_output_is_identity() {
    let v = orthogonalize(&random_matrix(5, 4, 42));
    let g = gram_matrix(&v);
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(*g.get([i, j]).expect("in bounds"), expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn output_spans_the_input_columns() -> Result<(), OrthoError> {
    let u = random_matrix(6, 4, 3);
    let v = orthogonalize(&u);

    // u_i == sum_j <v_j, u_i> v_j for a full-rank input
    for i in 0..u.cols() {
        let u_i = u.column(i)?.to_vec();
        let mut recon = vec![0.0; u.rows()];
        for v_j in v.columns() {
            let v_j = v_j.to_vec();
            let coeff: f64 = v_j.iter().zip(u_i.iter()).map(|(a, b)| a * b).sum();
            recon.iter_mut().zip(v_j.iter()).for_each(|(r, x)| *r += coeff * x);
        }
        for (r, x) in recon.iter().zip(u_i.iter()) {
            assert_relative_eq!(*r, *x, epsilon = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn textbook_example() -> Result<(), OrthoError> {
    let u = Matrix::from_rows(vec![vec![1i32, 1], vec![0, 1]])?;
    let v = orthogonalize_as::<f64, _>(&u);

    let c0 = v.column(0)?.to_vec();
    let c1 = v.column(1)?.to_vec();
    assert_relative_eq!(c0[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(c0[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(c1[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(c1[1], 1.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn scalar_multiple_column_collapses_to_zero() -> Result<(), OrthoError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let u = Matrix::from_rows(vec![vec![1.0f64, 1.0], vec![0.0, 0.0]])?;
    let v = orthogonalize(&u);

    assert_eq!(v.column(0)?.to_vec(), vec![1.0, 0.0]);
    for x in v.column(1)?.iter() {
        assert_relative_eq!(*x, 0.0, epsilon = 1e-12);
    }
    assert!(is_orthonormal(&v, 1e-9));
    assert_eq!(numerical_rank(&v, 1e-9), 1);
    Ok(())
}

#[test]
fn wide_matrix_keeps_only_rank_many_columns() -> Result<(), OrthoError> {
    // the last two columns are integer combinations of the first two
    let u = Matrix::<f64>::from_rows(vec![
        vec![1.0, 0.0, 1.0, 2.0],
        vec![0.0, 1.0, 1.0, 3.0],
    ])?;
    let v = orthogonalize(&u);

    assert_eq!(v.shape, [2, 4]);
    assert_eq!(numerical_rank(&v, 1e-9), 2);
    assert!(is_orthonormal(&v, 1e-9));
    assert!(v.as_slice().iter().all(|x| x.is_finite()));
    Ok(())
}

#[test]
fn huge_entries_do_not_overflow() -> Result<(), OrthoError> {
    // the squared norm of either column exceeds f64::MAX
    let u = Matrix::from_rows(vec![vec![1e200f64, 0.0], vec![1e200, 1.0]])?;
    let v = orthogonalize(&u);

    let half = std::f64::consts::FRAC_1_SQRT_2;
    assert!(v.as_slice().iter().all(|x| x.is_finite()));
    assert_relative_eq!(v.column(0)?.to_vec()[0], half, epsilon = 1e-12);
    assert_relative_eq!(v.column(0)?.to_vec()[1], half, epsilon = 1e-12);
    assert_relative_eq!(v.column(1)?.to_vec()[0], -half, epsilon = 1e-12);
    assert_relative_eq!(v.column(1)?.to_vec()[1], half, epsilon = 1e-12);
    assert!(is_orthonormal(&v, 1e-9));
    Ok(())
}

#[test]
fn zero_size_inputs_keep_their_shape() {
    let v = orthogonalize(&Matrix::<f64>::zeros([4, 0]));
    assert_eq!(v.shape, [4, 0]);
    assert_eq!(v.cols(), 0);

    let v = orthogonalize(&Matrix::<f64>::zeros([0, 3]));
    assert_eq!(v.shape, [0, 3]);
    assert!(v.is_empty());
}

#[test]
fn orthonormal_input_is_a_fixed_point() -> Result<(), OrthoError> {
    let (s, c) = 0.3f64.sin_cos();
    let rot = Matrix::from_rows(vec![
        vec![c, -s, 0.0],
        vec![s, c, 0.0],
        vec![0.0, 0.0, 1.0],
    ])?;
    let v = orthogonalize(&rot);
    for (a, b) in v.as_slice().iter().zip(rot.as_slice()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }

    // applying the routine twice changes nothing either
    let once = orthogonalize(&random_matrix(7, 3, 11));
    let twice = orthogonalize(&once);
    for (a, b) in once.as_slice().iter().zip(twice.as_slice()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn column_order_matters() -> Result<(), OrthoError> {
    let u = Matrix::from_columns(vec![vec![1.0f64, 0.0], vec![1.0, 1.0]])?;
    let swapped = Matrix::from_columns(vec![vec![1.0f64, 1.0], vec![1.0, 0.0]])?;

    let v = orthogonalize(&u);
    let w = orthogonalize(&swapped);

    // same span, different basis
    assert!(is_orthonormal(&w, 1e-9));
    let half = std::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(w.column(0)?.to_vec()[0], half, epsilon = 1e-12);
    assert_relative_eq!(w.column(0)?.to_vec()[1], half, epsilon = 1e-12);
    assert_relative_eq!(w.column(1)?.to_vec()[0], half, epsilon = 1e-12);
    assert_relative_eq!(w.column(1)?.to_vec()[1], -half, epsilon = 1e-12);

    let w_back = Matrix::from_columns(vec![w.column(1)?.to_vec(), w.column(0)?.to_vec()])?;
    assert!(
        v.as_slice()
            .iter()
            .zip(w_back.as_slice())
            .any(|(a, b)| (a - b).abs() > 1e-6),
        "permuting the input columns must change the basis"
    );
    Ok(())
}

#[test]
fn single_precision_input() -> Result<(), OrthoError> {
    let u = Matrix::from_rows(vec![vec![1.0f32, 2.0], vec![2.0, 1.0], vec![0.0, 1.0]])?;
    let v = orthogonalize(&u);
    assert!(dot_columns(&v, 0, 1)?.abs() < 1e-5);
    for n in column_norms(&v) {
        assert_relative_eq!(n, 1.0f32, epsilon = 1e-5);
    }
    Ok(())
}

#[test]
fn integer_input_is_promoted() -> Result<(), OrthoError> {
    let u = Matrix::from_rows(vec![vec![2u8, 1], vec![0, 1], vec![1, 3]])?;
    let promoted = orthogonalize_as::<f64, _>(&u);
    let reference = orthogonalize(&u.cast::<f64>());
    assert_eq!(promoted, reference);
    assert!(is_orthonormal(&promoted, 1e-9));
    Ok(())
}
