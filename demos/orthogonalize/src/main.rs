use argh::FromArgs;
use std::path::{Path, PathBuf};

use orthonorm::{
    ops::{metrics, orthogonalize_with, OrthogonalizeConfig},
    tensor::Matrix,
};

#[derive(FromArgs)]
/// Orthogonalize the columns of a matrix with the Gram-Schmidt process
struct Args {
    /// path to a JSON file holding the matrix, either as an array of rows or as
    /// an object with `data` (row-major) and `shape` fields
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// norm at or below which a column is treated as zero (default: 1e-15)
    #[argh(option, short = 'e', default = "orthonorm::ops::DEFAULT_EPSILON")]
    epsilon: f64,

    /// print orthogonality defect, column norms and rank to stderr
    #[argh(switch, short = 'c')]
    check: bool,
}

fn to_rows(m: &Matrix<f64>) -> Vec<Vec<f64>> {
    let cols = m.cols();
    (0..m.rows())
        .map(|i| m.as_slice()[i * cols..(i + 1) * cols].to_vec())
        .collect()
}

fn read_matrix(path: &Path) -> Result<Matrix<f64>, Box<dyn std::error::Error>> {
    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let matrix = if value.is_array() {
        Matrix::from_rows(serde_json::from_value(value)?)
            .inspect_err(|e| log::error!("{}: {}", e, e.suggestion()))?
    } else {
        serde_json::from_value(value)?
    };
    Ok(matrix)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let u = match &args.input {
        Some(path) => read_matrix(path)?,
        // columns (1, 0) and (1, 1)
        None => Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]])?,
    };
    log::info!("orthogonalizing a {}x{} matrix", u.rows(), u.cols());

    let config = OrthogonalizeConfig::new(args.epsilon)?;
    let v = orthogonalize_with(&u, &config);

    println!("{}", serde_json::to_string_pretty(&to_rows(&v))?);

    if args.check {
        eprintln!("orthogonality defect: {:e}", metrics::orthogonality_defect(&v));
        eprintln!("column norms: {:?}", metrics::column_norms(&v));
        eprintln!(
            "numerical rank: {}",
            metrics::numerical_rank(&v, args.epsilon.max(1e-9))
        );
    }

    Ok(())
}
