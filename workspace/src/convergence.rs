use std::{ fs::{ self, File }, path::PathBuf };
use anyhow::Result;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use ritzwell::{
    basis::BasisIndexing,
    potential::PotentialKind,
    solve::{ SolveParams, Solver, SolverConfig },
    task::SolveTask,
};
use tracing::info;
use lib::init_logging;

// variational convergence of the lowest few levels of a barrier potential with
// basis size; each size is solved on its own background thread

const WIDTH: f64 = 1.0;
const STEPS: usize = 1000;
const AMPLITUDE: f64 = 200.0;
const SIZES: [usize; 5] = [4, 8, 16, 32, 64];
const LEVELS: usize = 4;

fn main() -> Result<()> {
    init_logging();
    let solver = Solver::new(
        SolverConfig::default()
            .with_indexing(BasisIndexing::FromOne)
            .with_levels(LEVELS)
    );
    let tasks: Vec<(usize, SolveTask)>
        = SIZES.iter()
        .map(|&m| {
            let params = SolveParams::new(
                WIDTH, STEPS, PotentialKind::Barrier, AMPLITUDE, m);
            (m, solver.spawn(params))
        })
        .collect();
    let mut e: nd::Array2<f64> = nd::Array2::zeros((SIZES.len(), LEVELS));
    for ((m, task), mut row) in tasks.into_iter().zip(e.outer_iter_mut()) {
        let solved = task.join()?;
        info!(basis_size = m, "solved");
        row.assign(&solved.energies());
        let line: Vec<String>
            = row.iter()
            .map(|e| format!("{:>16.8e}", e))
            .collect();
        println!("{:>4} {}", m, line.join(" "));
    }
    let sizes: nd::Array1<u64> = SIZES.iter().map(|&m| m as u64).collect();

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut npz = NpzWriter::new(File::create(outdir.join("convergence.npz"))?);
    npz.add_array("m", &sizes)?;
    npz.add_array("e", &e)?;
    npz.finish()?;
    Ok(())
}
