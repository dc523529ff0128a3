//! Shared plumbing for the demonstration programs.

use std::{
    fs::{ self, File },
    io::{ self, Write },
    path::PathBuf,
};
use ndarray_npy::NpzWriter;
use ritzwell::solve::Solved;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter
        = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Print a table of state energies, optionally next to reference values.
pub fn print_energies(solved: &Solved, reference: Option<&dyn Fn(usize) -> f64>)
    -> io::Result<()>
{
    let mut out = io::stdout().lock();
    match reference {
        Some(f) => {
            writeln!(
                out,
                "{:>5} {:>16} {:>16} {:>12}",
                "k", "computed", "expected", "rel. err",
            )?;
            for (k, state) in solved.states.iter().enumerate() {
                let ex = f(k);
                let err
                    = if ex == 0.0 {
                        state.e.abs()
                    } else {
                        ((state.e - ex) / ex).abs()
                    };
                writeln!(
                    out,
                    "{:>5} {:>16.8e} {:>16.8e} {:>12.3e}",
                    k, state.e, ex, err,
                )?;
            }
        },
        None => {
            writeln!(out, "{:>5} {:>16}", "k", "energy")?;
            for (k, state) in solved.states.iter().enumerate() {
                writeln!(out, "{:>5} {:>16.8e}", k, state.e)?;
            }
        },
    }
    Ok(())
}

/// Write the grid, potential, energies, and eigenfunctions of a solve to
/// `output/<name>.npz` as arrays `x`, `v`, `e`, and `wf` (one state per row).
pub fn write_solved(name: &str, solved: &Solved) -> anyhow::Result<PathBuf> {
    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let path = outdir.join(format!("{}.npz", name));
    let mut npz = NpzWriter::new(File::create(&path)?);
    npz.add_array("x", solved.potential.get_x())?;
    npz.add_array("v", solved.potential.get_y())?;
    npz.add_array("e", &solved.energies())?;
    npz.add_array("wf", &solved.wfs())?;
    npz.finish()?;
    info!(path = %path.display(), "wrote arrays");
    Ok(path)
}
