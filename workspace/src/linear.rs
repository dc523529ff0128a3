use anyhow::Result;
use ritzwell::{
    basis::BasisIndexing,
    potential::PotentialKind,
    solve::{ SolveParams, Solver, SolverConfig },
};
use lib::{ init_logging, print_energies, write_solved };

// particle in a well with a linear ramp across the floor; prints the energies
// and writes the potential and the lowest few eigenfunctions to output/

const WIDTH: f64 = 1.0;
const STEPS: usize = 500;
const AMPLITUDE: f64 = 100.0;
const BASIS_SIZE: usize = 24;
const LEVELS: usize = 5;

fn main() -> Result<()> {
    init_logging();
    let config
        = SolverConfig::default()
        .with_indexing(BasisIndexing::FromOne)
        .with_levels(LEVELS);
    let params = SolveParams::new(
        WIDTH, STEPS, PotentialKind::Linear, AMPLITUDE, BASIS_SIZE);
    let solved = Solver::new(config).solve(&params)?;
    print_energies(&solved, None)?;
    write_solved("linear", &solved)?;
    Ok(())
}
