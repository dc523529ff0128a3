use anyhow::Result;
use ritzwell::{
    basis::{ BasisIndexing, isw_energy },
    potential::PotentialKind,
    solve::{ SolveParams, Solver, SolverConfig },
};
use lib::{ init_logging, print_energies, write_solved };

// a flat potential only shifts the infinite square well spectrum, so every
// computed energy should match the analytic value

const WIDTH: f64 = 2.0;
const STEPS: usize = 250;
const AMPLITUDE: f64 = 1.5;
const BASIS_SIZE: usize = 9;

fn main() -> Result<()> {
    init_logging();
    let config
        = SolverConfig::default()
        .with_indexing(BasisIndexing::FromOne);
    let params = SolveParams::new(
        WIDTH, STEPS, PotentialKind::Square, AMPLITUDE, BASIS_SIZE);
    let solved = Solver::new(config).solve(&params)?;
    let expected = |k: usize| AMPLITUDE - isw_energy(WIDTH, k + 1);
    print_energies(&solved, Some(&expected))?;
    write_solved("square", &solved)?;
    Ok(())
}
