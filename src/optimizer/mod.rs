pub mod error;
pub mod extract;
pub mod model;
pub mod solver;

pub use error::*;
pub use extract::*;
pub use model::*;
pub use solver::*;

use tracing::info;

use crate::domain::{PriceSeries, Schedule, StorageParams};

/// Build, solve and extract in one synchronous pass with the default
/// solver adapter.
pub fn optimize(prices: &PriceSeries, params: &StorageParams) -> Result<Schedule, DispatchError> {
    optimize_with(&MinilpSolver, prices, params)
}

/// Same pipeline with a caller-chosen solver adapter.
///
/// A non-optimal solver verdict is surfaced as `DispatchError::Solver`
/// carrying the status string; for validated parameters the LP is feasible
/// at zero dispatch and every variable is bounded, so neither infeasible
/// nor unbounded can actually occur.
pub fn optimize_with<S: LpSolver>(
    solver: &S,
    prices: &PriceSeries,
    params: &StorageParams,
) -> Result<Schedule, DispatchError> {
    let model = build_model(prices, params)?;
    let solved = match solver.solve(&model.lp)? {
        SolveOutcome::Optimal(solved) => solved,
        other => {
            return Err(DispatchError::Solver(format!(
                "solver finished with status `{}`",
                other.status()
            )))
        }
    };
    let schedule = extract_schedule(&model, prices, &solved)?;
    info!(
        n_steps = prices.len(),
        objective = solved.objective,
        "dispatch optimized"
    );
    Ok(schedule)
}
