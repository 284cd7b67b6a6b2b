use minilp::{ComparisonOp, OptimizationDirection, Problem};
use tracing::debug;

use super::error::DispatchError;
use super::model::{LpProblem, Relation};

/// Dense solved values in column order plus the reported objective.
#[derive(Debug, Clone)]
pub struct SolvedValues {
    pub values: Vec<f64>,
    pub objective: f64,
}

/// Solver verdict for one LP instance.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Optimal(SolvedValues),
    Infeasible,
    Unbounded,
}

impl SolveOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            SolveOutcome::Optimal(_) => "optimal",
            SolveOutcome::Infeasible => "infeasible",
            SolveOutcome::Unbounded => "unbounded",
        }
    }
}

/// Boundary to the external LP solver: one synchronous solve call, status
/// and variable values back.
///
/// Adapter-level faults (solver unavailable, numerical breakdown, timeout)
/// surface as `DispatchError::Solver`; an adapter must never substitute a
/// partial or default solution for a failed solve. If a time budget is ever
/// enforced, it lives here and maps to `Solver("timeout")`.
pub trait LpSolver {
    fn solve(&self, lp: &LpProblem) -> Result<SolveOutcome, DispatchError>;
}

/// Adapter for the in-process `minilp` simplex solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinilpSolver;

impl LpSolver for MinilpSolver {
    fn solve(&self, lp: &LpProblem) -> Result<SolveOutcome, DispatchError> {
        let mut problem = Problem::new(OptimizationDirection::Maximize);
        let vars: Vec<minilp::Variable> = lp
            .bounds
            .iter()
            .zip(&lp.objective)
            .map(|(&(lo, hi), &obj)| problem.add_var(obj, (lo, hi)))
            .collect();

        for row in &lp.rows {
            let expr: Vec<(minilp::Variable, f64)> = row
                .coeffs
                .iter()
                .map(|&(col, coeff)| (vars[col], coeff))
                .collect();
            let op = match row.relation {
                Relation::Eq => ComparisonOp::Eq,
                Relation::Le => ComparisonOp::Le,
                Relation::Ge => ComparisonOp::Ge,
            };
            problem.add_constraint(expr.as_slice(), op, row.rhs);
        }

        match problem.solve() {
            Ok(solution) => {
                let objective = solution.objective();
                if !objective.is_finite() {
                    return Err(DispatchError::Solver(format!(
                        "solver returned non-finite objective {objective}"
                    )));
                }
                let values = vars.iter().map(|&v| solution[v]).collect();
                debug!(objective, "solve finished");
                Ok(SolveOutcome::Optimal(SolvedValues { values, objective }))
            }
            Err(minilp::Error::Infeasible) => Ok(SolveOutcome::Infeasible),
            Err(minilp::Error::Unbounded) => Ok(SolveOutcome::Unbounded),
        }
    }
}
