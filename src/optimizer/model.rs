use tracing::debug;

use super::error::DispatchError;
use crate::domain::{PriceSeries, StorageParams};

/// Relation between a constraint row's linear expression and its
/// right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Le,
    Ge,
}

/// One sparse constraint row: `Σ coeff * x[col]  <relation>  rhs`.
#[derive(Debug, Clone)]
pub struct ConstraintRow {
    pub coeffs: Vec<(usize, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

/// Explicit sparse LP: per-column bounds, dense maximization objective and
/// a list of constraint rows.
#[derive(Debug, Clone)]
pub struct LpProblem {
    pub bounds: Vec<(f64, f64)>,
    pub objective: Vec<f64>,
    pub rows: Vec<ConstraintRow>,
}

impl LpProblem {
    pub fn num_cols(&self) -> usize {
        self.bounds.len()
    }
}

/// Maps the per-step decision variables onto LP columns.
///
/// Block layout: all charge powers first, then all discharge powers, then
/// all stored-energy levels, each block indexed by step.
#[derive(Debug, Clone, Copy)]
pub struct VarLayout {
    n_steps: usize,
}

impl VarLayout {
    pub fn new(n_steps: usize) -> Self {
        Self { n_steps }
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn charge(&self, t: usize) -> usize {
        t
    }

    pub fn discharge(&self, t: usize) -> usize {
        self.n_steps + t
    }

    pub fn energy(&self, t: usize) -> usize {
        2 * self.n_steps + t
    }

    pub fn num_cols(&self) -> usize {
        3 * self.n_steps
    }
}

/// A built dispatch LP, ready to hand to a solver adapter.
#[derive(Debug, Clone)]
pub struct DispatchModel {
    pub lp: LpProblem,
    pub layout: VarLayout,
}

/// Builds the dispatch LP for one price series and parameter set.
///
/// Charge and discharge are two independent non-negative variables rather
/// than one signed variable so that asymmetric efficiencies stay expressible
/// as simple linear bounds. The relaxation admits simultaneous charge and
/// discharge within a step; that is cost-neutral only at unit efficiencies
/// and never optimal below them, so no mutual-exclusion binaries are added.
///
/// Validates parameters and input before allocating anything; never solves.
pub fn build_model(
    prices: &PriceSeries,
    params: &StorageParams,
) -> Result<DispatchModel, DispatchError> {
    params.validate()?;
    if prices.is_empty() {
        return Err(DispatchError::InvalidInput("price series is empty".into()));
    }
    if let Some((t, price)) = prices
        .prices()
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite())
    {
        return Err(DispatchError::InvalidInput(format!(
            "non-finite price {price} at step {t}"
        )));
    }

    let n = prices.len();
    let layout = VarLayout::new(n);

    let mut bounds = vec![(0.0, params.p_max); 2 * n];
    bounds.extend(std::iter::repeat((0.0, params.capacity)).take(n));

    let mut objective = vec![0.0; layout.num_cols()];
    for (t, &price) in prices.prices().iter().enumerate() {
        objective[layout.charge(t)] = -price;
        objective[layout.discharge(t)] = price;
    }

    // SOC recurrence, the sole coupling between steps:
    //   E[t] - E[t-1] - eff_ch * P_ch[t] + P_dis[t] / eff_dis = 0
    // with E[-1] replaced by soc_init on the right-hand side.
    let mut rows = Vec::with_capacity(n);
    for t in 0..n {
        let mut coeffs = vec![
            (layout.energy(t), 1.0),
            (layout.charge(t), -params.eff_ch),
            (layout.discharge(t), 1.0 / params.eff_dis),
        ];
        let rhs = if t == 0 {
            params.soc_init
        } else {
            coeffs.push((layout.energy(t - 1), -1.0));
            0.0
        };
        rows.push(ConstraintRow {
            coeffs,
            relation: Relation::Eq,
            rhs,
        });
    }

    debug!(
        n_steps = n,
        cols = layout.num_cols(),
        rows = rows.len(),
        "built dispatch LP"
    );

    Ok(DispatchModel {
        lp: LpProblem {
            bounds,
            objective,
            rows,
        },
        layout,
    })
}
