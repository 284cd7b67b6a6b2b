use itertools::izip;

use super::error::DispatchError;
use super::model::DispatchModel;
use super::solver::SolvedValues;
use crate::domain::{PriceSeries, Schedule, ScheduleRow};

/// Reads solved variable values back into a per-step schedule.
///
/// A value vector that does not match the model's column count means the
/// builder and the adapter disagree about the problem; that is a defect in
/// this crate, not a condition the caller can recover from.
pub fn extract_schedule(
    model: &DispatchModel,
    prices: &PriceSeries,
    solved: &SolvedValues,
) -> Result<Schedule, DispatchError> {
    let layout = model.layout;
    if solved.values.len() != layout.num_cols() {
        return Err(DispatchError::Extraction(format!(
            "expected {} variable values, solver returned {}",
            layout.num_cols(),
            solved.values.len()
        )));
    }
    if prices.len() != layout.n_steps() {
        return Err(DispatchError::Extraction(format!(
            "model was built for {} steps, price series has {}",
            layout.n_steps(),
            prices.len()
        )));
    }

    let n = layout.n_steps();
    let (charge, rest) = solved.values.split_at(n);
    let (discharge, energy) = rest.split_at(n);

    let rows = izip!(prices.labels(), prices.prices(), charge, discharge, energy)
        .map(|(label, &price, &p_ch, &p_dis, &e)| ScheduleRow {
            label: label.clone(),
            charge_power: p_ch,
            discharge_power: p_dis,
            stored_energy: e,
            price,
            profit: price * (p_dis - p_ch),
        })
        .collect();

    Ok(Schedule {
        rows,
        objective: solved.objective,
    })
}
