use std::fmt::Write as _;

use serde::Serialize;

/// One dispatch step of the solved schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRow {
    /// Opaque step label carried over from the price input.
    pub label: String,
    pub charge_power: f64,
    pub discharge_power: f64,
    pub stored_energy: f64,
    pub price: f64,
    /// `price * (discharge_power - charge_power)` for this step.
    pub profit: f64,
}

/// Solved dispatch schedule over the full price horizon.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub rows: Vec<ScheduleRow>,
    /// Objective value reported by the solver.
    pub objective: f64,
}

impl Schedule {
    pub fn total_profit(&self) -> f64 {
        self.rows.iter().map(|r| r.profit).sum()
    }

    /// Fixed-width table of the schedule plus a total-profit line.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>16} {:>10} {:>10} {:>10} {:>10} {:>12}",
            "step", "P_ch", "P_dis", "E", "price", "profit"
        );
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>16} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>12.3}",
                row.label,
                row.charge_power,
                row.discharge_power,
                row.stored_energy,
                row.price,
                row.profit
            );
        }
        let _ = writeln!(out, "total profit: {:.2}", self.total_profit());
        out
    }
}
