// Dyness DL5.0 battery limits.
pub const BATTERY_NOMINAL_CAPACITY_AH: f64 = 400.0;
pub const BATTERY_MAX_DISCHARGE_CURRENT_A: i64 = 100;

/// SOC floor the planner will not discharge below.
pub const RESERVE_SOC_PERCENT: f64 = 20.0;

/// Discharging always finishes at 02:00, just before the cheap-rate charge
/// window opens.
const DISCHARGE_END_HOUR: i64 = 2;

static CHARGE_TIME_RANGE: &str = "02:05-05:55";
static IDLE_TIME_RANGE: &str = "00:00-00:00";

#[derive(Clone, Debug, PartialEq)]
pub struct DischargePlan {
    pub discharge_current_amps: i64,
    pub discharge_time_range: String,
}

/// Computes the discharge setpoint for draining the usable charge above the
/// reserve floor over `duration_hours`. Never fails; a sub-1-amp result
/// collapses to a no-discharge plan.
pub fn plan(soc: f64, duration_hours: f64) -> DischargePlan {
    let usable = soc - RESERVE_SOC_PERCENT;
    let current = (usable / 100.0 * BATTERY_NOMINAL_CAPACITY_AH / duration_hours) as i64;
    let current = current.min(BATTERY_MAX_DISCHARGE_CURRENT_A);

    if current < 1 {
        return DischargePlan {
            discharge_current_amps: 0,
            discharge_time_range: IDLE_TIME_RANGE.to_string(),
        };
    }

    let mut start = 24 - duration_hours as i64 + DISCHARGE_END_HOUR;
    if start >= 24 {
        start -= 24;
    }

    // start >= end means the window spans midnight; both forms anchor the end
    // at the literal 02:00.
    let discharge_time_range = if start < DISCHARGE_END_HOUR {
        format!("{:02}:00-{:02}:00", start, DISCHARGE_END_HOUR)
    } else {
        format!("{:02}:00-02:00", start)
    };

    DischargePlan {
        discharge_current_amps: current,
        discharge_time_range,
    }
}

impl DischargePlan {
    /// Renders the cid-103 value string: percentage cap, discharge current,
    /// charge window, discharge window, then two unused schedule slots zeroed.
    pub fn control_value(&self) -> String {
        format!(
            "100,{},{},{},0,0,00:00-00:00,00:00-00:00,0,0,00:00-00:00,00:00-00:00",
            self.discharge_current_amps, CHARGE_TIME_RANGE, self.discharge_time_range,
        )
    }
}
