use crate::storage::{EmissionState, EpochParams, GaugeState};
use apwine_maths::mul_div;
use gauge_interface::PRECISION;

/// Rewards emitted over one whole epoch starting from `epoch_supply`.
pub fn epoch_emission(params: &EpochParams, epoch_supply: i128) -> i128 {
    mul_div(epoch_supply, params.inflation_rate, PRECISION)
}

/// Supply after `epochs` whole epochs of compounding, by repeated squaring.
fn compound(supply: i128, params: &EpochParams, mut epochs: u64) -> i128 {
    let mut factor = PRECISION + params.inflation_rate;
    let mut growth = PRECISION;
    while epochs > 0 {
        if epochs & 1 == 1 {
            growth = mul_div(growth, factor, PRECISION);
        }
        epochs >>= 1;
        if epochs > 0 {
            factor = mul_div(factor, factor, PRECISION);
        }
    }
    mul_div(supply, growth, PRECISION)
}

fn allocate(state: &mut EmissionState, emitted: i128, total_weight: i128) {
    if total_weight > 0 {
        state.reward_index += mul_div(emitted, PRECISION, total_weight);
    }
}

/// Emission of the running epoch between `last_update` and `until`.
fn spread(state: &mut EmissionState, params: &EpochParams, total_weight: i128, until: u64) {
    let emitted = mul_div(
        epoch_emission(params, state.epoch_supply),
        (until - state.last_update) as i128,
        params.epoch_length as i128,
    );
    allocate(state, emitted, total_weight);
    state.last_update = until;
}

/// Moves the schedule forward to `now`, spreading emissions linearly inside
/// each epoch and compounding the supply at every epoch boundary. Whole
/// epochs are settled in one step, so the cost does not grow with the gap.
///
/// Emissions while no gauge carries weight are not allocated.
pub fn advance(
    mut state: EmissionState,
    params: &EpochParams,
    total_weight: i128,
    now: u64,
) -> EmissionState {
    if state.last_update >= now {
        return state;
    }

    // Finish the running epoch
    let epoch_end = state.epoch_start + params.epoch_length;
    if now < epoch_end {
        spread(&mut state, params, total_weight, now);
        return state;
    }
    spread(&mut state, params, total_weight, epoch_end);
    state.epoch_supply += epoch_emission(params, state.epoch_supply);
    state.epoch += 1;
    state.epoch_start = epoch_end;

    // A whole epoch emits exactly the supply it adds
    let whole = (now - state.epoch_start) / params.epoch_length;
    if whole > 0 {
        let supply = compound(state.epoch_supply, params, whole);
        let emitted = supply - state.epoch_supply;
        allocate(&mut state, emitted, total_weight);
        state.epoch_supply = supply;
        state.epoch += whole as u32;
        state.epoch_start += whole * params.epoch_length;
        state.last_update = state.epoch_start;
    }

    if state.last_update < now {
        spread(&mut state, params, total_weight, now);
    }
    state
}

/// Books what `gauge` earned since its last checkpoint.
pub fn accrue(mut gauge: GaugeState, reward_index: i128) -> GaugeState {
    gauge.unclaimed += mul_div(
        gauge.weight,
        reward_index - gauge.index_checkpoint,
        PRECISION,
    );
    gauge.index_checkpoint = reward_index;
    gauge
}
