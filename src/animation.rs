//! Pose blending: the per-tick exponential approach toward a target
//! snapshot, and the convergence policy that decides when the target counts
//! as reached.

use crate::rig::FaceParams;
use crate::snapshot::{Snapshot, PARAM_COUNT};

/// Multiplier applied to `diff * dt` each blend tick.
pub const BLEND_RATE: f32 = 1.0;

/// Smallest tick fed into a blend step. A stalled or backwards clock would
/// otherwise freeze the blend forever.
pub const MIN_TICK: f32 = 0.001;

/// Result of one blend tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendOutcome {
    /// Still approaching the target.
    Blending,
    /// The target has been reached and written back exactly.
    Converged,
}

/// Decides whether a diff vector counts as converged.
pub trait ConvergencePolicy {
    fn is_converged(&self, diff: &[f32; PARAM_COUNT]) -> bool;
}

/// Convergence gate on the absolute SIGNED SUM of all parameter diffs.
///
/// This is a coarse gate: a pair of large, opposite-sign diffs cancels and
/// counts as converged, and an individual parameter can still be far from
/// its target while the aggregate is within epsilon. Substitute a stricter
/// [`ConvergencePolicy`] to change that without touching the playback state
/// machine.
#[derive(Clone, Copy, Debug)]
pub struct AggregateConvergence {
    pub epsilon: f32,
}

impl Default for AggregateConvergence {
    fn default() -> Self {
        Self { epsilon: 0.001 }
    }
}

impl ConvergencePolicy for AggregateConvergence {
    fn is_converged(&self, diff: &[f32; PARAM_COUNT]) -> bool {
        diff.iter().sum::<f32>().abs() <= self.epsilon
    }
}

/// Advances `params` one tick toward `target`.
///
/// Computes `diff = target - current` over the 14-value vector; if the
/// policy reports convergence, the target values are written back exactly,
/// otherwise the parameters advance by `diff * dt * BLEND_RATE`.
pub fn blend_step(
    params: &mut FaceParams,
    target: &Snapshot,
    dt: f32,
    policy: &dyn ConvergencePolicy,
) -> BlendOutcome {
    let dt = dt.max(MIN_TICK);
    let current = Snapshot::capture(params);

    let mut diff = [0.0f32; PARAM_COUNT];
    for (i, d) in diff.iter_mut().enumerate() {
        *d = target.values()[i] - current.values()[i];
    }

    if policy.is_converged(&diff) {
        target.apply(params);
        return BlendOutcome::Converged;
    }

    let mut next = *current.values();
    for (i, value) in next.iter_mut().enumerate() {
        *value += diff[i] * dt * BLEND_RATE;
    }
    Snapshot::from_values(next).apply(params);
    BlendOutcome::Blending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeroed_params() -> FaceParams {
        let mut params = FaceParams::default();
        Snapshot::from_values([0.0; PARAM_COUNT]).apply(&mut params);
        params
    }

    #[test]
    fn converges_to_a_single_nonzero_target_in_bounded_ticks() {
        let mut params = zeroed_params();
        let mut target_values = [0.0; PARAM_COUNT];
        target_values[0] = 1.0;
        let target = Snapshot::from_values(target_values);
        let policy = AggregateConvergence::default();

        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 100, "blend failed to converge");
            if blend_step(&mut params, &target, 0.1, &policy) == BlendOutcome::Converged {
                break;
            }
        }

        // Convergence snaps exactly onto the target values.
        assert_eq!(Snapshot::capture(&params), target);
        assert_eq!(params.head_rotation, 1.0);
        assert_eq!(params.smile_amount, 0.0);
    }

    #[test]
    fn zero_dt_is_clamped_to_a_minimum_tick() {
        let mut params = zeroed_params();
        let mut target_values = [0.0; PARAM_COUNT];
        target_values[0] = 1.0;
        let target = Snapshot::from_values(target_values);

        let outcome = blend_step(&mut params, &target, 0.0, &AggregateConvergence::default());
        assert_eq!(outcome, BlendOutcome::Blending);
        assert!(params.head_rotation > 0.0);
    }

    #[test]
    fn aggregate_gate_lets_opposite_diffs_cancel() {
        let policy = AggregateConvergence::default();

        let mut cancelling = [0.0; PARAM_COUNT];
        cancelling[0] = 0.5;
        cancelling[1] = -0.5;
        assert!(policy.is_converged(&cancelling));

        let mut one_sided = [0.0; PARAM_COUNT];
        one_sided[0] = 0.5;
        assert!(!policy.is_converged(&one_sided));
    }
}
