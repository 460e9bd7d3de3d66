//! Per-tick sweep over the interactivity matrix
//!
//! `apply_interactivity` advances the whole system by one tick: every
//! ordered (source, target) group pair is visited in row-major matrix
//! order and handed to the force pass

use super::forces::update_group_pair;
use super::matrix::InteractivityMatrix;
use super::params::Parameters;
use super::states::ParticleGroup;

/// Advance all groups by one tick
///
/// Pairs run strictly in row-major order and mutate in place, so later
/// pairs observe the movement earlier pairs already applied within the
/// same tick. There is no snapshot of the pre-tick state
pub fn apply_interactivity(
    groups: &mut [ParticleGroup],
    matrix: &InteractivityMatrix,
    params: &Parameters,
) {
    for source in 0..matrix.dim() {
        for target in 0..matrix.dim() {
            update_group_pair(groups, source, target, matrix.get(source, target), params);
        }
    }
}
