//! Pose snapshots: the 14-value facial parameter vector, capture/apply, and
//! the on-disk sequence format.
//!
//! A snapshot is a value object; once captured it is never mutated, and
//! equality and blending are defined purely over the value vector. The
//! declared field order is a contract shared by capture, apply, the blend
//! step, and the serialized form — all four index the vector positionally.
//!
//! The two per-axis mouth-openness scalars are consumed by the rig but are
//! deliberately absent from the vector, so playback cannot reproduce them.

use crate::errors::RigError;
use crate::rig::{FaceParams, LEFT, RIGHT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of captured parameters.
pub const PARAM_COUNT: usize = 14;

/// Field names of the pose vector, in the order values are packed.
pub const PARAM_NAMES: [&str; PARAM_COUNT] = [
    "head_rotation",
    "head_escalation",
    "head_shift",
    "mouth_width",
    "mouth_height",
    "mouth_escalation",
    "smile_amount",
    "eye_size",
    "eye_openness_right",
    "eye_openness_left",
    "brow_escalation_right",
    "brow_escalation_left",
    "brow_rotation_right",
    "brow_rotation_left",
];

/// A captured facial pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    values: [f32; PARAM_COUNT],
}

impl Snapshot {
    /// Captures the current parameters into a new snapshot.
    pub fn capture(params: &FaceParams) -> Self {
        Self {
            values: [
                params.head_rotation,
                params.head_escalation,
                params.head_shift,
                params.mouth_width,
                params.mouth_height,
                params.mouth_escalation,
                params.smile_amount,
                params.eye_size,
                params.eye_openness[RIGHT],
                params.eye_openness[LEFT],
                params.brow_escalation[RIGHT],
                params.brow_escalation[LEFT],
                params.brow_rotation[RIGHT],
                params.brow_rotation[LEFT],
            ],
        }
    }

    /// Writes the captured values back into a parameter set.
    pub fn apply(&self, params: &mut FaceParams) {
        let v = &self.values;
        params.head_rotation = v[0];
        params.head_escalation = v[1];
        params.head_shift = v[2];
        params.mouth_width = v[3];
        params.mouth_height = v[4];
        params.mouth_escalation = v[5];
        params.smile_amount = v[6];
        params.eye_size = v[7];
        params.eye_openness[RIGHT] = v[8];
        params.eye_openness[LEFT] = v[9];
        params.brow_escalation[RIGHT] = v[10];
        params.brow_escalation[LEFT] = v[11];
        params.brow_rotation[RIGHT] = v[12];
        params.brow_rotation[LEFT] = v[13];
    }

    pub fn from_values(values: [f32; PARAM_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f32; PARAM_COUNT] {
        &self.values
    }
}

/// On-disk form of one snapshot: the 14 scalars under their declared names.
/// Field order here defines the serialization contract.
#[derive(Serialize, Deserialize)]
struct SnapshotRecord {
    head_rotation: f32,
    head_escalation: f32,
    head_shift: f32,
    mouth_width: f32,
    mouth_height: f32,
    mouth_escalation: f32,
    smile_amount: f32,
    eye_size: f32,
    eye_openness_right: f32,
    eye_openness_left: f32,
    brow_escalation_right: f32,
    brow_escalation_left: f32,
    brow_rotation_right: f32,
    brow_rotation_left: f32,
}

impl From<&Snapshot> for SnapshotRecord {
    fn from(snapshot: &Snapshot) -> Self {
        let v = snapshot.values;
        Self {
            head_rotation: v[0],
            head_escalation: v[1],
            head_shift: v[2],
            mouth_width: v[3],
            mouth_height: v[4],
            mouth_escalation: v[5],
            smile_amount: v[6],
            eye_size: v[7],
            eye_openness_right: v[8],
            eye_openness_left: v[9],
            brow_escalation_right: v[10],
            brow_escalation_left: v[11],
            brow_rotation_right: v[12],
            brow_rotation_left: v[13],
        }
    }
}

impl From<SnapshotRecord> for Snapshot {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            values: [
                record.head_rotation,
                record.head_escalation,
                record.head_shift,
                record.mouth_width,
                record.mouth_height,
                record.mouth_escalation,
                record.smile_amount,
                record.eye_size,
                record.eye_openness_right,
                record.eye_openness_left,
                record.brow_escalation_right,
                record.brow_escalation_left,
                record.brow_rotation_right,
                record.brow_rotation_left,
            ],
        }
    }
}

/// Saves a snapshot sequence as a JSON array, one record per snapshot.
pub fn save_sequence(path: &Path, snapshots: &[Snapshot]) -> Result<(), RigError> {
    let records: Vec<SnapshotRecord> = snapshots.iter().map(SnapshotRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Loads a snapshot sequence saved by [`save_sequence`].
pub fn load_sequence(path: &Path) -> Result<Vec<Snapshot>, RigError> {
    let json = std::fs::read_to_string(path)?;
    let records: Vec<SnapshotRecord> = serde_json::from_str(&json)?;
    Ok(records.into_iter().map(Snapshot::from).collect())
}
