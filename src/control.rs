//! The control-surface boundary: a per-tick source of parameter values and
//! discrete commands, abstracting over interactive panels and scripted
//! feeds.

use crate::rig::FaceParams;
use crate::snapshot::Snapshot;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    /// Capture the current parameters as the held pose.
    TakeSnapshot,
    /// Append the held pose to the rig's sequence.
    CommitSnapshot,
    /// Leave the editing loop.
    Stop,
}

pub trait ControlSurface {
    /// Writes this tick's parameter values into `params` and returns the
    /// commands issued since the previous tick.
    fn sample(&mut self, params: &mut FaceParams) -> Vec<ControlCommand>;
}

/// A pre-recorded control feed: each tick applies the next scripted pose and
/// issues its commands, then asks to stop once the script is exhausted.
pub struct ScriptedControl {
    frames: VecDeque<(Snapshot, Vec<ControlCommand>)>,
}

impl ScriptedControl {
    pub fn new(frames: impl IntoIterator<Item = (Snapshot, Vec<ControlCommand>)>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl ControlSurface for ScriptedControl {
    fn sample(&mut self, params: &mut FaceParams) -> Vec<ControlCommand> {
        match self.frames.pop_front() {
            Some((pose, commands)) => {
                pose.apply(params);
                commands
            }
            None => vec![ControlCommand::Stop],
        }
    }
}
