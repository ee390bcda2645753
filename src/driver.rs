//! Driver routines: the interactive-edit and scripted-playback loops.
//!
//! The rig, control surface, renderer, and clock are explicit dependencies,
//! and both loops are thin wrappers over public single-tick functions so
//! embedders (and tests) can own the loop themselves.

use crate::control::{ControlCommand, ControlSurface};
use crate::errors::RigError;
use crate::render::Renderer;
use crate::rig::Narrator;
use crate::snapshot::Snapshot;
use crate::Clock;
use tracing::debug;

/// One editing tick: sample the control surface, handle its commands,
/// rebuild the rig, render. Returns `Ok(false)` once the surface asks to
/// stop.
pub fn edit_tick(
    narrator: &mut Narrator,
    control: &mut dyn ControlSurface,
    renderer: &mut dyn Renderer,
    held: &mut Snapshot,
) -> Result<bool, RigError> {
    for command in control.sample(&mut narrator.params) {
        match command {
            ControlCommand::TakeSnapshot => *held = narrator.take_snapshot(),
            ControlCommand::CommitSnapshot => narrator.add_snapshot(*held),
            ControlCommand::Stop => return Ok(false),
        }
    }

    narrator.update()?;
    narrator.render(renderer);
    Ok(true)
}

/// Runs the interactive editing loop until the control surface stops it.
pub fn run_edit(
    narrator: &mut Narrator,
    control: &mut dyn ControlSurface,
    renderer: &mut dyn Renderer,
    clock: &mut dyn Clock,
) -> Result<(), RigError> {
    let mut held = narrator.take_snapshot();
    loop {
        let _dt = clock.tick();
        if !edit_tick(narrator, control, renderer, &mut held)? {
            debug!("edit session stopped");
            return Ok(());
        }
    }
}

/// One playback tick: advance the pose blend, rebuild the rig, render.
pub fn playback_tick(
    narrator: &mut Narrator,
    renderer: &mut dyn Renderer,
    dt: f32,
) -> Result<(), RigError> {
    narrator.apply_snapshots(dt);
    narrator.update()?;
    narrator.render(renderer);
    Ok(())
}

/// Runs scripted playback: applies the first pose instantly, then loops
/// until the rig faults. The loop is unbounded; callers that need bounded
/// playback should drive [`playback_tick`] directly.
pub fn run_playback(
    narrator: &mut Narrator,
    renderer: &mut dyn Renderer,
    clock: &mut dyn Clock,
) -> Result<(), RigError> {
    if let Some(first) = narrator.snapshots().first().copied() {
        first.apply(&mut narrator.params);
    }
    loop {
        let dt = clock.tick();
        playback_tick(narrator, renderer, dt)?;
    }
}
