//! Snapshot Playback Tests
//!
//! Sequence blending, looping, the editing command flow, and the on-disk
//! pose format.

use narrator_engine::control::{ControlCommand, ScriptedControl};
use narrator_engine::driver::{playback_tick, run_edit};
use narrator_engine::render::{NullRenderer, RecordingRenderer};
use narrator_engine::snapshot::{load_sequence, save_sequence};
use narrator_engine::{FaceParams, FixedClock, Narrator, RigError, Snapshot};

fn pose_with_rotation(head_rotation: f32) -> Snapshot {
    let mut params = FaceParams::default();
    params.head_rotation = head_rotation;
    Snapshot::capture(&params)
}

#[test]
fn playback_converges_onto_a_target_pose() {
    let mut narrator = Narrator::new();
    let target = pose_with_rotation(0.7);
    narrator.set_snapshots(vec![target]);

    let mut ticks = 0;
    while narrator.cursor() == 0 {
        ticks += 1;
        assert!(ticks < 500, "never converged");
        narrator.apply_snapshots(0.1);
    }

    // Convergence snaps the parameters exactly onto the target.
    assert_eq!(narrator.take_snapshot(), target);
}

#[test]
fn sequence_loops_back_to_the_first_pose_instantly() {
    let mut narrator = Narrator::new();
    let first = pose_with_rotation(0.2);
    let second = pose_with_rotation(0.8);
    narrator.set_snapshots(vec![first, second]);
    first.apply(&mut narrator.params);

    let mut ticks = 0;
    while narrator.cursor() < 2 {
        ticks += 1;
        assert!(ticks < 1000, "sequence never finished");
        narrator.apply_snapshots(0.1);
    }

    // The cursor ran past the end; the next tick jumps home with no blend.
    narrator.apply_snapshots(0.1);
    assert_eq!(narrator.cursor(), 0);
    assert_eq!(narrator.take_snapshot(), first);
}

#[test]
fn empty_sequence_is_a_no_op() {
    let mut narrator = Narrator::new();
    let before = narrator.params;
    narrator.apply_snapshots(0.1);
    assert_eq!(narrator.params, before);
    assert_eq!(narrator.cursor(), 0);
}

#[test]
fn playback_tick_drives_blend_update_and_render() {
    let mut narrator = Narrator::new();
    narrator.set_snapshots(vec![pose_with_rotation(0.3)]);

    let mut renderer = NullRenderer::default();
    for _ in 0..3 {
        playback_tick(&mut narrator, &mut renderer, 1.0 / 60.0).unwrap();
    }
    assert!(narrator.params.head_rotation > 0.0);
}

#[test]
fn edit_session_captures_and_commits_poses() {
    let mut narrator = Narrator::new();
    let pose = pose_with_rotation(0.3);

    let mut control = ScriptedControl::new([
        (pose, vec![ControlCommand::TakeSnapshot]),
        (pose, vec![ControlCommand::CommitSnapshot]),
    ]);
    let mut renderer = RecordingRenderer::new(glam::Vec2::new(800.0, 800.0));
    let mut clock = FixedClock { dt: 1.0 / 60.0 };

    run_edit(&mut narrator, &mut control, &mut renderer, &mut clock).unwrap();

    assert_eq!(narrator.snapshots(), &[pose]);
    // Two rendered ticks, eight shapes each; the stop tick draws nothing.
    assert_eq!(renderer.calls.len(), 16);
}

#[test]
fn sequences_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poses.json");

    let sequence = vec![pose_with_rotation(0.1), pose_with_rotation(-0.4)];
    save_sequence(&path, &sequence).unwrap();
    let loaded = load_sequence(&path).unwrap();

    assert_eq!(loaded, sequence);
}

#[test]
fn malformed_pose_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poses.json");
    std::fs::write(&path, "not json").unwrap();

    let err = load_sequence(&path).unwrap_err();
    assert!(matches!(err, RigError::MalformedSnapshotFile(_)));
}

#[test]
fn missing_pose_files_are_reported() {
    let err = load_sequence(std::path::Path::new("/nonexistent/poses.json")).unwrap_err();
    assert!(matches!(err, RigError::Io(_)));
}
