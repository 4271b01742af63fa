//! Frame loop helpers.

use flipline_core::profiling;
use flipline_ui::{ItemId, ReorderableList, TransitionOutcome};

use crate::mock_host::MockHost;

/// One 60 Hz frame.
pub const FRAME_SECS: f32 = 1.0 / 60.0;

/// Upper bound for [`settle`]; ten seconds of frames.
const MAX_FRAMES: usize = 600;

/// Run one animation frame: apply queued commits, advance transitions by
/// `delta_time` and deliver every finished transition to the list.
pub fn run_frame<T>(
    list: &mut ReorderableList<T>,
    host: &mut MockHost,
    delta_time: f32,
) -> Vec<(ItemId, TransitionOutcome)> {
    profiling::new_frame();
    list.on_animation_frame(host);
    host.advance(delta_time)
        .into_iter()
        .map(|id| {
            let outcome = list.on_transition_end(&id, host);
            (id, outcome)
        })
        .collect()
}

/// Run frames until nothing is queued or animating.
///
/// Returns the number of frames it took.
pub fn settle<T>(list: &mut ReorderableList<T>, host: &mut MockHost) -> usize {
    for frame in 0..MAX_FRAMES {
        if host.is_idle() && list.animator().pending_commits() == 0 {
            return frame;
        }
        run_frame(list, host, FRAME_SECS);
    }
    MAX_FRAMES
}
