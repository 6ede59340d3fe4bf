//! Terminal UI for the runner.

pub mod game_common;
pub mod raster;
pub mod runner_scene;

use crate::runner::GameSession;
use ratatui::Frame;

/// Draw one frame. Read-only over the session.
pub fn draw_ui(frame: &mut Frame, session: &GameSession) {
    let area = frame.size();
    if game_common::render_too_small(frame, area) {
        return;
    }
    runner_scene::render_runner_scene(frame, area, session);
}
