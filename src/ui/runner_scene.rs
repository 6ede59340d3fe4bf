//! Running Boy scene rendering.
//!
//! The play field is rasterized with [`PixelCanvas`] in world coordinates and
//! stamped row-by-row as Paragraph widgets; text labels are drawn on top in
//! cell coordinates scaled from the same world positions.

use super::game_common::{create_game_layout, render_centered_label, render_status_bar};
use super::raster::PixelCanvas;
use crate::core::constants::{GROUND_LINE_THICKNESS, SPIKE_SPACING};
use crate::runner::{GameSession, Obstacle, Phase, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Palette ─────────────────────────────────────────────────────────
const SKY_BLUE: Color = Color::Rgb(135, 206, 235);
const GROUND_COLOR: Color = Color::Rgb(101, 67, 33);
const BOY_COLOR: Color = Color::Rgb(255, 200, 100);
const OBSTACLE_COLOR: Color = Color::Rgb(34, 139, 34);
const BLACK: Color = Color::Rgb(0, 0, 0);

// ── Label positions (world units) ───────────────────────────────────
const SCORE_POS: (f64, f64) = (10.0, 10.0);
const GAME_OVER_OFFSET_Y: f64 = -50.0;

pub const GAME_OVER_TEXT: &str = "GAME OVER!";
pub const RESTART_HINT: &str = "Press SPACE to restart";

/// Render the full game screen for the current session.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let border = if session.is_over() {
        Color::Red
    } else {
        Color::LightYellow
    };
    let layout = create_game_layout(frame, area, " Running Boy ", border);

    render_play_field(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
}

/// Draw the world: sky, ground, obstacles, player, then the text overlays.
fn render_play_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let config = &session.config;
    let mut canvas = PixelCanvas::new(
        area.width,
        area.height,
        config.screen_width,
        config.screen_height,
        SKY_BLUE,
    );

    draw_ground(&mut canvas, session);
    draw_player(&mut canvas, &session.player);
    for obstacle in &session.obstacles {
        draw_obstacle(&mut canvas, obstacle);
    }

    for (row, line) in canvas.to_lines().into_iter().enumerate() {
        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    // ── Score label (top-left) ────────────────────────────────────────
    let (col, row) = world_to_cell(area, session, SCORE_POS);
    let score = format!("Score: {}", session.score);
    let width = (score.len() as u16).min(area.x + area.width - col);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            score,
            Style::default().fg(BLACK).bg(SKY_BLUE),
        ))),
        Rect::new(col, row, width, 1),
    );

    // ── Game over overlay ─────────────────────────────────────────────
    if session.phase == Phase::GameOver {
        let center_y = config.screen_height / 2.0;
        let (_, title_row) =
            world_to_cell(area, session, (0.0, center_y + GAME_OVER_OFFSET_Y));
        let (_, hint_row) = world_to_cell(area, session, (0.0, center_y));
        // Keep the hint on its own row even when the field is very short
        let hint_row = hint_row.max(title_row + 1);

        let style = Style::default().fg(BLACK).bg(SKY_BLUE);
        render_centered_label(
            frame,
            area,
            title_row,
            GAME_OVER_TEXT,
            style.add_modifier(Modifier::BOLD),
        );
        render_centered_label(frame, area, hint_row, RESTART_HINT, style);
    }
}

/// Map a world point to the terminal cell that shows it.
fn world_to_cell(area: Rect, session: &GameSession, (x, y): (f64, f64)) -> (u16, u16) {
    let config = &session.config;
    let col = (x / config.screen_width * area.width as f64).floor() as u16;
    let row = (y / config.screen_height * area.height as f64).floor() as u16;
    (
        area.x + col.min(area.width.saturating_sub(1)),
        area.y + row.min(area.height.saturating_sub(1)),
    )
}

/// Brown band below the ground line plus the black separator.
fn draw_ground(canvas: &mut PixelCanvas, session: &GameSession) {
    let config = &session.config;
    let ground_line = config.ground_line();
    canvas.fill_rect(
        0.0,
        ground_line,
        config.screen_width,
        config.ground_height,
        GROUND_COLOR,
    );
    canvas.hline(ground_line, GROUND_LINE_THICKNESS, BLACK);
}

/// Body, head, eyes, legs. Offsets are fixed relative to the player box.
fn draw_player(canvas: &mut PixelCanvas, player: &Player) {
    let (x, y, w, h) = (player.x, player.y, player.width, player.height);
    let mid = x + w / 2.0;

    canvas.fill_rect(x, y, w, h, BOY_COLOR);
    canvas.fill_circle(mid, y - 15.0, 15.0, BOY_COLOR);
    canvas.fill_circle(mid - 5.0, y - 18.0, 3.0, BLACK);
    canvas.fill_circle(mid + 5.0, y - 18.0, 3.0, BLACK);
    canvas.fill_rect(x + 8.0, y + h, 8.0, 10.0, BLACK);
    canvas.fill_rect(x + 24.0, y + h, 8.0, 10.0, BLACK);
}

/// Cactus body with a spike on its left face every `SPIKE_SPACING` units.
fn draw_obstacle(canvas: &mut PixelCanvas, obstacle: &Obstacle) {
    let (x, y) = (obstacle.x, obstacle.y);
    canvas.fill_rect(x, y, obstacle.width, obstacle.height, OBSTACLE_COLOR);

    for i in (0..obstacle.height as u32).step_by(SPIKE_SPACING as usize) {
        let i = i as f64;
        canvas.fill_triangle(
            (x - 5.0, y + i + 7.0),
            (x, y + i),
            (x, y + i + 14.0),
            OBSTACLE_COLOR,
        );
    }
}

/// Status line and key hints under the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    match session.phase {
        Phase::Running => render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightYellow,
            &[("[Space]", "Jump"), ("[Esc]", "Quit")],
        ),
        Phase::GameOver => {
            let status = format!("Crashed after {} obstacles", session.score);
            render_status_bar(
                frame,
                area,
                &status,
                Color::Red,
                &[("[Space]", "Restart"), ("[Esc]", "Quit")],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};

    fn session() -> GameSession {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        GameSession::new(GameConfig::default(), &mut rng)
    }

    fn render(session: &GameSession, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_runner_scene(frame, area, session);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_running_scene_shows_score_and_title() {
        let mut session = session();
        session.score = 7;
        let text = render(&session, 82, 24);
        assert!(text.contains("Running Boy"));
        assert!(text.contains("Score: 7"));
        assert!(text.contains("[Space] Jump"));
        assert!(!text.contains(GAME_OVER_TEXT));
    }

    #[test]
    fn test_game_over_scene_shows_overlay() {
        let mut session = session();
        session.phase = Phase::GameOver;
        session.score = 3;
        let text = render(&session, 82, 24);
        assert!(text.contains(GAME_OVER_TEXT));
        assert!(text.contains(RESTART_HINT));
        assert!(text.contains("Score: 3"));
        assert!(text.contains("[Space] Restart"));
    }

    #[test]
    fn test_world_to_cell_scales_and_clamps() {
        let session = session();
        let area = Rect::new(1, 1, 80, 20);
        assert_eq!(world_to_cell(area, &session, (0.0, 0.0)), (1, 1));
        assert_eq!(world_to_cell(area, &session, (400.0, 200.0)), (41, 11));
        assert_eq!(world_to_cell(area, &session, (800.0, 400.0)), (80, 20));
        assert_eq!(world_to_cell(area, &session, (10.0, 10.0)), (2, 1));
    }

    #[test]
    fn test_ground_and_player_colors_present() {
        let session = session();
        let mut canvas = PixelCanvas::new(80, 20, 800.0, 400.0, SKY_BLUE);
        draw_ground(&mut canvas, &session);
        draw_player(&mut canvas, &session.player);

        // 80x40 pixels, 10 world units each. Bottom pixel row is ground.
        assert_eq!(canvas.pixel(0, 39), Some(GROUND_COLOR));
        // Ground line at y=300 -> pixel row 30
        assert_eq!(canvas.pixel(0, 30), Some(BLACK));
        // Player body spans x 100..140, y 240..300
        assert_eq!(canvas.pixel(12, 26), Some(BOY_COLOR));
        // Sky above everything
        assert_eq!(canvas.pixel(40, 2), Some(SKY_BLUE));
    }

    #[test]
    fn test_obstacle_drawn_with_spikes() {
        let obstacle = Obstacle::at(400.0, 300.0, 30.0, 60.0);
        let mut canvas = PixelCanvas::new(80, 20, 800.0, 400.0, SKY_BLUE);
        draw_obstacle(&mut canvas, &obstacle);

        // Body: x 400..430 -> px 40..42, y 240..300 -> py 24..29
        assert_eq!(canvas.pixel(41, 27), Some(OBSTACLE_COLOR));
        // Spikes poke left of the body into column 39
        let spike_rows = (24..30)
            .filter(|&py| canvas.pixel(39, py) == Some(OBSTACLE_COLOR))
            .count();
        assert!(spike_rows >= 1);
        assert_eq!(canvas.pixel(38, 27), Some(SKY_BLUE));
    }

    #[test]
    fn test_partly_offscreen_obstacle_does_not_panic() {
        let mut session = session();
        session.obstacles.push(Obstacle::at(-20.0, 300.0, 30.0, 70.0));
        session.obstacles.push(Obstacle::at(790.0, 300.0, 30.0, 40.0));
        let text = render(&session, 82, 24);
        assert!(text.contains("Score: 0"));
    }
}
