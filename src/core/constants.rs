// World dimensions (world units; the renderer scales these to the terminal)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 400.0;
pub const GROUND_HEIGHT: f64 = 100.0;
pub const GROUND_LINE_THICKNESS: f64 = 3.0;

// Frame rate
pub const FPS: u32 = 60;
pub const FRAME_MS: u64 = 1000 / FPS as u64; // 16ms, ~60 FPS

// Physics (per frame)
pub const GRAVITY: f64 = 0.8;
pub const JUMP_IMPULSE: f64 = -15.0;

// Scrolling
pub const BASE_SPEED: f64 = 6.0;
pub const SPEED_RAMP: f64 = 0.001;

// Player body
pub const PLAYER_X: f64 = 100.0;
pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 60.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 30.0;
pub const OBSTACLE_MIN_HEIGHT: u32 = 40;
pub const OBSTACLE_MAX_HEIGHT: u32 = 70;
pub const SPIKE_SPACING: u32 = 15;

// Spawn cadence in frames (1-2 seconds at 60 FPS)
pub const SPAWN_MIN_FRAMES: u32 = 60;
pub const SPAWN_MAX_FRAMES: u32 = 120;
