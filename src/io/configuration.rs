//! Board defaults and runtime configuration constants

// Play area of the standard board layout
/// Default play area width, excluding the border
pub const DEFAULT_PLAY_WIDTH: usize = 10;
/// Default play area height, excluding the border
pub const DEFAULT_PLAY_HEIGHT: usize = 7;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed play area dimension
pub const MAX_PLAY_DIMENSION: usize = 1_000;

// Tag list parsing
/// Separator between tags in a flat tag list
pub const TAG_SEPARATOR: char = ',';
/// Tag that marks an interior cell as initially empty
pub const EMPTY_TAG: &str = "_";

// Random board generation
/// Fixed seed for reproducible boards
pub const DEFAULT_SEED: u64 = 42;
/// Default number of distinct tile kinds
pub const DEFAULT_TILE_KINDS: usize = 7;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Replay animation settings
/// Edge length in pixels of one rendered cell
pub const CELL_PIXEL_SIZE: u32 = 16;
/// Delay between replay frames, one frame per move
pub const REPLAY_FRAME_DELAY_MS: u32 = 500;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the delay of the final frame
pub const FINAL_FRAME_HOLD: u32 = 4;
/// Color of empty cells, including the border ring
pub const EMPTY_COLOR: [u8; 4] = [40, 40, 48, 255];
/// Colors assigned to tags in discovery order, cycling when exhausted
pub const TAG_PALETTE: [[u8; 4]; 12] = [
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [255, 225, 25, 255],
    [0, 130, 200, 255],
    [245, 130, 48, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [210, 245, 60, 255],
    [250, 190, 212, 255],
    [0, 128, 128, 255],
    [170, 110, 40, 255],
];
