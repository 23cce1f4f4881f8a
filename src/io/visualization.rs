//! Animated GIF replay of an elimination sequence

use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

use image::{Frame, Rgba, RgbaImage};
use ndarray::Array2;

use crate::algorithm::solver::Move;
use crate::io::configuration::{
    CELL_PIXEL_SIZE, EMPTY_COLOR, FINAL_FRAME_HOLD, TAG_PALETTE, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{PuzzleError, Result, file_system_error};
use crate::spatial::Grid;

/// Captures the starting board and the moves applied to it
///
/// Tags are reduced to palette indices in the order they are first seen, so
/// the capture is independent of the tag type.
pub struct ReplayCapture {
    /// Palette index per cell, indexed `[x, y]` like the grid
    initial: Array2<Option<usize>>,
    moves: Vec<Move>,
}

impl ReplayCapture {
    /// Snapshot a board before any move is applied
    pub fn new<T: Clone + Eq + Hash>(grid: &Grid<T>) -> Self {
        let mut palette_slots: HashMap<T, usize> = HashMap::new();
        let mut initial = Array2::from_elem((grid.width(), grid.height()), None);

        for position in grid.interior_positions() {
            let Some(tag) = grid.type_at(position) else {
                continue;
            };
            let next_slot = palette_slots.len();
            let slot = *palette_slots.entry(tag.clone()).or_insert(next_slot);
            if let Some(cell) = initial.get_mut(position.index()) {
                *cell = Some(slot);
            }
        }

        Self {
            initial,
            moves: Vec::new(),
        }
    }

    /// Record one elimination
    pub fn record_move(&mut self, step: Move) {
        self.moves.push(step);
    }

    /// Record a sequence of eliminations in order
    pub fn record_moves(&mut self, steps: &[Move]) {
        self.moves.extend_from_slice(steps);
    }

    /// Number of recorded moves
    pub const fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Export the replay as a GIF, one frame per move
    ///
    /// Frames are skipped when the requested delay is below what viewers
    /// display reliably, keeping the apparent replay speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No moves were recorded
    /// - The parent directory or the file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.moves.is_empty() {
            return Err(PuzzleError::InvalidParameter {
                parameter: "visualize",
                value: output_path.display().to_string(),
                reason: "no moves recorded for the replay".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| PuzzleError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!(
            "wrote {} move replay to {}",
            self.moves.len(),
            output_path.display()
        );
        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut board = self.initial.clone();
        let mut frames = vec![Self::render_frame(&board, delay_ms)];

        for (applied, step) in self.moves.iter().enumerate() {
            for position in [step.first, step.second] {
                if let Some(cell) = board.get_mut(position.index()) {
                    *cell = None;
                }
            }
            if (applied + 1) % skip_factor == 0 {
                frames.push(Self::render_frame(&board, delay_ms));
            }
        }

        if self.moves.len() % skip_factor != 0 {
            frames.push(Self::render_frame(&board, delay_ms));
        }

        // Hold the final board
        frames.push(Self::render_frame(
            &board,
            delay_ms.saturating_mul(FINAL_FRAME_HOLD),
        ));
        frames
    }

    fn render_frame(board: &Array2<Option<usize>>, delay_ms: u32) -> Frame {
        let (lines, columns) = board.dim();
        let mut img = RgbaImage::from_pixel(
            columns as u32 * CELL_PIXEL_SIZE,
            lines as u32 * CELL_PIXEL_SIZE,
            Rgba(EMPTY_COLOR),
        );

        for ((x, y), slot) in board.indexed_iter() {
            let Some(slot) = slot else {
                continue;
            };
            let color = TAG_PALETTE
                .get(slot % TAG_PALETTE.len())
                .copied()
                .unwrap_or(EMPTY_COLOR);

            // One pixel gutter keeps neighbouring tiles of the same tag apart
            let top = x as u32 * CELL_PIXEL_SIZE;
            let left = y as u32 * CELL_PIXEL_SIZE;
            for dy in 1..CELL_PIXEL_SIZE {
                for dx in 1..CELL_PIXEL_SIZE {
                    img.put_pixel(left + dx, top + dy, Rgba(color));
                }
            }
        }

        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
