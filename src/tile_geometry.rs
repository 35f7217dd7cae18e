/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::yuv_error::{check_overflow_v2, check_overflow_v3};
use crate::YuvError;

/// Tile width in samples
pub const TILE_WIDTH: usize = 64;
/// Tile height in rows
pub const TILE_HEIGHT: usize = 32;
/// Bytes occupied by a single 8-bit tile
pub const TILE_SIZE: usize = TILE_WIDTH * TILE_HEIGHT;
/// Z and flip-Z blocks span two tile columns, so tiled widths are always a multiple of this
pub const TILE_PAIR_WIDTH: usize = TILE_WIDTH * 2;

/// Rounds `value` up to the next multiple of `multiple`, `multiple` must be a power of two.
#[inline]
pub const fn round_up(value: usize, multiple: usize) -> usize {
    (value + (multiple - 1)) & !(multiple - 1)
}

/// Tile columns needed to cover `width` samples, always even.
#[inline]
pub const fn w_tiles(width: usize) -> usize {
    round_up(width, TILE_PAIR_WIDTH) / TILE_WIDTH
}

/// Tile rows needed to cover `height` rows.
#[inline]
pub const fn h_tiles(height: usize) -> usize {
    round_up(height, TILE_HEIGHT) / TILE_HEIGHT
}

/// Trailing bytes appended after the last tile row of a tiled plane.
///
/// This is `(w_tiles * h_tiles mod 4)` whole tiles, which is what tiled producers emit.
/// It is not a round up to a four tile boundary and must not be "fixed".
#[inline]
pub const fn boundary_padding(w_tiles: usize, h_tiles: usize) -> usize {
    ((w_tiles * h_tiles) % 4) * TILE_SIZE
}

/// Bytes of one tiled plane, tile data plus boundary padding.
#[inline]
pub const fn plane_size(w_tiles: usize, h_tiles: usize) -> usize {
    w_tiles * h_tiles * TILE_SIZE + boundary_padding(w_tiles, h_tiles)
}

/// Whether `width` covers whole tile pairs without rounding.
///
/// Hardware producers only emit such widths, the converter itself accepts any even width.
#[inline]
pub const fn is_tile_pair_aligned(width: usize) -> bool {
    width % TILE_PAIR_WIDTH == 0
}

/// Geometry of a tiled NV12 frame, derived once from its dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TileGridDescriptor {
    width: usize,
    height: usize,
    padded_width: usize,
    padded_height: usize,
    padded_chroma_height: usize,
    w_tiles: usize,
    h_tiles: usize,
    h_tiles_chroma: usize,
    luma_plane_bytes: usize,
    chroma_plane_bytes: usize,
    linear_frame_bytes: usize,
}

impl TileGridDescriptor {
    /// Derives tiled geometry for a `width` x `height` frame.
    ///
    /// # Errors
    ///
    /// [YuvError::InvalidGeometry] when a dimension is zero or odd,
    /// [YuvError::PointerOverflow] when the frame cannot be addressed.
    pub fn new(width: usize, height: usize) -> Result<Self, YuvError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(YuvError::InvalidGeometry { width, height });
        }
        // Guards every product computed below, the padded frame is the largest of them
        let padded_width = width
            .checked_add(TILE_PAIR_WIDTH - 1)
            .map(|w| w & !(TILE_PAIR_WIDTH - 1))
            .ok_or(YuvError::PointerOverflow)?;
        let padded_height = height
            .checked_add(TILE_HEIGHT - 1)
            .map(|h| h & !(TILE_HEIGHT - 1))
            .ok_or(YuvError::PointerOverflow)?;
        check_overflow_v3(padded_width, padded_height, 3)?;

        let w_tiles = padded_width / TILE_WIDTH;
        let h_tiles = padded_height / TILE_HEIGHT;
        let h_tiles_chroma = self::h_tiles(height / 2);

        let linear_frame_bytes = check_overflow_v2(width, height)? * 3 / 2;

        Ok(TileGridDescriptor {
            width,
            height,
            padded_width,
            padded_height,
            padded_chroma_height: h_tiles_chroma * TILE_HEIGHT,
            w_tiles,
            h_tiles,
            h_tiles_chroma,
            luma_plane_bytes: plane_size(w_tiles, h_tiles),
            chroma_plane_bytes: plane_size(w_tiles, h_tiles_chroma),
            linear_frame_bytes,
        })
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width rounded up to whole tile pairs, the row stride of detiled planes.
    #[inline]
    pub const fn padded_width(&self) -> usize {
        self.padded_width
    }

    /// Height rounded up to whole tile rows.
    #[inline]
    pub const fn padded_height(&self) -> usize {
        self.padded_height
    }

    /// Chroma rows rounded up to whole tile rows.
    #[inline]
    pub const fn padded_chroma_height(&self) -> usize {
        self.padded_chroma_height
    }

    #[inline]
    pub const fn w_tiles(&self) -> usize {
        self.w_tiles
    }

    #[inline]
    pub const fn h_tiles(&self) -> usize {
        self.h_tiles
    }

    #[inline]
    pub const fn h_tiles_chroma(&self) -> usize {
        self.h_tiles_chroma
    }

    /// Tiled Y plane bytes, including boundary padding.
    #[inline]
    pub const fn luma_plane_bytes(&self) -> usize {
        self.luma_plane_bytes
    }

    /// Tiled UV plane bytes, including boundary padding.
    #[inline]
    pub const fn chroma_plane_bytes(&self) -> usize {
        self.chroma_plane_bytes
    }

    /// Bytes of one tiled input frame.
    #[inline]
    pub const fn tiled_frame_bytes(&self) -> usize {
        self.luma_plane_bytes + self.chroma_plane_bytes
    }

    /// Bytes of one linear output frame, NV12 and YUV420 planar have the same size.
    #[inline]
    pub const fn linear_frame_bytes(&self) -> usize {
        self.linear_frame_bytes
    }

    /// Luma samples of the linear frame.
    #[inline]
    pub const fn luma_bytes(&self) -> usize {
        self.width * self.height
    }

    /// Interleaved chroma bytes of the linear frame.
    #[inline]
    pub const fn chroma_bytes(&self) -> usize {
        self.linear_frame_bytes - self.width * self.height
    }

    /// Rows of a linear NV12 frame, luma rows followed by interleaved chroma rows.
    #[inline]
    pub const fn linear_rows(&self) -> usize {
        self.height * 3 / 2
    }

    /// Size of the padded raster region both planes are detiled into.
    ///
    /// The luma plane is written at `padded_width` stride starting at offset zero,
    /// the chroma plane starts right after the `height` visible luma rows.
    #[inline]
    pub const fn work_buffer_bytes(&self) -> usize {
        self.padded_width * (self.height + self.padded_chroma_height)
    }

    /// Offset of the detiled chroma plane inside the work buffer.
    #[inline]
    pub const fn chroma_work_offset(&self) -> usize {
        self.padded_width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_dimensions_need_no_padding() {
        for width in (128..=4096).step_by(128) {
            assert_eq!(w_tiles(width) * TILE_WIDTH, width);
        }
        for height in (32..=2176).step_by(32) {
            assert_eq!(h_tiles(height) * TILE_HEIGHT, height);
        }
    }

    #[test]
    fn tile_columns_are_always_even() {
        for width in 1..1000 {
            assert_eq!(w_tiles(width) % 2, 0, "width {}", width);
        }
    }

    #[test]
    fn plane_size_never_undercounts_tiles() {
        for w in (2..40).step_by(2) {
            for h in 1..40 {
                assert!(plane_size(w, h) >= w * h * TILE_SIZE);
                assert_eq!(plane_size(w, h) - w * h * TILE_SIZE, ((w * h) % 4) * TILE_SIZE);
            }
        }
    }

    #[test]
    fn padding_is_the_literal_remainder() {
        // 30 x 34 = 1020 tiles, remainder 0
        assert_eq!(boundary_padding(30, 34), 0);
        // 30 x 17 = 510 tiles, remainder 2, two tiles are appended rather than aligning up
        assert_eq!(boundary_padding(30, 17), 2 * TILE_SIZE);
        // 2 x 1 = 2 tiles, remainder 2
        assert_eq!(plane_size(2, 1), 4 * TILE_SIZE);
    }

    #[test]
    fn geometry_1080p() {
        let grid = TileGridDescriptor::new(1920, 1080).unwrap();
        assert_eq!(grid.padded_width(), 1920);
        assert_eq!(grid.padded_height(), 1088);
        assert_eq!(grid.w_tiles(), 30);
        assert_eq!(grid.h_tiles(), 34);
        assert_eq!(grid.h_tiles_chroma(), 17);
        assert_eq!(grid.luma_plane_bytes(), 30 * 34 * TILE_SIZE);
        assert_eq!(grid.chroma_plane_bytes(), (30 * 17 + 2) * TILE_SIZE);
        assert_eq!(
            grid.tiled_frame_bytes(),
            grid.luma_plane_bytes() + grid.chroma_plane_bytes()
        );
        assert_eq!(grid.linear_frame_bytes(), 1920 * 1080 * 3 / 2);
    }

    #[test]
    fn geometry_minimum_tile_pair() {
        let grid = TileGridDescriptor::new(128, 32).unwrap();
        assert_eq!(grid.w_tiles(), 2);
        assert_eq!(grid.h_tiles(), 1);
        assert_eq!(grid.h_tiles_chroma(), 1);
        assert_eq!(grid.linear_frame_bytes(), 6144);
        assert_eq!(grid.linear_rows(), 48);
    }

    #[test]
    fn geometry_non_aligned() {
        let grid = TileGridDescriptor::new(200, 50).unwrap();
        assert_eq!(grid.padded_width(), 256);
        assert_eq!(grid.padded_height(), 64);
        assert_eq!(grid.w_tiles(), 4);
        assert_eq!(grid.h_tiles(), 2);
        assert_eq!(grid.h_tiles_chroma(), 1);
        assert_eq!(grid.linear_rows(), 75);
        assert_eq!(grid.luma_bytes() + grid.chroma_bytes(), 15000);
        assert!(!is_tile_pair_aligned(200));
        assert!(grid.work_buffer_bytes() >= grid.padded_width() * grid.padded_height());
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        for (w, h) in [(0, 32), (128, 0), (129, 32), (128, 31)] {
            assert!(matches!(
                TileGridDescriptor::new(w, h),
                Err(YuvError::InvalidGeometry { .. })
            ));
        }
        assert!(matches!(
            TileGridDescriptor::new(usize::MAX - 1, 2),
            Err(YuvError::PointerOverflow)
        ));
    }
}
