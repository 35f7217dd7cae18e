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
use crate::tile_geometry::{TILE_HEIGHT, TILE_SIZE, TILE_WIDTH};
use crate::yuv_error::{check_destination_size, check_overflow_v3, check_source_size};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Destination tile coordinates `(row, col)` in the order tiles appear in a tiled stream.
///
/// Tile rows are walked in pairs. Within a pair every step of `Z` emits four tiles
/// from columns `2Z` and `2Z + 1`: even steps go top row then bottom row ("Z"),
/// odd steps go bottom row then top row ("flip-Z"). A trailing unpaired tile row
/// is emitted left to right.
#[derive(Debug, Clone)]
pub struct TileOrder {
    w_tiles: usize,
    h_tiles: usize,
    paired_tiles: usize,
    index: usize,
    total: usize,
}

impl TileOrder {
    /// `w_tiles` is expected to be even, as produced by [crate::w_tiles].
    pub fn new(w_tiles: usize, h_tiles: usize) -> Self {
        TileOrder {
            w_tiles,
            h_tiles,
            paired_tiles: (h_tiles & !1) * w_tiles,
            index: 0,
            total: w_tiles * h_tiles,
        }
    }

    #[inline]
    fn coordinate(&self, index: usize) -> (usize, usize) {
        if index >= self.paired_tiles {
            return (self.h_tiles - 1, index - self.paired_tiles);
        }
        let pair_tiles = 2 * self.w_tiles;
        let pair_start = (index / pair_tiles) * 2;
        let within = index % pair_tiles;
        let z = within / 4;
        let step = within % 4;
        let upper_first = z % 2 == 0;
        let row = if (step < 2) == upper_first {
            pair_start
        } else {
            pair_start + 1
        };
        (row, 2 * z + step % 2)
    }
}

impl Iterator for TileOrder {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let coordinate = self.coordinate(self.index);
        self.index += 1;
        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileOrder {}

/// Byte offset of the top-left sample of tile `(row, col)` in a raster plane.
#[inline]
pub const fn tile_offset(row: usize, col: usize, stride: usize) -> usize {
    row * TILE_HEIGHT * stride + col * TILE_WIDTH
}

#[inline]
fn copy_tile(tile: &[u8], dst: &mut [u8], stride: usize) {
    for (src_row, dst_row) in tile.chunks_exact(TILE_WIDTH).zip(dst.chunks_mut(stride)) {
        dst_row[..TILE_WIDTH].copy_from_slice(src_row);
    }
}

/// Detiles one band of one or two tile rows, `src` and `dst` both start at the band.
fn detile_band(src: &[u8], dst: &mut [u8], w_tiles: usize, tile_rows: usize) {
    let stride = w_tiles * TILE_WIDTH;
    for (tile, (row, col)) in src
        .chunks_exact(TILE_SIZE)
        .zip(TileOrder::new(w_tiles, tile_rows))
    {
        copy_tile(tile, &mut dst[tile_offset(row, col, stride)..], stride);
    }
}

/// Reorders a Z/flip-Z tiled 8-bit plane into raster order.
///
/// Destination rows are written at the padded stride `w_tiles * 64`, cropping to the
/// visible width is left to [crate::crop_rows_in_place] or [crate::crop_plane].
///
/// # Arguments
///
/// * `src`: Tiled plane, at least `w_tiles * h_tiles * 2048` bytes. Trailing boundary padding is ignored.
/// * `w_tiles`: Tile columns, must be even
/// * `h_tiles`: Tile rows
/// * `dst`: Raster plane, at least `w_tiles * 64 * h_tiles * 32` bytes
///
/// returns: Result<(), [YuvError]>
///
pub fn detile_plane(
    src: &[u8],
    w_tiles: usize,
    h_tiles: usize,
    dst: &mut [u8],
) -> Result<(), YuvError> {
    if w_tiles == 0 || h_tiles == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if w_tiles % 2 != 0 {
        return Err(YuvError::OddTileColumns(w_tiles));
    }
    let plane_bytes = check_overflow_v3(w_tiles, h_tiles, TILE_SIZE)?;
    check_source_size(src, plane_bytes)?;
    check_destination_size(dst, plane_bytes)?;

    // Source and destination bands of a tile row pair have the same length
    let band = 2 * w_tiles * TILE_SIZE;
    let paired_bytes = (h_tiles / 2) * band;

    let (src_pairs, src_rest) = src[..plane_bytes].split_at(paired_bytes);
    let (dst_pairs, dst_rest) = dst[..plane_bytes].split_at_mut(paired_bytes);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst_pairs
            .par_chunks_exact_mut(band)
            .zip(src_pairs.par_chunks_exact(band));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst_pairs
            .chunks_exact_mut(band)
            .zip(src_pairs.chunks_exact(band));
    }

    iter.for_each(|(dst_band, src_band)| {
        detile_band(src_band, dst_band, w_tiles, 2);
    });

    if h_tiles % 2 == 1 {
        detile_band(src_rest, dst_rest, w_tiles, 1);
    }

    Ok(())
}
