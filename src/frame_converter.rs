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
use crate::chroma::nv12_frame_to_yuv420;
use crate::crop::crop_rows_in_place;
use crate::detile::detile_plane;
use crate::tile_geometry::TileGridDescriptor;
use crate::yuv_error::{check_destination_size, check_source_size};
use crate::YuvError;
use log::{debug, trace};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Layout of converted frames
#[repr(u8)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum OutputLayout {
    /// Luma plane followed by interleaved UV
    #[default]
    Nv12 = 0,
    /// Luma plane followed by separate U and V planes
    Yuv420p = 1,
}

impl TryFrom<u8> for OutputLayout {
    type Error = YuvError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutputLayout::Nv12),
            1 => Ok(OutputLayout::Yuv420p),
            _ => Err(YuvError::UnknownLayout(value)),
        }
    }
}

impl FromStr for OutputLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nv12" => Ok(OutputLayout::Nv12),
            "yuv420p" => Ok(OutputLayout::Yuv420p),
            _ => Err(format!(
                "unknown output format {:?}, expected nv12 or yuv420p",
                s
            )),
        }
    }
}

impl Display for OutputLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputLayout::Nv12 => f.write_str("nv12"),
            OutputLayout::Yuv420p => f.write_str("yuv420p"),
        }
    }
}

/// Converts tiled NV12 frames of one resolution into linear frames.
///
/// Holds the padded work buffer and the chroma scratch buffer, both are reused
/// for every frame.
#[derive(Debug)]
pub struct FrameConverter {
    grid: TileGridDescriptor,
    layout: OutputLayout,
    work: Vec<u8>,
    scratch: Vec<u8>,
}

impl FrameConverter {
    pub fn new(grid: TileGridDescriptor, layout: OutputLayout) -> Self {
        debug!(
            "Tiled frame {}x{} padded to {}x{}: {}x{} luma tiles, {} chroma tile rows, {} tiled bytes -> {} {} bytes",
            grid.width(),
            grid.height(),
            grid.padded_width(),
            grid.padded_height(),
            grid.w_tiles(),
            grid.h_tiles(),
            grid.h_tiles_chroma(),
            grid.tiled_frame_bytes(),
            grid.linear_frame_bytes(),
            layout,
        );
        FrameConverter {
            grid,
            layout,
            work: vec![0u8; grid.work_buffer_bytes()],
            scratch: Vec::with_capacity(grid.chroma_bytes()),
        }
    }

    #[inline]
    pub fn grid(&self) -> &TileGridDescriptor {
        &self.grid
    }

    #[inline]
    pub fn layout(&self) -> OutputLayout {
        self.layout
    }

    /// Converts one tiled frame, `Y` tiles followed by `UV` tiles.
    ///
    /// Returns the linear frame, exactly [TileGridDescriptor::linear_frame_bytes] long.
    /// The slice borrows the converter's work buffer and is overwritten by the next call.
    pub fn convert(&mut self, tiled: &[u8]) -> Result<&[u8], YuvError> {
        let grid = self.grid;
        check_source_size(tiled, grid.tiled_frame_bytes())?;
        trace!("Converting tiled frame of {} bytes", tiled.len());

        self.work.fill(0);

        let (y_tiles, uv_tiles) = tiled.split_at(grid.luma_plane_bytes());

        // Luma padding rows spill into the chroma region, chroma has to be detiled second
        detile_plane(y_tiles, grid.w_tiles(), grid.h_tiles(), &mut self.work)?;
        detile_plane(
            uv_tiles,
            grid.w_tiles(),
            grid.h_tiles_chroma(),
            &mut self.work[grid.chroma_work_offset()..],
        )?;

        crop_rows_in_place(
            &mut self.work,
            grid.padded_width(),
            grid.width(),
            grid.linear_rows(),
        )?;

        let frame = &mut self.work[..grid.linear_frame_bytes()];
        if self.layout == OutputLayout::Yuv420p {
            nv12_frame_to_yuv420(frame, grid.width(), grid.height(), &mut self.scratch)?;
        }

        Ok(frame)
    }

    /// Same as [FrameConverter::convert] but copies the linear frame into `dst`.
    pub fn convert_into(&mut self, tiled: &[u8], dst: &mut [u8]) -> Result<(), YuvError> {
        let frame_bytes = self.grid.linear_frame_bytes();
        check_destination_size(dst, frame_bytes)?;
        let frame = self.convert(tiled)?;
        dst[..frame_bytes].copy_from_slice(frame);
        Ok(())
    }
}
