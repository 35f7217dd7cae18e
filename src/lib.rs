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
#![forbid(unsafe_code)]
mod chroma;
mod crop;
mod detile;
mod frame_converter;
mod frame_stream;
mod images;
mod tile_geometry;
mod tiled_to_yuv;
mod yuv_error;

pub use yuv_error::MismatchedSize;
pub use yuv_error::YuvError;

pub use tile_geometry::boundary_padding;
pub use tile_geometry::h_tiles;
pub use tile_geometry::is_tile_pair_aligned;
pub use tile_geometry::plane_size;
pub use tile_geometry::round_up;
pub use tile_geometry::w_tiles;
pub use tile_geometry::TileGridDescriptor;
pub use tile_geometry::{TILE_HEIGHT, TILE_PAIR_WIDTH, TILE_SIZE, TILE_WIDTH};

pub use detile::detile_plane;
pub use detile::tile_offset;
pub use detile::TileOrder;

pub use crop::crop_plane;
pub use crop::crop_rows_in_place;

pub use chroma::interleave_chroma;
pub use chroma::nv12_frame_to_yuv420;
pub use chroma::planarize_chroma;

pub use frame_converter::FrameConverter;
pub use frame_converter::OutputLayout;

pub use images::BufferStoreMut;
pub use images::YuvBiPlanarImageMut;
pub use images::YuvPlanarImageMut;
pub use images::YuvTiledImage;

pub use tiled_to_yuv::nv12_tiled_to_nv12;
pub use tiled_to_yuv::nv12_tiled_to_yuv420;

pub use frame_stream::convert_stream;
pub use frame_stream::LinearFrameWriter;
pub use frame_stream::TiledFrameReader;
