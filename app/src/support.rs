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
use anyhow::{bail, Context};
use log::info;
use nv12tile::{TileGridDescriptor, TILE_PAIR_WIDTH, TILE_SIZE};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Opens the tiled input and the linear output, refusing to overwrite the input.
pub(crate) fn open_streams(
    input: &Path,
    output: &Path,
) -> anyhow::Result<(BufReader<File>, BufWriter<File>)> {
    if input == output {
        bail!("Input file name and output file name can't be same");
    }
    let infile = File::open(input)
        .with_context(|| format!("Unable to open input file {}", input.display()))?;
    // Catches the same file reached through different paths
    if let (Ok(a), Ok(b)) = (input.canonicalize(), output.canonicalize()) {
        if a == b {
            bail!("Input file name and output file name can't be same");
        }
    }
    let outfile = File::create(output)
        .with_context(|| format!("Unable to open output file {}", output.display()))?;
    Ok((BufReader::new(infile), BufWriter::new(outfile)))
}

pub(crate) fn check_width(width: usize, strict: bool) -> anyhow::Result<()> {
    if strict && !nv12tile::is_tile_pair_aligned(width) {
        bail!(
            "Width of input file must be multiple of {}, got {}",
            TILE_PAIR_WIDTH,
            width
        );
    }
    Ok(())
}

pub(crate) fn log_geometry(grid: &TileGridDescriptor) {
    info!("TILE_SIZE = {}", TILE_SIZE);
    info!("wTiles = {} ({})", grid.w_tiles(), grid.padded_width());
    info!("hTiles = {} ({})", grid.h_tiles(), grid.padded_height());
    info!("hTiles_UV = {}", grid.h_tiles_chroma());
    info!("frame_size_src_Y = {}", grid.luma_plane_bytes());
    info!("frame_size_src_UV = {}", grid.chroma_plane_bytes());
    info!("frame_size_src = {}", grid.tiled_frame_bytes());
    info!("frame_size_dst = {}", grid.linear_frame_bytes());
}
