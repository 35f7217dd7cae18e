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
mod support;

use argh::FromArgs;
use log::{error, info};
use nv12tile::{
    convert_stream, FrameConverter, LinearFrameWriter, OutputLayout, TileGridDescriptor,
    TiledFrameReader,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, FromArgs)]
/// Converts 64x32 Z/flip-Z tiled NV12 frames into linear NV12 or YUV420 planar frames.
struct Args {
    /// tiled NV12 input file
    #[argh(positional)]
    input: PathBuf,

    /// frame width in pixels
    #[argh(positional)]
    width: usize,

    /// frame height in pixels
    #[argh(positional)]
    height: usize,

    /// linear output file
    #[argh(positional)]
    output: PathBuf,

    /// output layout, nv12 or yuv420p
    #[argh(option, default = "OutputLayout::Nv12")]
    format: OutputLayout,

    /// only accept widths that are a multiple of 128
    #[argh(switch)]
    strict: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    support::check_width(args.width, args.strict)?;
    let grid = TileGridDescriptor::new(args.width, args.height)?;
    let (input, output) = support::open_streams(&args.input, &args.output)?;

    support::log_geometry(&grid);

    let mut reader = TiledFrameReader::new(input, &grid);
    let mut writer = LinearFrameWriter::new(output);
    let mut converter = FrameConverter::new(grid, args.format);

    let start_time = Instant::now();
    let frames = convert_stream(&mut reader, &mut writer, &mut converter)?;

    info!(
        "No of frames converted : {} in {:.3} seconds",
        frames,
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Args = argh::from_env();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
