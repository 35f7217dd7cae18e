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

#![no_main]

use libfuzzer_sys::fuzz_target;
use nv12tile::{
    nv12_tiled_to_nv12, nv12_tiled_to_yuv420, FrameConverter, OutputLayout, TileGridDescriptor,
    YuvBiPlanarImageMut, YuvPlanarImageMut, YuvTiledImage,
};

fuzz_target!(|data: (u8, u8, bool)| {
    fuzz_tiled_frame(data.0, data.1, data.2);
});

fn fuzz_tiled_frame(i_width: u8, i_height: u8, planar: bool) {
    let width = i_width as u32 * 2;
    let height = i_height as u32 * 2;
    let grid = match TileGridDescriptor::new(width as usize, height as usize) {
        Ok(grid) => grid,
        Err(_) => {
            assert!(width == 0 || height == 0);
            return;
        }
    };
    let tiled = vec![77u8; grid.tiled_frame_bytes()];

    let layout = if planar {
        OutputLayout::Yuv420p
    } else {
        OutputLayout::Nv12
    };
    let mut converter = FrameConverter::new(grid, layout);
    let frame = converter.convert(&tiled).unwrap();
    assert_eq!(frame.len(), grid.linear_frame_bytes());
    assert!(frame.iter().all(|&v| v == 77));

    let expected = frame.to_vec();

    let image = YuvTiledImage::from_frame(&tiled, width, height).unwrap();
    let mut target = vec![0u8; grid.linear_frame_bytes()];
    if planar {
        let mut planar_image = YuvPlanarImageMut::alloc(width, height);
        nv12_tiled_to_yuv420(&image, &mut planar_image).unwrap();
        let mut borrowed = YuvPlanarImageMut::from_frame_mut(&mut target, width, height).unwrap();
        nv12_tiled_to_yuv420(&image, &mut borrowed).unwrap();
    } else {
        let mut bi_planar_image = YuvBiPlanarImageMut::alloc(width, height);
        nv12_tiled_to_nv12(&image, &mut bi_planar_image).unwrap();
        let mut borrowed = YuvBiPlanarImageMut::from_frame_mut(&mut target, width, height).unwrap();
        nv12_tiled_to_nv12(&image, &mut borrowed).unwrap();
    }
    assert_eq!(target, expected);
}
