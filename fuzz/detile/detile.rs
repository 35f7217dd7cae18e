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
use nv12tile::{detile_plane, TileOrder, TILE_SIZE};

fuzz_target!(|data: (u8, u8, u8)| {
    fuzz_detile(data.0, data.1, data.2);
});

fn fuzz_detile(i_w_tiles: u8, i_h_tiles: u8, fill: u8) {
    if i_w_tiles == 0 || i_h_tiles == 0 {
        return;
    }
    let w_tiles = (i_w_tiles as usize % 32) * 2 + 2;
    let h_tiles = i_h_tiles as usize % 40 + 1;
    let mut src = vec![fill; w_tiles * h_tiles * TILE_SIZE];
    for (i, tile) in src.chunks_exact_mut(TILE_SIZE).enumerate() {
        tile[0] = i as u8;
    }
    let stride = w_tiles * 64;
    let mut dst = vec![0u8; stride * h_tiles * 32];

    detile_plane(&src, w_tiles, h_tiles, &mut dst).unwrap();

    for (i, (row, col)) in TileOrder::new(w_tiles, h_tiles).enumerate() {
        assert_eq!(dst[row * 32 * stride + col * 64], i as u8);
    }

    // Odd tile columns must be refused rather than overrun
    assert!(detile_plane(&src, w_tiles - 1, h_tiles, &mut dst).is_err());
}
