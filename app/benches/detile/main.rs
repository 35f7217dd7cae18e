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
use criterion::{criterion_group, criterion_main, Criterion};
use nv12tile::{
    detile_plane, nv12_tiled_to_yuv420, FrameConverter, OutputLayout, TileGridDescriptor,
    YuvPlanarImageMut, YuvTiledImage,
};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let grid = TileGridDescriptor::new(1920, 1080).unwrap();
    let mut tiled = vec![0u8; grid.tiled_frame_bytes()];
    rand::rng().fill(&mut tiled[..]);

    c.bench_function("nv12tile: Detile Y plane 1080p", |b| {
        let mut dst = vec![0u8; grid.padded_width() * grid.padded_height()];
        b.iter(|| {
            detile_plane(&tiled, grid.w_tiles(), grid.h_tiles(), &mut dst).unwrap();
        })
    });

    c.bench_function("nv12tile: Tiled -> NV12 1080p", |b| {
        let mut converter = FrameConverter::new(grid, OutputLayout::Nv12);
        b.iter(|| {
            converter.convert(&tiled).unwrap();
        })
    });

    c.bench_function("nv12tile: Tiled -> YUV420p 1080p", |b| {
        let mut converter = FrameConverter::new(grid, OutputLayout::Yuv420p);
        b.iter(|| {
            converter.convert(&tiled).unwrap();
        })
    });

    c.bench_function("nv12tile: Tiled image -> YUV420 planar image 1080p", |b| {
        let image = YuvTiledImage::from_frame(&tiled, 1920, 1080).unwrap();
        let mut planar_image = YuvPlanarImageMut::alloc(1920, 1080);
        b.iter(|| {
            nv12_tiled_to_yuv420(&image, &mut planar_image).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
