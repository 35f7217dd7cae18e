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
use crate::chroma::planarize_chroma;
use crate::crop::crop_plane;
use crate::detile::detile_plane;
use crate::images::{YuvBiPlanarImageMut, YuvPlanarImageMut, YuvTiledImage};
use crate::tile_geometry::TileGridDescriptor;
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Detiled planes at the padded stride
struct PaddedPlanes {
    y_plane: Vec<u8>,
    uv_plane: Vec<u8>,
}

fn detile_padded(image: &YuvTiledImage, grid: &TileGridDescriptor) -> Result<PaddedPlanes, YuvError> {
    let stride = grid.padded_width();
    let mut y_plane = vec![0u8; stride * grid.padded_height()];
    let mut uv_plane = vec![0u8; stride * grid.padded_chroma_height()];
    detile_plane(image.y_plane, grid.w_tiles(), grid.h_tiles(), &mut y_plane)?;
    detile_plane(
        image.uv_plane,
        grid.w_tiles(),
        grid.h_tiles_chroma(),
        &mut uv_plane,
    )?;
    Ok(PaddedPlanes { y_plane, uv_plane })
}

/// Converts tiled NV12 into NV12 with arbitrary strides.
///
/// # Arguments
///
/// * `image`: Source tiled image, see [YuvTiledImage]
/// * `bi_planar_image`: Target NV12 image, must have the same dimensions as `image`
///
/// returns: Result<(), [YuvError]>
///
pub fn nv12_tiled_to_nv12(
    image: &YuvTiledImage,
    bi_planar_image: &mut YuvBiPlanarImageMut,
) -> Result<(), YuvError> {
    let grid = image.check_constraints()?;
    bi_planar_image.check_constraints()?;
    if bi_planar_image.width != image.width || bi_planar_image.height != image.height {
        return Err(YuvError::ImageDimensionsNotMatch);
    }

    let padded = detile_padded(image, &grid)?;
    let width = grid.width();

    crop_plane(
        &padded.y_plane,
        grid.padded_width(),
        bi_planar_image.y_plane.as_mut(),
        bi_planar_image.y_stride as usize,
        width,
        grid.height(),
    )?;
    crop_plane(
        &padded.uv_plane,
        grid.padded_width(),
        bi_planar_image.uv_plane.as_mut(),
        bi_planar_image.uv_stride as usize,
        width,
        grid.height() / 2,
    )?;

    Ok(())
}

/// Converts tiled NV12 into YUV 420 planar with arbitrary strides.
///
/// # Arguments
///
/// * `image`: Source tiled image, see [YuvTiledImage]
/// * `planar_image`: Target planar image, must have the same dimensions as `image`
///
/// returns: Result<(), [YuvError]>
///
pub fn nv12_tiled_to_yuv420(
    image: &YuvTiledImage,
    planar_image: &mut YuvPlanarImageMut,
) -> Result<(), YuvError> {
    let grid = image.check_constraints()?;
    planar_image.check_constraints()?;
    if planar_image.width != image.width || planar_image.height != image.height {
        return Err(YuvError::ImageDimensionsNotMatch);
    }

    let padded = detile_padded(image, &grid)?;
    let width = grid.width();
    let chroma_width = width / 2;
    let chroma_rows = grid.height() / 2;

    crop_plane(
        &padded.y_plane,
        grid.padded_width(),
        planar_image.y_plane.as_mut(),
        planar_image.y_stride as usize,
        width,
        grid.height(),
    )?;

    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;
    let u_plane = planar_image.u_plane.as_mut();
    let v_plane = planar_image.v_plane.as_mut();

    #[allow(unused_mut)]
    let mut iter;
    #[cfg(feature = "rayon")]
    {
        iter = u_plane
            .par_chunks_mut(u_stride)
            .zip(v_plane.par_chunks_mut(v_stride))
            .zip(padded.uv_plane.par_chunks_exact(grid.padded_width()))
            .take(chroma_rows);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = u_plane
            .chunks_mut(u_stride)
            .zip(v_plane.chunks_mut(v_stride))
            .zip(padded.uv_plane.chunks_exact(grid.padded_width()))
            .take(chroma_rows);
    }

    iter.try_for_each(|((u_row, v_row), uv_row)| {
        planarize_chroma(
            &uv_row[..width],
            &mut u_row[..chroma_width],
            &mut v_row[..chroma_width],
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferStoreMut, FrameConverter, OutputLayout};
    use rand::Rng;

    fn random_frame(grid: &TileGridDescriptor) -> Vec<u8> {
        let mut frame = vec![0u8; grid.tiled_frame_bytes()];
        rand::rng().fill(&mut frame[..]);
        frame
    }

    #[test]
    fn nv12_matches_frame_converter() {
        let grid = TileGridDescriptor::new(200, 50).unwrap();
        let frame = random_frame(&grid);
        let image = YuvTiledImage::from_frame(&frame, 200, 50).unwrap();

        let mut bi_planar = YuvBiPlanarImageMut::alloc(200, 50);
        nv12_tiled_to_nv12(&image, &mut bi_planar).unwrap();

        let mut converter = FrameConverter::new(grid, OutputLayout::Nv12);
        let linear = converter.convert(&frame).unwrap();
        assert_eq!(bi_planar.y_plane.borrow(), &linear[..200 * 50]);
        assert_eq!(bi_planar.uv_plane.borrow(), &linear[200 * 50..]);
    }

    #[test]
    fn yuv420_matches_frame_converter() {
        let grid = TileGridDescriptor::new(384, 96).unwrap();
        let frame = random_frame(&grid);
        let image = YuvTiledImage::from_frame(&frame, 384, 96).unwrap();

        let mut planar = YuvPlanarImageMut::alloc(384, 96);
        nv12_tiled_to_yuv420(&image, &mut planar).unwrap();

        let mut converter = FrameConverter::new(grid, OutputLayout::Yuv420p);
        let linear = converter.convert(&frame).unwrap();
        let luma = 384 * 96;
        let chroma = luma / 4;
        assert_eq!(planar.y_plane.borrow(), &linear[..luma]);
        assert_eq!(planar.u_plane.borrow(), &linear[luma..luma + chroma]);
        assert_eq!(planar.v_plane.borrow(), &linear[luma + chroma..]);
    }

    #[test]
    fn strided_destination_keeps_padding() {
        let grid = TileGridDescriptor::new(128, 32).unwrap();
        let frame = random_frame(&grid);
        let image = YuvTiledImage::from_frame(&frame, 128, 32).unwrap();

        let y_stride = 160usize;
        let uv_stride = 144usize;
        let mut bi_planar = YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Owned(vec![0xAAu8; y_stride * 32]),
            y_stride: y_stride as u32,
            uv_plane: BufferStoreMut::Owned(vec![0xAAu8; uv_stride * 16]),
            uv_stride: uv_stride as u32,
            width: 128,
            height: 32,
        };
        nv12_tiled_to_nv12(&image, &mut bi_planar).unwrap();

        let y = bi_planar.y_plane.borrow();
        for row in 0..32 {
            assert!(y[row * y_stride + 128..(row + 1) * y_stride]
                .iter()
                .all(|&v| v == 0xAA));
        }
    }

    #[test]
    fn yuv420_strided_destination() {
        let grid = TileGridDescriptor::new(256, 64).unwrap();
        let frame = random_frame(&grid);
        let image = YuvTiledImage::from_frame(&frame, 256, 64).unwrap();

        let y_stride = 272usize;
        let chroma_stride = 144usize;
        let mut planar = YuvPlanarImageMut {
            y_plane: BufferStoreMut::Owned(vec![0x55u8; y_stride * 64]),
            y_stride: y_stride as u32,
            u_plane: BufferStoreMut::Owned(vec![0x55u8; chroma_stride * 32]),
            u_stride: chroma_stride as u32,
            v_plane: BufferStoreMut::Owned(vec![0x55u8; chroma_stride * 32]),
            v_stride: chroma_stride as u32,
            width: 256,
            height: 64,
        };
        nv12_tiled_to_yuv420(&image, &mut planar).unwrap();

        let mut converter = FrameConverter::new(grid, OutputLayout::Yuv420p);
        let linear = converter.convert(&frame).unwrap();
        let luma = 256 * 64;
        let chroma = luma / 4;
        let u = planar.u_plane.borrow();
        let v = planar.v_plane.borrow();
        for row in 0..32 {
            let line = row * chroma_stride;
            assert_eq!(&u[line..line + 128], &linear[luma + row * 128..luma + (row + 1) * 128]);
            assert_eq!(
                &v[line..line + 128],
                &linear[luma + chroma + row * 128..luma + chroma + (row + 1) * 128]
            );
            assert!(u[line + 128..line + chroma_stride].iter().all(|&s| s == 0x55));
        }
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let grid = TileGridDescriptor::new(256, 64).unwrap();
        let frame = random_frame(&grid);
        let image = YuvTiledImage::from_frame(&frame, 256, 64).unwrap();
        let mut bi_planar = YuvBiPlanarImageMut::alloc(256, 32);
        assert!(matches!(
            nv12_tiled_to_nv12(&image, &mut bi_planar),
            Err(YuvError::ImageDimensionsNotMatch)
        ));
    }
}
