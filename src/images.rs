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
use crate::tile_geometry::TileGridDescriptor;
use crate::yuv_error::{check_destination_size, check_plane_channel, check_source_size};
use crate::YuvError;

/// Plane storage of a destination image, either caller memory or an owned vector
#[derive(Debug)]
pub enum BufferStoreMut<'a> {
    Borrowed(&'a mut [u8]),
    Owned(Vec<u8>),
}

impl BufferStoreMut<'_> {
    pub fn borrow(&self) -> &[u8] {
        match self {
            Self::Borrowed(plane) => plane,
            Self::Owned(plane) => plane,
        }
    }

    pub fn as_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Borrowed(plane) => plane,
            Self::Owned(plane) => plane,
        }
    }
}

#[derive(Debug, Clone)]
/// Non-mutable representation of a Z/flip-Z tiled NV12 image
pub struct YuvTiledImage<'a> {
    /// Tiled luma plane, boundary padding included
    pub y_plane: &'a [u8],
    /// Tiled interleaved chroma plane, boundary padding included
    pub uv_plane: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl<'a> YuvTiledImage<'a> {
    /// Splits one tiled frame, `Y` tiles followed by `UV` tiles.
    pub fn from_frame(frame: &'a [u8], width: u32, height: u32) -> Result<Self, YuvError> {
        let grid = TileGridDescriptor::new(width as usize, height as usize)?;
        check_source_size(frame, grid.tiled_frame_bytes())?;
        let (y_plane, uv_plane) = frame[..grid.tiled_frame_bytes()].split_at(grid.luma_plane_bytes());
        Ok(YuvTiledImage {
            y_plane,
            uv_plane,
            width,
            height,
        })
    }

    pub fn grid(&self) -> Result<TileGridDescriptor, YuvError> {
        TileGridDescriptor::new(self.width as usize, self.height as usize)
    }

    pub fn check_constraints(&self) -> Result<TileGridDescriptor, YuvError> {
        let grid = self.grid()?;
        check_source_size(self.y_plane, grid.luma_plane_bytes())?;
        check_source_size(self.uv_plane, grid.chroma_plane_bytes())?;
        Ok(grid)
    }
}

#[derive(Debug)]
/// Mutable linear NV12 image, luma plane and interleaved `UV` plane
pub struct YuvBiPlanarImageMut<'a> {
    pub y_plane: BufferStoreMut<'a>,
    /// Bytes per luma row
    pub y_stride: u32,
    pub uv_plane: BufferStoreMut<'a>,
    /// Bytes per chroma row, one row holds `width / 2` `UV` pairs
    pub uv_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a> YuvBiPlanarImageMut<'a> {
    /// Allocates a compact NV12 image, strides equal the width.
    pub fn alloc(width: u32, height: u32) -> Self {
        let luma = width as usize * height as usize;
        YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Owned(vec![0u8; luma]),
            y_stride: width,
            uv_plane: BufferStoreMut::Owned(vec![0u8; luma / 2]),
            uv_stride: width,
            width,
            height,
        }
    }

    /// Borrows a compact NV12 frame of `width * height * 3 / 2` bytes as an image.
    ///
    /// This is the layout [crate::FrameConverter] emits for [crate::OutputLayout::Nv12].
    pub fn from_frame_mut(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, YuvError> {
        let grid = TileGridDescriptor::new(width as usize, height as usize)?;
        check_destination_size(&frame[..], grid.linear_frame_bytes())?;
        let (y_plane, uv_plane) =
            frame[..grid.linear_frame_bytes()].split_at_mut(grid.luma_bytes());
        Ok(YuvBiPlanarImageMut {
            y_plane: BufferStoreMut::Borrowed(y_plane),
            y_stride: width,
            uv_plane: BufferStoreMut::Borrowed(uv_plane),
            uv_stride: width,
            width,
            height,
        })
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_plane_channel(self.y_plane.borrow(), self.y_stride, self.width, self.height)?;
        check_plane_channel(
            self.uv_plane.borrow(),
            self.uv_stride,
            self.width,
            self.height / 2,
        )
    }
}

#[derive(Debug)]
/// Mutable linear YUV 420 planar image, separate `U` and `V` planes
pub struct YuvPlanarImageMut<'a> {
    pub y_plane: BufferStoreMut<'a>,
    /// Bytes per luma row
    pub y_stride: u32,
    pub u_plane: BufferStoreMut<'a>,
    /// Bytes per `U` row
    pub u_stride: u32,
    pub v_plane: BufferStoreMut<'a>,
    /// Bytes per `V` row
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<'a> YuvPlanarImageMut<'a> {
    /// Allocates a compact planar image, chroma strides are `width / 2`.
    pub fn alloc(width: u32, height: u32) -> Self {
        let luma = width as usize * height as usize;
        let chroma_width = width / 2;
        Self {
            y_plane: BufferStoreMut::Owned(vec![0u8; luma]),
            y_stride: width,
            u_plane: BufferStoreMut::Owned(vec![0u8; luma / 4]),
            u_stride: chroma_width,
            v_plane: BufferStoreMut::Owned(vec![0u8; luma / 4]),
            v_stride: chroma_width,
            width,
            height,
        }
    }

    /// Borrows a compact `Y`, `U`, `V` frame of `width * height * 3 / 2` bytes as an image.
    ///
    /// This is the layout [crate::FrameConverter] emits for [crate::OutputLayout::Yuv420p].
    pub fn from_frame_mut(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, YuvError> {
        let grid = TileGridDescriptor::new(width as usize, height as usize)?;
        check_destination_size(&frame[..], grid.linear_frame_bytes())?;
        let (y_plane, chroma) =
            frame[..grid.linear_frame_bytes()].split_at_mut(grid.luma_bytes());
        let (u_plane, v_plane) = chroma.split_at_mut(grid.luma_bytes() / 4);
        let chroma_width = width / 2;
        Ok(Self {
            y_plane: BufferStoreMut::Borrowed(y_plane),
            y_stride: width,
            u_plane: BufferStoreMut::Borrowed(u_plane),
            u_stride: chroma_width,
            v_plane: BufferStoreMut::Borrowed(v_plane),
            v_stride: chroma_width,
            width,
            height,
        })
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        let chroma_width = self.width / 2;
        let chroma_height = self.height / 2;
        check_plane_channel(self.y_plane.borrow(), self.y_stride, self.width, self.height)?;
        check_plane_channel(self.u_plane.borrow(), self.u_stride, chroma_width, chroma_height)?;
        check_plane_channel(self.v_plane.borrow(), self.v_stride, chroma_width, chroma_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiled_frame_is_split_at_luma_plane() {
        let grid = TileGridDescriptor::new(256, 64).unwrap();
        let frame = vec![0u8; grid.tiled_frame_bytes() + 10];
        let image = YuvTiledImage::from_frame(&frame, 256, 64).unwrap();
        assert_eq!(image.y_plane.len(), grid.luma_plane_bytes());
        assert_eq!(image.uv_plane.len(), grid.chroma_plane_bytes());
        assert!(image.check_constraints().is_ok());
        assert!(YuvTiledImage::from_frame(&frame[..100], 256, 64).is_err());
    }

    #[test]
    fn allocated_images_satisfy_constraints() {
        let bi_planar = YuvBiPlanarImageMut::alloc(200, 50);
        assert_eq!(bi_planar.uv_plane.borrow().len(), 200 * 25);
        assert!(bi_planar.check_constraints().is_ok());

        let planar = YuvPlanarImageMut::alloc(200, 50);
        assert_eq!(planar.u_plane.borrow().len(), 100 * 25);
        assert!(planar.check_constraints().is_ok());
    }

    #[test]
    fn borrowed_nv12_frame_writes_through() {
        let mut frame = vec![0u8; 128 * 32 * 3 / 2];
        {
            let mut image = YuvBiPlanarImageMut::from_frame_mut(&mut frame, 128, 32).unwrap();
            assert!(image.check_constraints().is_ok());
            assert_eq!(image.y_plane.borrow().len(), 128 * 32);
            assert_eq!(image.uv_plane.borrow().len(), 128 * 16);
            image.uv_plane.as_mut()[0] = 9;
        }
        assert_eq!(frame[128 * 32], 9);
    }

    #[test]
    fn borrowed_planar_frame_splits_chroma() {
        let mut frame = vec![0u8; 128 * 32 * 3 / 2];
        {
            let mut image = YuvPlanarImageMut::from_frame_mut(&mut frame, 128, 32).unwrap();
            assert!(image.check_constraints().is_ok());
            assert_eq!(image.u_plane.borrow().len(), 64 * 16);
            assert_eq!(image.v_plane.borrow().len(), 64 * 16);
            image.v_plane.as_mut()[0] = 4;
        }
        assert_eq!(frame[128 * 32 + 64 * 16], 4);
    }

    #[test]
    fn borrowed_frames_must_be_large_enough() {
        let mut frame = vec![0u8; 128 * 32];
        assert!(matches!(
            YuvBiPlanarImageMut::from_frame_mut(&mut frame, 128, 32),
            Err(YuvError::DestinationSizeMismatch(_))
        ));
        assert!(matches!(
            YuvPlanarImageMut::from_frame_mut(&mut frame, 128, 31),
            Err(YuvError::InvalidGeometry { .. })
        ));
    }
}
