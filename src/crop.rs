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
use crate::yuv_error::{check_overflow_v2, check_plane_channel, MismatchedSize};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

#[inline]
fn check_strided_source(
    src: &[u8],
    src_stride: usize,
    width: usize,
    rows: usize,
) -> Result<(), YuvError> {
    if width == 0 || rows == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if src_stride < width {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected: width,
            received: src_stride,
        }));
    }
    let required = check_overflow_v2(src_stride, rows - 1)? + width;
    if src.len() < required {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected: required,
            received: src.len(),
        }));
    }
    Ok(())
}

/// Compacts `rows` rows written at `src_stride` down to a `width` stride, in place.
///
/// Row `i` moves from `i * src_stride` to `i * width`. Since `width <= src_stride`
/// every destination row starts at or before its source row, so walking rows in
/// increasing order never overwrites a row that has not been moved yet.
/// Nothing is moved when `width == src_stride`.
///
/// After the call the first `width * rows` bytes of `buf` hold the compact rows,
/// the rest of the buffer is left as is.
pub fn crop_rows_in_place(
    buf: &mut [u8],
    src_stride: usize,
    width: usize,
    rows: usize,
) -> Result<(), YuvError> {
    check_strided_source(buf, src_stride, width, rows)?;
    if src_stride == width {
        return Ok(());
    }
    for row in 1..rows {
        let src_start = row * src_stride;
        buf.copy_within(src_start..src_start + width, row * width);
    }
    Ok(())
}

/// Copies `rows` rows of `width` samples between two strided planes.
///
/// # Arguments
///
/// * `src`: Source plane
/// * `src_stride`: Source plane stride, usually the padded width of a detiled plane
/// * `dst`: Destination plane
/// * `dst_stride`: Destination plane stride
/// * `width`: Visible samples per row
/// * `rows`: Rows to copy
///
/// returns: Result<(), [YuvError]>
///
pub fn crop_plane(
    src: &[u8],
    src_stride: usize,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    rows: usize,
) -> Result<(), YuvError> {
    check_strided_source(src, src_stride, width, rows)?;
    if width > u32::MAX as usize || rows > u32::MAX as usize || dst_stride > u32::MAX as usize {
        return Err(YuvError::PointerOverflow);
    }
    check_plane_channel(dst, dst_stride as u32, width as u32, rows as u32)?;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_mut(dst_stride)
            .zip(src.par_chunks(src_stride))
            .take(rows);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_mut(dst_stride)
            .zip(src.chunks(src_stride))
            .take(rows);
    }

    iter.for_each(|(dst_row, src_row)| {
        dst_row[..width].copy_from_slice(&src_row[..width]);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn padded_rows(padded_width: usize, width: usize, rows: usize) -> Vec<u8> {
        let mut buf = vec![0xEEu8; padded_width * rows];
        for (row, chunk) in buf.chunks_exact_mut(padded_width).enumerate() {
            for (x, v) in chunk[..width].iter_mut().enumerate() {
                *v = (row * 7 + x) as u8;
            }
        }
        buf
    }

    #[test]
    fn aligned_width_is_left_untouched() {
        let mut rng = rand::rng();
        let mut buf = vec![0u8; 128 * 48];
        rng.fill(&mut buf[..]);
        let copy = buf.clone();
        crop_rows_in_place(&mut buf, 128, 128, 48).unwrap();
        assert_eq!(buf, copy);
    }

    #[test]
    fn non_aligned_rows_are_compacted() {
        // 200x50 frame detiled at a 256 stride covers 75 NV12 rows
        let rows = 50 * 3 / 2;
        let mut buf = padded_rows(256, 200, 256 * 64 * 3 / 2 / 256);
        crop_rows_in_place(&mut buf, 256, 200, rows).unwrap();
        let expected = padded_rows(200, 200, rows);
        assert_eq!(&buf[..200 * rows], &expected[..]);
    }

    #[test]
    fn crop_plane_honours_destination_stride() {
        let src = padded_rows(256, 200, 10);
        let mut dst = vec![0u8; 210 * 9 + 200];
        crop_plane(&src, 256, &mut dst, 210, 200, 10).unwrap();
        for row in 0..10 {
            assert_eq!(
                &dst[row * 210..row * 210 + 200],
                &src[row * 256..row * 256 + 200]
            );
            if row < 9 {
                assert!(dst[row * 210 + 200..(row + 1) * 210].iter().all(|&v| v == 0));
            }
        }
    }

    #[test]
    fn rejects_short_buffers() {
        let mut buf = vec![0u8; 100];
        assert!(matches!(
            crop_rows_in_place(&mut buf, 64, 32, 3),
            Err(YuvError::SourceSizeMismatch(_))
        ));
        assert!(matches!(
            crop_rows_in_place(&mut buf, 16, 32, 1),
            Err(YuvError::SourceSizeMismatch(_))
        ));
        let src = vec![0u8; 64 * 4];
        let mut dst = vec![0u8; 32 * 3];
        assert!(matches!(
            crop_plane(&src, 64, &mut dst, 32, 32, 4),
            Err(YuvError::DestinationSizeMismatch(_))
        ));
    }
}
