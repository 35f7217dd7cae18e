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
use crate::yuv_error::{check_destination_size, check_overflow_v2, check_source_size};
use crate::YuvError;

/// Splits interleaved `UVUV..` samples into a `U` plane and a `V` plane.
///
/// `u.len()` samples are produced per plane, `uv` must hold twice as many.
pub fn planarize_chroma(uv: &[u8], u: &mut [u8], v: &mut [u8]) -> Result<(), YuvError> {
    let chroma_len = u.len();
    check_destination_size(v, chroma_len)?;
    check_source_size(uv, check_overflow_v2(chroma_len, 2)?)?;

    for (pair, (u_dst, v_dst)) in uv
        .chunks_exact(2)
        .zip(u.iter_mut().zip(v[..chroma_len].iter_mut()))
    {
        *u_dst = pair[0];
        *v_dst = pair[1];
    }
    Ok(())
}

/// Interleaves a `U` plane and a `V` plane into `UVUV..` samples.
///
/// `u.len()` pairs are produced, `uv` must have room for twice as many samples.
pub fn interleave_chroma(u: &[u8], v: &[u8], uv: &mut [u8]) -> Result<(), YuvError> {
    let chroma_len = u.len();
    check_source_size(v, chroma_len)?;
    check_destination_size(uv, check_overflow_v2(chroma_len, 2)?)?;

    for (pair, (&u_src, &v_src)) in uv
        .chunks_exact_mut(2)
        .zip(u.iter().zip(v[..chroma_len].iter()))
    {
        pair[0] = u_src;
        pair[1] = v_src;
    }
    Ok(())
}

/// Converts a compact NV12 frame into YUV420 planar layout, in place.
///
/// The luma plane stays where it is. The interleaved chroma is copied to `scratch`
/// first and then split into `U` at `[luma, luma + chroma)` and `V` at
/// `[luma + chroma, luma + 2 * chroma)` where `luma = width * height` and
/// `chroma = width * height / 4`.
pub fn nv12_frame_to_yuv420(
    frame: &mut [u8],
    width: usize,
    height: usize,
    scratch: &mut Vec<u8>,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    let luma_len = check_overflow_v2(width, height)?;
    let chroma_len = luma_len / 4;
    check_source_size(frame, luma_len + chroma_len * 2)?;

    let uv_region = &mut frame[luma_len..luma_len + chroma_len * 2];
    scratch.clear();
    scratch.extend_from_slice(uv_region);

    let (u_plane, v_plane) = uv_region.split_at_mut(chroma_len);
    planarize_chroma(&scratch[..], u_plane, v_plane)
}
