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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug)]
pub enum YuvError {
    /// Width or height is zero or odd, 4:2:0 frames need even positive dimensions
    InvalidGeometry { width: usize, height: usize },
    PointerOverflow,
    ZeroBaseSize,
    /// Z/flip-Z traversal works on tile column pairs
    OddTileColumns(usize),
    SourceSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    ImageDimensionsNotMatch,
    /// Sink stopped accepting bytes before the whole frame was written
    ShortWrite(MismatchedSize),
    UnknownLayout(u8),
    Io(std::io::Error),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::InvalidGeometry { width, height } => f.write_fmt(format_args!(
                "Invalid frame geometry {}x{}, width and height must be positive and even",
                width, height
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::OddTileColumns(w_tiles) => f.write_fmt(format_args!(
                "Tile columns count must be even, but it was {}",
                w_tiles
            )),
            YuvError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::ImageDimensionsNotMatch => {
                f.write_str("Source and destination images dimensions must match")
            }
            YuvError::ShortWrite(size) => f.write_fmt(format_args!(
                "Short write: expected to write {} bytes, but sink accepted {}",
                size.expected, size.received
            )),
            YuvError::UnknownLayout(value) => {
                f.write_fmt(format_args!("Unknown output layout {}", value))
            }
            YuvError::Io(err) => f.write_fmt(format_args!("I/O error: {}", err)),
        }
    }
}

impl Error for YuvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            YuvError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for YuvError {
    fn from(value: std::io::Error) -> Self {
        YuvError::Io(value)
    }
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, YuvError> {
    let product0 = check_overflow_v2(v0, v1)?;
    check_overflow_v2(product0, v2)
}

#[inline]
pub(crate) fn check_source_size<V>(src: &[V], expected: usize) -> Result<(), YuvError> {
    if src.len() < expected {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: src.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_destination_size<V>(dst: &[V], expected: usize) -> Result<(), YuvError> {
    if dst.len() < expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: dst.len(),
        }));
    }
    Ok(())
}

/// Checks a strided 8-bit plane holds `rows` rows of `width` elements
#[inline]
pub(crate) fn check_plane_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    rows: u32,
) -> Result<(), YuvError> {
    if width == 0 || rows == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if stride < width {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    // The last row does not need to be padded out to the full stride
    let required = check_overflow_v2(stride as usize, rows as usize - 1)? + width as usize;
    if data.len() < required {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            check_overflow_v3(usize::MAX, 2, 1),
            Err(YuvError::PointerOverflow)
        ));
        assert_eq!(check_overflow_v3(64, 32, 2).unwrap(), 4096);
    }

    #[test]
    fn plane_channel_accepts_unpadded_last_row() {
        let data = vec![0u8; 16 * 3 + 10];
        assert!(check_plane_channel(&data, 16, 10, 4).is_ok());
        assert!(check_plane_channel(&data, 16, 11, 4).is_err());
        assert!(matches!(
            check_plane_channel(&data, 8, 10, 1),
            Err(YuvError::DestinationSizeMismatch(_))
        ));
        assert!(matches!(
            check_plane_channel(&data, 16, 0, 1),
            Err(YuvError::ZeroBaseSize)
        ));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: YuvError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("boom"));
    }
}
