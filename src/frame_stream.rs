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
use crate::frame_converter::FrameConverter;
use crate::tile_geometry::TileGridDescriptor;
use crate::yuv_error::{check_destination_size, MismatchedSize};
use crate::YuvError;
use log::{debug, trace, warn};
use std::io::{ErrorKind, Read, Write};

/// Reads whole tiled frames from a byte stream.
#[derive(Debug)]
pub struct TiledFrameReader<R: Read> {
    reader: R,
    frame_bytes: usize,
}

impl<R: Read> TiledFrameReader<R> {
    pub fn new(reader: R, grid: &TileGridDescriptor) -> Self {
        TiledFrameReader {
            reader,
            frame_bytes: grid.tiled_frame_bytes(),
        }
    }

    #[inline]
    pub fn frame_bytes(&self) -> usize {
        self.frame_bytes
    }

    /// Fills `buf` with the next tiled frame.
    ///
    /// Returns `Ok(false)` once the stream ends. A trailing partial frame also ends the
    /// stream and is never converted.
    pub fn read_frame(&mut self, buf: &mut [u8]) -> Result<bool, YuvError> {
        check_destination_size(buf, self.frame_bytes)?;
        let target = &mut buf[..self.frame_bytes];
        let mut filled = 0usize;
        while filled < target.len() {
            match self.reader.read(&mut target[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(YuvError::Io(e)),
            }
        }
        if filled == target.len() {
            return Ok(true);
        }
        if filled > 0 {
            warn!(
                "Discarding trailing partial frame: {} of {} bytes",
                filled, self.frame_bytes
            );
        }
        Ok(false)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Writes whole linear frames to a byte sink.
#[derive(Debug)]
pub struct LinearFrameWriter<W: Write> {
    writer: W,
}

impl<W: Write> LinearFrameWriter<W> {
    pub fn new(writer: W) -> Self {
        LinearFrameWriter { writer }
    }

    /// Writes the whole `frame`, a sink that stops accepting bytes is reported as
    /// [YuvError::ShortWrite].
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<(), YuvError> {
        let mut written = 0usize;
        while written < frame.len() {
            match self.writer.write(&frame[written..]) {
                Ok(0) => {
                    return Err(YuvError::ShortWrite(MismatchedSize {
                        expected: frame.len(),
                        received: written,
                    }))
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(YuvError::Io(e)),
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), YuvError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Converts every frame of `reader` into `writer` until the input ends.
///
/// Returns the number of frames written.
pub fn convert_stream<R: Read, W: Write>(
    reader: &mut TiledFrameReader<R>,
    writer: &mut LinearFrameWriter<W>,
    converter: &mut FrameConverter,
) -> Result<usize, YuvError> {
    let mut src = vec![0u8; converter.grid().tiled_frame_bytes()];
    let mut frames = 0usize;

    while reader.read_frame(&mut src)? {
        let frame = converter.convert(&src)?;
        writer.write_frame(frame)?;
        frames += 1;
        trace!("Converted frame {}", frames);
        src.fill(0);
    }

    writer.flush()?;
    debug!("Converted {} frames", frames);
    Ok(frames)
}
