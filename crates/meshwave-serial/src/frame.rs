//! Frame encoding/decoding utilities.
//!
//! Every message on the serial link is wrapped in a checksummed frame:
//!
//! ```text
//! +-----+--------+--------+-----------+------+------------------+----------+
//! | SOF | len_lo | len_hi | direction | kind | payload[0..len]  | checksum |
//! +-----+--------+--------+-----------+------+------------------+----------+
//! ```
//!
//! `len` (little-endian) counts everything after the length field: direction
//! + kind + payload + checksum. `checksum` is the XOR of every byte after
//! SOF up to itself, seeded with 0xFF.

use bytes::{Buf, BytesMut};

use crate::constants::*;
use crate::error::FrameError;
use crate::types::{MessageDirection, MessageKind};

/// One serial API message, outbound or inbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialFrame {
    /// Function identifier.
    pub kind: MessageKind,
    /// Request/response discriminator.
    pub direction: MessageDirection,
    /// Function-specific payload.
    pub payload: Vec<u8>,
}

impl SerialFrame {
    /// Create a frame, validating the payload size.
    pub fn new(
        kind: MessageKind,
        direction: MessageDirection,
        payload: Vec<u8>,
    ) -> Result<Self, FrameError> {
        if payload.len() > MAX_SERIAL_PAYLOAD {
            return Err(FrameError::PayloadTooLarge {
                max: MAX_SERIAL_PAYLOAD,
                actual: payload.len(),
            });
        }
        Ok(SerialFrame {
            kind,
            direction,
            payload,
        })
    }

    /// Encode this frame to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let length = (self.payload.len() + 3) as u16; // direction + kind + checksum
        let mut buf = Vec::with_capacity(self.payload.len() + FRAME_OVERHEAD);
        buf.push(SOF);
        buf.extend_from_slice(&length.to_le_bytes());
        buf.push(self.direction.to_byte());
        buf.push(self.kind.to_byte());
        buf.extend_from_slice(&self.payload);
        buf.push(checksum(&buf[1..]));
        buf
    }

    /// Decode a frame from wire bytes.
    ///
    /// The slice must hold exactly one complete frame.
    pub fn decode(data: &[u8]) -> Result<Self, FrameError> {
        if data.len() < FRAME_OVERHEAD {
            return Err(FrameError::TooShort {
                expected: FRAME_OVERHEAD,
                actual: data.len(),
            });
        }
        if data[0] != SOF {
            return Err(FrameError::BadSof(data[0]));
        }

        let declared = u16::from_le_bytes([data[1], data[2]]) as usize;
        if data.len() != declared + 3 {
            return Err(FrameError::LengthMismatch {
                declared,
                actual: data.len().saturating_sub(3),
            });
        }

        let expected = checksum(&data[1..data.len() - 1]);
        let actual = data[data.len() - 1];
        if expected != actual {
            return Err(FrameError::ChecksumMismatch { expected, actual });
        }

        let direction = MessageDirection::from_byte(data[3])?;
        let kind = MessageKind::from_byte(data[4])?;
        let payload = data[5..data.len() - 1].to_vec();

        Ok(SerialFrame {
            kind,
            direction,
            payload,
        })
    }
}

/// XOR checksum over a byte range, seeded with 0xFF.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0xFF, |acc, &b| acc ^ b)
}

/// A codec for extracting complete frames from a serial byte stream.
///
/// Bytes arrive in arbitrary chunks; the codec accumulates them, discards
/// line noise preceding the start-of-frame marker, and yields one decoded
/// frame at a time.
#[derive(Debug, Default)]
pub struct SerialCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl SerialCodec {
    /// Create a new serial codec.
    pub fn new() -> Self {
        SerialCodec {
            buffer: BytesMut::with_capacity(MAX_SERIAL_PAYLOAD + FRAME_OVERHEAD),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to decode a complete frame from the buffer.
    ///
    /// Returns `Ok(Some(frame))` if a complete frame is available,
    /// `Ok(None)` if more data is needed, or `Err` if the buffered frame is
    /// malformed (the bad frame is consumed so parsing can resynchronize).
    pub fn try_decode(&mut self) -> Result<Option<SerialFrame>, FrameError> {
        // Skip noise until the SOF marker
        while !self.buffer.is_empty() && self.buffer[0] != SOF {
            self.buffer.advance(1);
        }

        if self.buffer.len() < 3 {
            return Ok(None);
        }

        let total = u16::from_le_bytes([self.buffer[1], self.buffer[2]]) as usize + 3;
        if self.buffer.len() < total {
            return Ok(None);
        }

        let frame_bytes = self.buffer.split_to(total);
        match SerialFrame::decode(&frame_bytes) {
            Ok(frame) => Ok(Some(frame)),
            Err(err) => {
                log::warn!("discarding malformed serial frame: {err}");
                Err(err)
            }
        }
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> SerialFrame {
        SerialFrame::new(
            MessageKind::SendDataBridge,
            MessageDirection::Request,
            vec![1, 5, 3, 0x20, 0x01, 0xFF],
        )
        .expect("payload within limit")
    }

    #[test]
    fn test_encode_layout() {
        let frame = sample_frame();
        let encoded = frame.encode();

        assert_eq!(encoded[0], SOF);
        assert_eq!(encoded[1] as usize, frame.payload.len() + 3);
        assert_eq!(encoded[2], 0); // High byte of length
        assert_eq!(encoded[3], DIR_REQUEST);
        assert_eq!(encoded[4], FUNC_SEND_DATA_BRIDGE);
        assert_eq!(&encoded[5..encoded.len() - 1], &frame.payload[..]);
        assert_eq!(
            *encoded.last().unwrap(),
            checksum(&encoded[1..encoded.len() - 1])
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let frame = sample_frame();
        let decoded = SerialFrame::decode(&frame.encode()).expect("should decode");
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_decode_rejects_bad_sof() {
        let mut encoded = sample_frame().encode();
        encoded[0] = 0x7F;
        assert_eq!(SerialFrame::decode(&encoded), Err(FrameError::BadSof(0x7F)));
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let mut encoded = sample_frame().encode();
        let last = encoded.len() - 1;
        encoded[last] ^= 0x01;
        assert!(matches!(
            SerialFrame::decode(&encoded),
            Err(FrameError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_payload_too_large() {
        let result = SerialFrame::new(
            MessageKind::SendData,
            MessageDirection::Request,
            vec![0; MAX_SERIAL_PAYLOAD + 1],
        );
        assert!(matches!(result, Err(FrameError::PayloadTooLarge { .. })));
    }

    #[test]
    fn test_codec_partial_then_complete() {
        let frame = sample_frame();
        let encoded = frame.encode();
        let mut codec = SerialCodec::new();

        codec.push(&encoded[..4]);
        assert_eq!(codec.try_decode().expect("no error yet"), None);

        codec.push(&encoded[4..]);
        let decoded = codec.try_decode().expect("decode").expect("complete frame");
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_codec_skips_leading_noise() {
        let frame = sample_frame();
        let mut codec = SerialCodec::new();

        codec.push(&[0x00, 0x55]);
        codec.push(&frame.encode());
        let decoded = codec.try_decode().expect("decode").expect("complete frame");
        assert_eq!(decoded, frame);
        assert_eq!(codec.buffered_len(), 0);
    }

    #[test]
    fn test_codec_multiple_frames() {
        let frame = sample_frame();
        let mut codec = SerialCodec::new();

        codec.push(&frame.encode());
        codec.push(&frame.encode());

        assert!(codec.try_decode().expect("decode").is_some());
        assert!(codec.try_decode().expect("decode").is_some());
        assert!(codec.try_decode().expect("decode").is_none());
    }
}
