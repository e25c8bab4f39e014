//! Packed 12-bit sample codec.
//!
//! Every 3 payload bytes hold two 12-bit samples:
//!
//! ```text
//! byte0 = s0[7:0]
//! byte1 = s1[3:0] << 4 | s0[11:8]
//! byte2 = s1[11:4]
//! ```

use tracing::debug;

use crate::image_pipeline::common::config::TruncationPolicy;
use crate::image_pipeline::common::error::{ConversionError, Result};

/// Bytes per pair of packed samples.
pub const GROUP_LEN: usize = 3;

/// Largest value a 12-bit sample can hold.
pub const MAX_SAMPLE: u16 = 0x0FFF;

/// Unpacks every complete 3-byte group of `packed` into two samples.
///
/// Trailing bytes that do not complete a group are dropped. The output
/// length is always `2 * (packed.len() / 3)`.
pub fn unpack12(packed: &[u8]) -> Vec<u16> {
    let mut samples = Vec::with_capacity(packed.len() / GROUP_LEN * 2);
    for group in packed.chunks_exact(GROUP_LEN) {
        let (b0, b1, b2) = (group[0] as u16, group[1] as u16, group[2] as u16);
        samples.push(b0 | ((b1 & 0x0F) << 8));
        samples.push((b1 >> 4) | (b2 << 4));
    }
    samples
}

/// Unpacks `packed`, applying `policy` to an incomplete trailing group.
pub fn unpack12_with_policy(packed: &[u8], policy: TruncationPolicy) -> Result<Vec<u16>> {
    let trailing = packed.len() % GROUP_LEN;
    if trailing != 0 {
        match policy {
            TruncationPolicy::Strict => {
                return Err(ConversionError::TrailingBytes { count: trailing });
            }
            TruncationPolicy::Lenient => {
                debug!(trailing, payload_len = packed.len(), "Dropping incomplete trailing group");
            }
        }
    }
    Ok(unpack12(packed))
}

/// Packs samples into the layout read by [`unpack12`].
///
/// Only the low 12 bits of each sample are kept. An odd final sample is
/// paired with zero.
pub fn pack12(samples: &[u16]) -> Vec<u8> {
    let mut packed = Vec::with_capacity(samples.len().div_ceil(2) * GROUP_LEN);
    for pair in samples.chunks(2) {
        let s0 = pair[0] & MAX_SAMPLE;
        let s1 = pair.get(1).copied().unwrap_or(0) & MAX_SAMPLE;
        packed.push((s0 & 0xFF) as u8);
        packed.push(((s0 >> 8) | ((s1 & 0x0F) << 4)) as u8);
        packed.push((s1 >> 4) as u8);
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_group() {
        assert_eq!(unpack12(&[0x12, 0x34, 0x56]), vec![0x412, 0x563]);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(unpack12(&[0x00, 0x00, 0x00]), vec![0, 0]);
        assert_eq!(unpack12(&[0xFF, 0xFF, 0xFF]), vec![0xFFF, 0xFFF]);
        assert_eq!(unpack12(&[0xFF, 0x0F, 0x00]), vec![0xFFF, 0]);
        assert_eq!(unpack12(&[0x00, 0xF0, 0xFF]), vec![0, 0xFFF]);
    }

    #[test]
    fn test_output_length() {
        for len in 0..64usize {
            let payload = vec![0x5Au8; len];
            assert_eq!(unpack12(&payload).len(), 2 * (len / 3), "payload length {}", len);
        }
    }

    #[test]
    fn test_every_group_round_trips() {
        // All (b0, b1) combinations against a spread of b2 values
        for b0 in 0..=255u8 {
            for b1 in 0..=255u8 {
                for b2 in [0x00u8, 0x01, 0x7F, 0x80, 0xA5, 0xFE, 0xFF] {
                    let group = [b0, b1, b2];
                    let samples = unpack12(&group);
                    assert_eq!(pack12(&samples), group);
                }
            }
        }
    }

    #[test]
    fn test_samples_stay_in_range() {
        let mut state = 0x2545_F491u32;
        let payload: Vec<u8> = (0..3000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect();

        assert!(unpack12(&payload).iter().all(|&s| s <= MAX_SAMPLE));
    }

    #[test]
    fn test_trailing_bytes_dropped() {
        let full = [0x12, 0x34, 0x56, 0xAA, 0xBB, 0xCC];
        let expected = unpack12(&full);
        for extra in 1..=2 {
            let mut payload = full.to_vec();
            payload.extend(std::iter::repeat(0xEE).take(extra));
            assert_eq!(unpack12(&payload), expected);
            assert_eq!(
                unpack12_with_policy(&payload, TruncationPolicy::Lenient).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_strict_policy_rejects_trailing_bytes() {
        let payload = [0x12, 0x34, 0x56, 0x78, 0x9A];
        match unpack12_with_policy(&payload, TruncationPolicy::Strict) {
            Err(ConversionError::TrailingBytes { count }) => assert_eq!(count, 2),
            other => panic!("expected TrailingBytes, got {:?}", other),
        }

        let complete = [0x12, 0x34, 0x56];
        assert_eq!(
            unpack12_with_policy(&complete, TruncationPolicy::Strict).unwrap(),
            vec![0x412, 0x563]
        );
    }

    #[test]
    fn test_pack_odd_sample_count() {
        let packed = pack12(&[0xABC, 0x123, 0xFFF]);
        assert_eq!(packed.len(), 6);
        assert_eq!(unpack12(&packed), vec![0xABC, 0x123, 0xFFF, 0]);
    }

    #[test]
    fn test_pack_masks_high_bits() {
        assert_eq!(pack12(&[0xF412, 0x1563]), vec![0x12, 0x34, 0x56]);
    }
}
