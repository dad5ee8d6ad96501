//! MurmurHash3 (x86, 128-bit variant) string digests.
//!
//! Four interleaved 32-bit lanes over 16-byte blocks, bit-exact with the
//! reference implementation. The hash table keys on the low 64 bits of
//! the 128-bit result.

const C1: u32 = 0x239b_961b;
const C2: u32 = 0xab0e_9789;
const C3: u32 = 0x38b3_4ae5;
const C4: u32 = 0xa1e3_8b93;

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[inline]
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Hash `data` into a 128-bit digest.
///
/// The result packs the reference implementation's output words with `h1`
/// in the low 32 bits, matching its little-endian byte stream.
pub fn hash128(data: &[u8], seed: u32) -> u128 {
    let mut h1 = seed;
    let mut h2 = seed;
    let mut h3 = seed;
    let mut h4 = seed;

    let block_count = data.len() / 16;
    for i in 0..block_count {
        let base = i * 16;
        let mut k1 = read_u32(data, base);
        let mut k2 = read_u32(data, base + 4);
        let mut k3 = read_u32(data, base + 8);
        let mut k4 = read_u32(data, base + 12);

        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(19).wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x561c_cd1b);

        k2 = k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3);
        h2 ^= k2;
        h2 = h2.rotate_left(17).wrapping_add(h3);
        h2 = h2.wrapping_mul(5).wrapping_add(0x0bca_a747);

        k3 = k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4);
        h3 ^= k3;
        h3 = h3.rotate_left(15).wrapping_add(h4);
        h3 = h3.wrapping_mul(5).wrapping_add(0x96cd_1c35);

        k4 = k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1);
        h4 ^= k4;
        h4 = h4.rotate_left(13).wrapping_add(h1);
        h4 = h4.wrapping_mul(5).wrapping_add(0x32ac_3b17);
    }

    // Tail: the reference's fall-through switch, written as threshold tests.
    let tail = &data[block_count * 16..];
    let mut k1 = 0u32;
    let mut k2 = 0u32;
    let mut k3 = 0u32;
    let mut k4 = 0u32;

    if tail.len() >= 15 {
        k4 ^= (tail[14] as u32) << 16;
    }
    if tail.len() >= 14 {
        k4 ^= (tail[13] as u32) << 8;
    }
    if tail.len() >= 13 {
        k4 ^= tail[12] as u32;
        k4 = k4.wrapping_mul(C4).rotate_left(18).wrapping_mul(C1);
        h4 ^= k4;
    }
    if tail.len() >= 12 {
        k3 ^= (tail[11] as u32) << 24;
    }
    if tail.len() >= 11 {
        k3 ^= (tail[10] as u32) << 16;
    }
    if tail.len() >= 10 {
        k3 ^= (tail[9] as u32) << 8;
    }
    if tail.len() >= 9 {
        k3 ^= tail[8] as u32;
        k3 = k3.wrapping_mul(C3).rotate_left(17).wrapping_mul(C4);
        h3 ^= k3;
    }
    if tail.len() >= 8 {
        k2 ^= (tail[7] as u32) << 24;
    }
    if tail.len() >= 7 {
        k2 ^= (tail[6] as u32) << 16;
    }
    if tail.len() >= 6 {
        k2 ^= (tail[5] as u32) << 8;
    }
    if tail.len() >= 5 {
        k2 ^= tail[4] as u32;
        k2 = k2.wrapping_mul(C2).rotate_left(16).wrapping_mul(C3);
        h2 ^= k2;
    }
    if tail.len() >= 4 {
        k1 ^= (tail[3] as u32) << 24;
    }
    if tail.len() >= 3 {
        k1 ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        k1 ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        k1 ^= tail[0] as u32;
        k1 = k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h1 ^= k1;
    }

    let len = data.len() as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    (h4 as u128) << 96 | (h3 as u128) << 64 | (h2 as u128) << 32 | h1 as u128
}

/// Low 64 bits of [`hash128`]: the digest used by the hash table.
pub fn hash64(data: &[u8], seed: u32) -> u64 {
    hash128(data, seed) as u64
}

/// Digest a wide-character string.
///
/// Each code point contributes its little-endian 32-bit encoding, so the
/// digest depends only on the code points, not on how the source happened
/// to be encoded.
pub fn hash64_wide(chars: &[char], seed: u32) -> u64 {
    let mut bytes = Vec::with_capacity(chars.len() * 4);
    for &c in chars {
        bytes.extend_from_slice(&(c as u32).to_le_bytes());
    }
    hash64(&bytes, seed)
}
