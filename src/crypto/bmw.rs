//! Blue Midnight Wish 512
//!
//! The one Quark stage without a RustCrypto crate. Words are little-endian,
//! blocks are 128 bytes and the message length is appended as a 64-bit bit
//! count. After the last block the chaining value is compressed once more
//! under a fixed key and the upper eight words are the digest.

const BLOCK_SIZE: usize = 128;

const IV: [u64; 16] = [
    0x8081828384858687, 0x88898a8b8c8d8e8f, 0x9091929394959697, 0x98999a9b9c9d9e9f,
    0xa0a1a2a3a4a5a6a7, 0xa8a9aaabacadaeaf, 0xb0b1b2b3b4b5b6b7, 0xb8b9babbbcbdbebf,
    0xc0c1c2c3c4c5c6c7, 0xc8c9cacbcccdcecf, 0xd0d1d2d3d4d5d6d7, 0xd8d9dadbdcdddedf,
    0xe0e1e2e3e4e5e6e7, 0xe8e9eaebecedeeef, 0xf0f1f2f3f4f5f6f7, 0xf8f9fafbfcfdfeff,
];

const FINAL_KEY: [u64; 16] = [
    0xaaaaaaaaaaaaaaa0, 0xaaaaaaaaaaaaaaa1, 0xaaaaaaaaaaaaaaa2, 0xaaaaaaaaaaaaaaa3,
    0xaaaaaaaaaaaaaaa4, 0xaaaaaaaaaaaaaaa5, 0xaaaaaaaaaaaaaaa6, 0xaaaaaaaaaaaaaaa7,
    0xaaaaaaaaaaaaaaa8, 0xaaaaaaaaaaaaaaa9, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaab,
    0xaaaaaaaaaaaaaaac, 0xaaaaaaaaaaaaaaad, 0xaaaaaaaaaaaaaaae, 0xaaaaaaaaaaaaaaaf,
];

/// Signed selections of `M ^ H` summed into each `W[i]`
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, true), (7, false), (10, true), (13, true), (14, true)],
    [(6, true), (8, false), (11, true), (14, true), (15, false)],
    [(0, true), (7, true), (9, true), (12, false), (15, true)],
    [(0, true), (1, false), (8, true), (10, false), (13, true)],
    [(1, true), (2, true), (9, true), (11, false), (14, false)],
    [(3, true), (2, false), (10, true), (12, false), (15, true)],
    [(4, true), (0, false), (3, false), (11, false), (13, true)],
    [(1, true), (4, false), (5, false), (12, false), (14, false)],
    [(2, true), (5, false), (6, false), (13, true), (15, false)],
    [(0, true), (3, false), (6, true), (7, false), (14, true)],
    [(8, true), (1, false), (4, false), (7, false), (15, true)],
    [(8, true), (0, false), (2, false), (5, false), (9, true)],
    [(1, true), (3, true), (6, false), (9, false), (10, true)],
    [(2, true), (4, true), (7, true), (10, true), (11, true)],
    [(3, true), (5, false), (8, true), (11, false), (12, false)],
    [(12, true), (4, false), (6, false), (9, false), (13, true)],
];

/// Rotations applied to the odd terms of the second expansion
const EXPAND2_ROTATIONS: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let a = (j - 16) % 16;
    let b = (j - 13) % 16;
    let c = (j - 6) % 16;
    let k = (j as u64).wrapping_mul(0x0555555555555555);

    m[a].rotate_left(a as u32 + 1)
        .wrapping_add(m[b].rotate_left(b as u32 + 1))
        .wrapping_sub(m[c].rotate_left(c as u32 + 1))
        .wrapping_add(k)
        ^ h[(j - 9) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut q = [0u64; 32];

    for (i, terms) in W_TERMS.iter().enumerate() {
        let w = terms.iter().fold(0u64, |acc, &(j, add)| {
            let x = m[j] ^ h[j];
            if add { acc.wrapping_add(x) } else { acc.wrapping_sub(x) }
        });
        let s = match i % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[i] = s.wrapping_add(h[(i + 1) % 16]);
    }

    for j in 16..18 {
        let mut acc = add_element(m, h, j);
        for t in 0..16 {
            let x = q[j - 16 + t];
            let s = match t % 4 {
                0 => s1(x),
                1 => s2(x),
                2 => s3(x),
                _ => s0(x),
            };
            acc = acc.wrapping_add(s);
        }
        q[j] = acc;
    }

    for j in 18..32 {
        let mut acc = add_element(m, h, j);
        for t in 0..14 {
            let x = q[j - 16 + t];
            let term = if t % 2 == 0 { x } else { x.rotate_left(EXPAND2_ROTATIONS[t / 2]) };
            acc = acc.wrapping_add(term);
        }
        q[j] = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
    }

    let xl = q[16..24].iter().fold(0, |acc, x| acc ^ x);
    let xh = q[24..32].iter().fold(xl, |acc, x| acc ^ x);

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

    // Upper half: (source word, rotation, xl shift, q feed)
    let upper: [(usize, u32, i32, usize); 8] = [
        (4, 9, 8, 23),
        (5, 10, -6, 16),
        (6, 11, 6, 17),
        (7, 12, 4, 18),
        (0, 13, -3, 19),
        (1, 14, -4, 20),
        (2, 15, -7, 21),
        (3, 16, -2, 22),
    ];
    for (k, &(src, rot, shift, feed)) in upper.iter().enumerate() {
        let i = k + 8;
        let xl_shifted = if shift > 0 { xl << shift } else { xl >> -shift };
        out[i] = out[src]
            .rotate_left(rot)
            .wrapping_add(xh ^ q[24 + k] ^ m[i])
            .wrapping_add(xl_shifted ^ q[feed] ^ q[i]);
    }

    out
}

fn load_block(block: &[u8]) -> [u64; 16] {
    let mut words = [0u64; 16];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_le_bytes(bytes);
    }
    words
}

/// BMW-512 digest of `data`
pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut padded = data.to_vec();
    padded.push(0x80);
    while padded.len() % BLOCK_SIZE != BLOCK_SIZE - 8 {
        padded.push(0);
    }
    let bit_len = (data.len() as u64).wrapping_mul(8);
    padded.extend_from_slice(&bit_len.to_le_bytes());

    let mut h = IV;
    for block in padded.chunks_exact(BLOCK_SIZE) {
        h = compress(&h, &load_block(block));
    }
    let h = compress(&FINAL_KEY, &h);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(&h[8..]) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmw512_empty() {
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
    }

    #[test]
    fn test_bmw512_abc() {
        assert_eq!(
            hex::encode(bmw512(b"abc")),
            "8f37bef264289f61f3d713944d394a7ac1dd95d3fe5787b5d325a310bc9cd18783852bfee12fbdeaab3ad9a67f2b654e348714aed3acf7d7548e95591af68046"
        );
    }

    #[test]
    fn test_bmw512_multi_block() {
        let data: Vec<u8> = (0..200u8).collect();
        assert_eq!(
            hex::encode(bmw512(&data)),
            "7e20227e3ba9b5545954122c38981ba2005d869fa6fc24f8ae200c54c0873c753755469a5477868c0e63ddd8319128947d3e8c31ad06dfa2381c7bc98442fca0"
        );
    }
}
