//! Quark header hashing
//!
//! Block headers are hashed with Quark: nine chained 512-bit digests over
//! BLAKE, BMW, Grøstl, JH, Keccak and Skein, three of them picking their
//! function from bit 3 of the previous digest. The header hash is the low
//! 32 bytes of the last digest. Transaction ids and checksums stay SHA-256d.

use super::bmw::bmw512;
use super::Hash;
use digest::consts::U64;
use digest::Digest;
use groestl::Groestl512;
use jh::Jh512;
use sha3::Keccak512;
use skein::Skein512;

type Digest512 = [u8; 64];

fn blake512(data: &[u8]) -> Digest512 {
    use blake_hash::Digest as _;
    let mut out = [0u8; 64];
    out.copy_from_slice(&blake_hash::Blake512::digest(data));
    out
}

fn digest512<D: Digest>(data: &[u8]) -> Digest512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

fn groestl512(data: &[u8]) -> Digest512 {
    digest512::<Groestl512>(data)
}

fn jh512(data: &[u8]) -> Digest512 {
    digest512::<Jh512>(data)
}

fn keccak512(data: &[u8]) -> Digest512 {
    digest512::<Keccak512>(data)
}

fn skein512(data: &[u8]) -> Digest512 {
    digest512::<Skein512<U64>>(data)
}

/// Bit 3 of the lowest byte picks the branch
fn branch(digest: &Digest512) -> bool {
    digest[0] & 8 != 0
}

/// Quark digest of arbitrary data
pub fn quark_hash(data: &[u8]) -> Hash {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = if branch(&h) { groestl512(&h) } else { skein512(&h) };
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = if branch(&h) { blake512(&h) } else { bmw512(&h) };
    let h = keccak512(&h);
    let h = skein512(&h);
    let h = if branch(&h) { keccak512(&h) } else { jh512(&h) };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    Hash(out)
}
