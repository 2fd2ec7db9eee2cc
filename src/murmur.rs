//! MurmurHash3 (x86_32 variant) over a key's masked character codes.
//!
//! The hash treats a key as a byte stream: each `char` is masked to its low
//! 8 bits, packed into little-endian 32-bit words, and mixed with the standard
//! MurmurHash3 body/tail/finalization rounds. All arithmetic wraps at 32 bits;
//! the output is a bit-exact contract relied upon for bucket placement, so the
//! constants and mixing order must not be altered.

/// First multiplicative mixing constant of the MurmurHash3 body.
const C1: u32 = 0xcc9e_2d51;
/// Second multiplicative mixing constant of the MurmurHash3 body.
const C2: u32 = 0x1b87_3593;

/// Hashes a key to an unsigned 32-bit value.
///
/// Deterministic and pure: the result depends only on the key's character
/// sequence. Characters outside the 8-bit range contribute only their low
/// byte, and the finalization folds in the length counted in `char`s.
///
/// ```
/// use bucketmap::murmur3_32;
///
/// assert_eq!(murmur3_32(""), 0);
/// assert_eq!(murmur3_32("hello"), 0x248b_fa47);
/// assert_eq!(murmur3_32("hello"), murmur3_32("hello"));
/// ```
#[must_use]
pub fn murmur3_32(key: &str) -> u32 {
    let mut h1: u32 = 0;
    let mut k1: u32 = 0;
    let mut pending: u32 = 0;
    let mut len: u32 = 0;

    for c in key.chars() {
        let byte = (c as u32) & 0xff;
        k1 |= byte << (pending * 8);
        pending = pending.wrapping_add(1);
        len = len.wrapping_add(1);

        if pending == 4 {
            h1 ^= scramble(k1);
            h1 = h1.rotate_left(13);
            h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
            k1 = 0;
            pending = 0;
        }
    }

    // Tail bytes get the same scramble but skip the rotate/multiply-add mix.
    if pending > 0 {
        h1 ^= scramble(k1);
    }

    h1 ^= len;
    fmix(h1)
}

/// Per-word mixing round applied to every 4-byte group and the tail.
fn scramble(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Finalization avalanche: three xor-shift / wrapping-multiply rounds.
fn fmix(mut h1: u32) -> u32 {
    h1 ^= h1 >> 16;
    h1 = h1.wrapping_mul(0x85eb_ca6b);
    h1 ^= h1 >> 13;
    h1 = h1.wrapping_mul(0xc2b2_ae35);
    h1 ^= h1 >> 16;
    h1
}
