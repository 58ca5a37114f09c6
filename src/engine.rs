use tracing::trace;

use crate::consts::{BLOCK_LEN, DIGEST_LEN, H_INIT, K_CONST, LENGTH_OFFSET};
use crate::error::Error;

/// Bytes left over after [`Sha256::absorb`], always shorter than one block.
///
/// Only `absorb` builds one, so padding never sees a full block.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tail<'a>(&'a [u8]);

#[cfg(test)]
impl Tail<'_> {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Running hash state of a single digest computation.
///
/// Created fresh by [`Sha256::new`], fed whole blocks through
/// [`Sha256::absorb`] and consumed by [`Sha256::finalize`].
pub(crate) struct Sha256 {
    h: [u32; 8],
}

impl Sha256 {
    pub(crate) fn new() -> Sha256 {
        Self { h: H_INIT }
    }

    /// Compresses every full block of `data` and returns the unprocessed
    /// tail.
    pub(crate) fn absorb<'a>(&mut self, data: &'a [u8]) -> Tail<'a> {
        let mut rest = data;
        let mut blocks = 0usize;

        while let Some((block, next)) = rest.split_first_chunk::<BLOCK_LEN>() {
            compress(&mut self.h, block);
            rest = next;
            blocks += 1;
        }

        trace!(blocks, remainder = rest.len(), "absorbed full blocks");
        Tail(rest)
    }

    /// Pads the tail, compresses the last one or two blocks and serializes
    /// the state big-endian.
    pub(crate) fn finalize(mut self, remainder: Tail<'_>, bit_len: u64) -> [u8; DIGEST_LEN] {
        let (last, extra) = pad(remainder, bit_len);
        compress(&mut self.h, &last);
        if let Some(extra) = extra {
            compress(&mut self.h, &extra);
        }
        let final_blocks = 1 + usize::from(extra.is_some());
        trace!(final_blocks, bit_len, "finalized");

        let mut output = [0u8; DIGEST_LEN];
        for (out, v) in output.chunks_exact_mut(4).zip(self.h.iter()) {
            out.copy_from_slice(&v.to_be_bytes());
        }
        output
    }

    // region internal sha256 functions

    fn ch(x: u32, y: u32, z: u32) -> u32 {
        (x & y) ^ (!x & z)
    }

    fn maj(x: u32, y: u32, z: u32) -> u32 {
        (x & y) ^ (x & z) ^ (y & z)
    }

    fn rotr(x: u32, bits: u32) -> u32 {
        x.rotate_right(bits)
    }

    fn bsig0(x: u32) -> u32 {
        Sha256::rotr(x, 2) ^ Sha256::rotr(x, 13) ^ Sha256::rotr(x, 22)
    }

    fn bsig1(x: u32) -> u32 {
        Sha256::rotr(x, 6) ^ Sha256::rotr(x, 11) ^ Sha256::rotr(x, 25)
    }

    fn ssig0(x: u32) -> u32 {
        Sha256::rotr(x, 7) ^ Sha256::rotr(x, 18) ^ (x >> 3)
    }

    fn ssig1(x: u32) -> u32 {
        Sha256::rotr(x, 17) ^ Sha256::rotr(x, 19) ^ (x >> 10)
    }

    // endregion
}

/// Applies the 64-round compression function of one block to `state`.
pub fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 64];
    for (t, chunk) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..64 {
        w[t] = Sha256::ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(Sha256::ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..64 {
        let t1 = h
            .wrapping_add(Sha256::bsig1(e))
            .wrapping_add(Sha256::ch(e, f, g))
            .wrapping_add(K_CONST[t])
            .wrapping_add(w[t]);
        let t2 = Sha256::bsig0(a).wrapping_add(Sha256::maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

/// Builds the final block for a 0 to 63 byte tail, plus a second block when
/// the `0x80` marker leaves no room for the length field.
fn pad(remainder: Tail<'_>, bit_len: u64) -> ([u8; BLOCK_LEN], Option<[u8; BLOCK_LEN]>) {
    let remainder = remainder.0;

    let mut block = [0u8; BLOCK_LEN];
    block[..remainder.len()].copy_from_slice(remainder);
    block[remainder.len()] = 0x80;

    let mut tail = [0u8; BLOCK_LEN];
    tail[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());

    if remainder.len() < LENGTH_OFFSET {
        block[LENGTH_OFFSET..].copy_from_slice(&tail[LENGTH_OFFSET..]);
        (block, None)
    } else {
        (block, Some(tail))
    }
}

/// Length of `len` bytes in bits, if it fits the 64-bit length field.
pub(crate) fn bit_length(len: usize) -> Result<u64, Error> {
    u64::try_from(len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(Error::MessageTooLong { len })
}
