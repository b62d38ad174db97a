//! MurmurHash3_x86_32 core
//! MurmurHash3_x86_32 核心

/// Block multiplier 1 / 块乘数 1
pub const C1: u32 = 0xcc9e_2d51;
/// Block multiplier 2 / 块乘数 2
pub const C2: u32 = 0x1b87_3593;

const N: u32 = 0xe654_6b64;

#[inline(always)]
pub(crate) const fn mix_k1(k1: u32) -> u32 {
  k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Mix one full 4-byte block into h1
/// 将一个完整 4 字节块混入 h1
#[inline(always)]
pub(crate) const fn mix_h1(h1: u32, k1: u32) -> u32 {
  (h1 ^ mix_k1(k1))
    .rotate_left(13)
    .wrapping_mul(5)
    .wrapping_add(N)
}

/// Mix 0..=3 trailing bytes; h1 itself is not rotated
/// 混入 0..=3 个尾部字节，h1 本身不做旋转
#[inline(always)]
pub(crate) fn mix_tail(h1: u32, tail: &[u8]) -> u32 {
  debug_assert!(tail.len() < 4);
  if tail.is_empty() {
    return h1;
  }
  let mut k1 = 0u32;
  for (i, &b) in tail.iter().enumerate() {
    k1 |= (b as u32) << (i * 8);
  }
  h1 ^ mix_k1(k1)
}

/// Final avalanche / 最终雪崩
#[inline(always)]
pub const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

// Length is folded in as a 32-bit value, matching the reference int length.
#[inline(always)]
pub(crate) const fn finish(h1: u32, len: usize) -> i32 {
  fmix32(h1 ^ len as u32) as i32
}

/// Hash a whole slice / 哈希整个切片
#[inline]
pub fn murmur3_32(data: &[u8], seed: i32) -> i32 {
  let mut h1 = seed as u32;
  let mut blocks = data.chunks_exact(4);
  for b in &mut blocks {
    h1 = mix_h1(h1, u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
  }
  finish(mix_tail(h1, blocks.remainder()), data.len())
}

/// Hash `len` bytes of `data` starting at `offset`
/// 哈希 `data` 中从 `offset` 开始的 `len` 个字节
///
/// Panics if the range is out of bounds.
/// 范围越界时 panic。
#[inline]
pub fn hash_bytes(data: &[u8], offset: usize, len: usize, seed: i32) -> i32 {
  murmur3_32(&data[offset..][..len], seed)
}
