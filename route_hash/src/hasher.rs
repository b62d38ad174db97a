//! Incremental MurmurHash3_x86_32
//! 增量 MurmurHash3_x86_32
//!
//! Produces the same value as [`murmur3_32`](crate::murmur3_32) however the
//! input is chunked: partial blocks are buffered until 4 bytes are available.
//! 无论输入如何分块，结果都与 [`murmur3_32`](crate::murmur3_32) 相同：
//! 不足 4 字节的部分块会先缓存。

use std::hash::{BuildHasher, Hasher};

use crate::{
  Key,
  murmur3::{finish, mix_h1, mix_tail},
};

/// Streaming hasher state / 流式哈希状态
#[derive(Debug, Clone, Copy)]
pub struct Murmur3 {
  h1: u32,
  len: usize,
  buf: [u8; 4],
  buf_len: usize,
}

impl Default for Murmur3 {
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl Murmur3 {
  pub const fn with_seed(seed: i32) -> Self {
    Self {
      h1: seed as u32,
      len: 0,
      buf: [0; 4],
      buf_len: 0,
    }
  }

  /// Total bytes written / 已写入的总字节数
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn write(&mut self, mut data: &[u8]) {
    self.len += data.len();

    if self.buf_len > 0 {
      let n = (4 - self.buf_len).min(data.len());
      self.buf[self.buf_len..self.buf_len + n].copy_from_slice(&data[..n]);
      self.buf_len += n;
      data = &data[n..];
      if self.buf_len < 4 {
        return;
      }
      self.h1 = mix_h1(self.h1, u32::from_le_bytes(self.buf));
      self.buf_len = 0;
    }

    let mut blocks = data.chunks_exact(4);
    for b in &mut blocks {
      self.h1 = mix_h1(self.h1, u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
    }
    let rem = blocks.remainder();
    self.buf[..rem.len()].copy_from_slice(rem);
    self.buf_len = rem.len();
  }

  /// Write a routing key in its 16-bit little-endian encoding
  /// 以 16 位小端编码写入路由键
  pub fn write_key<K: Key + ?Sized>(&mut self, key: &K) {
    for c in key.units() {
      self.write(&c.to_le_bytes());
    }
  }

  /// Signed hash of everything written so far, state is kept
  /// 已写入内容的有符号哈希，状态保留
  #[inline]
  pub fn finish_i32(&self) -> i32 {
    finish(mix_tail(self.h1, &self.buf[..self.buf_len]), self.len)
  }
}

impl Hasher for Murmur3 {
  /// 32-bit hash zero-extended / 32 位哈希零扩展
  #[inline]
  fn finish(&self) -> u64 {
    self.finish_i32() as u32 as u64
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    Murmur3::write(self, bytes)
  }
}

/// [`BuildHasher`] for [`Murmur3`] with a fixed seed
/// 固定种子的 [`Murmur3`] 构建器
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildMurmur3(pub i32);

impl BuildHasher for BuildMurmur3 {
  type Hasher = Murmur3;

  #[inline]
  fn build_hasher(&self) -> Murmur3 {
    Murmur3::with_seed(self.0)
  }
}
