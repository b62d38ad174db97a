use crate::murmur3::murmur3_32;

/// Routing key as a sequence of UTF-16 code units
/// 以 UTF-16 码元序列表示的路由键
pub trait Key {
  fn units(&self) -> impl Iterator<Item = u16> + '_;
}

impl Key for str {
  #[inline(always)]
  fn units(&self) -> impl Iterator<Item = u16> + '_ {
    self.encode_utf16()
  }
}

impl Key for [u16] {
  #[inline(always)]
  fn units(&self) -> impl Iterator<Item = u16> + '_ {
    self.iter().copied()
  }
}

macro_rules! impl_key {
  ($($ty:ty => $as:ident);* $(;)?) => {
    $(
      impl Key for $ty {
        #[inline(always)]
        fn units(&self) -> impl Iterator<Item = u16> + '_ {
          self.$as().units()
        }
      }
    )*
  };
}

impl_key!(
  String => as_str;
  Vec<u16> => as_slice;
);

impl<const N: usize> Key for [u16; N] {
  #[inline(always)]
  fn units(&self) -> impl Iterator<Item = u16> + '_ {
    self.as_slice().units()
  }
}

impl<T: Key + ?Sized> Key for &T {
  #[inline(always)]
  fn units(&self) -> impl Iterator<Item = u16> + '_ {
    (**self).units()
  }
}

/// Encode key as little-endian 16-bit units
/// 将键编码为小端 16 位码元
pub fn encode<K: Key + ?Sized>(key: &K) -> Vec<u8> {
  let units = key.units();
  let mut buf = Vec::with_capacity(units.size_hint().0 * 2);
  for c in units {
    buf.extend_from_slice(&c.to_le_bytes());
  }
  buf
}

/// Hash a routing key with seed 0
/// 以种子 0 哈希路由键
#[inline]
pub fn hash_key<K: Key + ?Sized>(key: &K) -> i32 {
  murmur3_32(&encode(key), 0)
}
