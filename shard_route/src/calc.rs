//! Shard arithmetic
//! 分片计算

use std::cmp::Ordering;

use log::trace;
use route_hash::{Key, hash_key};

use crate::{Error, Result};

/// log2 of the largest derived routing shard count (1024)
/// 派生路由分片数上限 (1024) 的 log2
pub const LOG2_MAX_SHARDS: u32 = 10;

/// First store version that derives routing shards
/// 开始派生路由分片数的存储版本
pub const ROUTING_SHARDS_SINCE: u8 = 7;

/// Floor modulo, result always in `[0, m)`
/// 向下取模，结果始终在 `[0, m)` 内
///
/// `floor_mod(-1, 30) == 29`
#[inline(always)]
pub fn floor_mod(h: i32, m: u32) -> u32 {
  debug_assert!(m > 0, "floor_mod by zero");
  (h as i64).rem_euclid(m as i64) as u32
}

/// Ratio between source and target shard counts
/// 源分片数与目标分片数之间的比例
///
/// Split (`from < to`) and shrink (`from > to`) both need an exact multiple > 1.
/// 拆分 (`from < to`) 与收缩 (`from > to`) 都要求大于 1 的整数倍。
pub fn routing_factor(from: u32, to: u32) -> Result<u32> {
  let (small, large) = match from.cmp(&to) {
    Ordering::Equal => return Ok(1),
    Ordering::Less => (from, to),
    Ordering::Greater => (to, from),
  };
  if small == 0 {
    return Err(Error::InvalidFactor { from, to });
  }
  let factor = large / small;
  if factor <= 1 || factor * small != large {
    return Err(Error::InvalidFactor { from, to });
  }
  Ok(factor)
}

/// Shard index of `key`
/// `key` 的分片编号
///
/// `floor_mod(hash + partition_offset, effective) / factor`
pub fn shard_id<K: Key + ?Sized>(
  key: &K,
  partition_offset: i32,
  factor: u32,
  effective: u32,
) -> Result<u32> {
  if effective == 0 {
    return Err(Error::InvalidArgument("effective_shard_count", effective));
  }
  if factor == 0 {
    return Err(Error::InvalidArgument("routing_factor", factor));
  }
  Ok(reduce(hash_key(key), partition_offset, factor, effective))
}

/// Fold a hash into `[0, effective / factor)`; arguments already validated
/// 将哈希折叠到 `[0, effective / factor)`，参数已校验
#[inline]
pub(crate) fn reduce(hash: i32, partition_offset: i32, factor: u32, effective: u32) -> u32 {
  let h = hash.wrapping_add(partition_offset);
  let reduced = floor_mod(h, effective);
  let shard = reduced / factor;
  trace!(
    "hash {hash} offset {partition_offset} reduced {reduced}/{effective} factor {factor} -> {shard}"
  );
  shard
}

/// Default routing shard count for an index with `num_shards` shards
/// 拥有 `num_shards` 个分片的索引的默认路由分片数
///
/// Since version 7 this is `num_shards * 2^k`, the largest such value not above
/// 1024, with `k >= 1` so the index can be split at least once. Older versions
/// route directly on `num_shards`.
/// 从版本 7 起为 `num_shards * 2^k`，取不超过 1024 的最大值，且 `k >= 1`
/// 以保证至少可拆分一次。旧版本直接使用 `num_shards`。
pub fn routing_num_shards(num_shards: u32, version: u8) -> u32 {
  if version < ROUTING_SHARDS_SINCE {
    return num_shards;
  }
  // ceil(log2(num_shards))
  let log2 = u32::BITS - num_shards.saturating_sub(1).leading_zeros();
  let splits = LOG2_MAX_SHARDS.saturating_sub(log2).max(1);
  num_shards.saturating_mul(1 << splits)
}

/// Offset spreading documents with one routing value over `partition_size` shards
/// 将同一路由值的文档分散到 `partition_size` 个分片上的偏移量
pub fn partition_offset<K: Key + ?Sized>(id: &K, partition_size: u32) -> Result<u32> {
  if partition_size == 0 {
    return Err(Error::InvalidArgument("partition_size", partition_size));
  }
  Ok(floor_mod(hash_key(id), partition_size))
}
