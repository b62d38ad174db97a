use route_hash::{Key, hash_key};

use crate::{
  Conf, Error, ParsedConf, Result,
  calc::{floor_mod, reduce, routing_factor},
};

/// Shard router for one index
/// 单个索引的分片路由器
///
/// Keys are reduced modulo `routing_num_shards` and the result is divided by
/// `routing_num_shards / num_shards`. Every current shard therefore owns a
/// contiguous run of routing shards, which is what keeps split and shrink
/// local: a split shard only receives keys from one parent, a shrunk shard
/// gathers whole parents.
/// 键对 `routing_num_shards` 取模后再除以 `routing_num_shards / num_shards`。
/// 每个当前分片拥有一段连续的路由分片，因此拆分后的分片只接收来自同一父分片的键，
/// 收缩后的分片完整合并若干父分片。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
  num_shards: u32,
  routing_num_shards: u32,
  factor: u32,
  partition_size: u32,
}

impl Router {
  pub fn new(conf: &[Conf]) -> Result<Self> {
    Self::from_parsed(&ParsedConf::new(conf))
  }

  pub fn from_parsed(conf: &ParsedConf) -> Result<Self> {
    Self::with_shards(conf.num_shards, conf.routing_shards(), conf.partition_size)
  }

  fn with_shards(num_shards: u32, routing_num_shards: u32, partition_size: u32) -> Result<Self> {
    if num_shards == 0 {
      return Err(Error::InvalidArgument("num_shards", num_shards));
    }
    if partition_size == 0 {
      return Err(Error::InvalidArgument("partition_size", partition_size));
    }
    // Routing shards must be num_shards times a factor >= 1
    // 路由分片数必须是 num_shards 的 factor (>= 1) 倍
    if routing_num_shards < num_shards {
      return Err(Error::InvalidFactor {
        from: num_shards,
        to: routing_num_shards,
      });
    }
    let factor = routing_factor(num_shards, routing_num_shards)?;
    Ok(Self {
      num_shards,
      routing_num_shards,
      factor,
      partition_size,
    })
  }

  #[inline(always)]
  pub fn num_shards(&self) -> u32 {
    self.num_shards
  }

  #[inline(always)]
  pub fn routing_num_shards(&self) -> u32 {
    self.routing_num_shards
  }

  /// `routing_num_shards / num_shards`
  #[inline(always)]
  pub fn factor(&self) -> u32 {
    self.factor
  }

  #[inline(always)]
  pub fn partition_size(&self) -> u32 {
    self.partition_size
  }

  /// Shard of a document routed by its own id
  /// 按文档自身 id 路由的分片
  #[inline]
  pub fn shard<K: Key + ?Sized>(&self, id: &K) -> u32 {
    reduce(hash_key(id), 0, self.factor, self.routing_num_shards)
  }

  /// Shard of a document with a custom routing value
  /// 带自定义路由值的文档所在分片
  ///
  /// With `partition_size > 1` the id picks one of `partition_size`
  /// consecutive routing slots after the routing value's slot.
  /// 当 `partition_size > 1` 时，由 id 在路由值所在槽位之后的
  /// `partition_size` 个连续槽位中选择一个。
  pub fn shard_routed<I: Key + ?Sized, R: Key + ?Sized>(&self, id: &I, routing: &R) -> u32 {
    let offset = if self.partition_size > 1 {
      // Wraps like the rest of the hash arithmetic
      floor_mod(hash_key(id), self.partition_size) as i32
    } else {
      0
    };
    reduce(hash_key(routing), offset, self.factor, self.routing_num_shards)
  }

  /// Router after splitting into `target` shards
  /// 拆分为 `target` 个分片后的路由器
  pub fn split(&self, target: u32) -> Result<Self> {
    if target <= self.num_shards {
      return Err(Error::InvalidFactor {
        from: self.num_shards,
        to: target,
      });
    }
    routing_factor(self.num_shards, target)?;
    Self::with_shards(target, self.routing_num_shards, self.partition_size)
  }

  /// Router after shrinking into `target` shards
  /// 收缩为 `target` 个分片后的路由器
  pub fn shrink(&self, target: u32) -> Result<Self> {
    if target >= self.num_shards {
      return Err(Error::InvalidFactor {
        from: self.num_shards,
        to: target,
      });
    }
    routing_factor(self.num_shards, target)?;
    Self::with_shards(target, self.routing_num_shards, self.partition_size)
  }
}
