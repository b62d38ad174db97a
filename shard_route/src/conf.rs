//! Router configuration
//! 路由配置

use log::warn;

use crate::routing_num_shards;

/// Default configuration values
/// 默认配置值
pub mod default {
  pub const NUM_SHARDS: u32 = 1;
  /// 0 = derive from shard count and version / 0 表示按分片数与版本派生
  pub const ROUTING_NUM_SHARDS: u32 = 0;
  pub const PARTITION_SIZE: u32 = 1;
  pub const VERSION: u8 = 7;
}

/// Router configuration item
/// 路由配置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conf {
  /// Current shard count
  /// 当前分片数
  NumShards(u32),
  /// Routing shard count the index was created with, 0 to derive
  /// 索引创建时的路由分片数，0 表示派生
  RoutingNumShards(u32),
  /// Shards a single routing value may spread over
  /// 单个路由值可分散到的分片数
  PartitionSize(u32),
  /// Store major version
  /// 存储主版本号
  Version(u8),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub num_shards: u32,
  pub routing_num_shards: u32,
  pub partition_size: u32,
  pub version: u8,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      num_shards: default::NUM_SHARDS,
      routing_num_shards: default::ROUTING_NUM_SHARDS,
      partition_size: default::PARTITION_SIZE,
      version: default::VERSION,
    }
  }
}

impl ParsedConf {
  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::NumShards(v) => c.num_shards = at_least_one("num_shards", v),
        Conf::RoutingNumShards(v) => c.routing_num_shards = v,
        Conf::PartitionSize(v) => c.partition_size = at_least_one("partition_size", v),
        Conf::Version(v) => c.version = v,
      }
    }
    c
  }

  /// Configured routing shard count, or the derived default
  /// 已配置的路由分片数，或派生的默认值
  #[inline]
  pub fn routing_shards(&self) -> u32 {
    if self.routing_num_shards == 0 {
      routing_num_shards(self.num_shards, self.version)
    } else {
      self.routing_num_shards
    }
  }
}

fn at_least_one(name: &str, v: u32) -> u32 {
  if v == 0 {
    warn!("{name} = 0, clamped to 1");
    return 1;
  }
  v
}
