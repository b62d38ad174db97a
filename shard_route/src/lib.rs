#![cfg_attr(docsrs, feature(doc_cfg))]

//! # shard_route - Routing key to shard / 路由键到分片
//!
//! Maps a routing key to a shard index and keeps that mapping local when an
//! index is split into a multiple of its shard count or shrunk into a divisor
//! of it. All functions are pure; routing decisions are logged at `trace`.
//! 将路由键映射为分片编号，并在索引拆分为分片数的倍数或收缩为其约数时保持局部性。
//! 所有函数均为纯函数，路由决策以 `trace` 级别记录。

mod calc;
pub mod conf;
pub mod error;
mod router;

pub use calc::{
  LOG2_MAX_SHARDS, ROUTING_SHARDS_SINCE, floor_mod, partition_offset, routing_factor,
  routing_num_shards, shard_id,
};
pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use route_hash::{Key, hash_key};
pub use router::Router;
