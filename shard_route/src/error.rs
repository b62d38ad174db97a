use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Shard counts are not related by an exact integer multiple > 1
  /// 分片数之间不是大于 1 的整数倍关系
  #[error("invalid routing factor: {from} -> {to} shards / 无效路由因子")]
  InvalidFactor { from: u32, to: u32 },

  #[error("invalid argument: {0} = {1} / 无效参数")]
  InvalidArgument(&'static str, u32),
}

pub type Result<T> = std::result::Result<T, Error>;
