#![cfg_attr(docsrs, feature(doc_cfg))]

//! # route_hash - MurmurHash3 x86_32 for routing keys / 路由键哈希
//!
//! Bit-exact MurmurHash3_x86_32. Output is returned as `i32` so that callers
//! doing modulo arithmetic see the same signed value as the reference store.
//! 逐位兼容的 MurmurHash3_x86_32，返回 `i32`，与参考存储的有符号值一致。
//!
//! Routing keys are hashed over their UTF-16 code units, each written as two
//! little-endian bytes (not UTF-8).
//! 路由键按 UTF-16 码元哈希，每个码元写为两个小端字节（非 UTF-8）。

mod hasher;
mod key;
mod murmur3;

pub use hasher::{BuildMurmur3, Murmur3};
pub use key::{Key, encode, hash_key};
pub use murmur3::{C1, C2, fmix32, hash_bytes, murmur3_32};
