#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// 命令行与环境变量输入
pub mod config;
/// 静态量，常量
pub mod consts;
/// 并发发送到多个 key
pub mod dispatcher;
/// 错误处理
mod error;
/// 用于处理 HTTP
pub mod http;
/// 数据结构
pub mod model;

pub use error::{Error, ErrorKind, MalformedContent, Result};
