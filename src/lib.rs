//! # Pagetrans Library
//!
//! 将静态网页的可见文本翻译为目标语言并原地重写的工具库。
//!
//! ## 模块组织
//!
//! - `core` - 核心功能和主要处理逻辑
//! - `parsers` - HTML解析和序列化
//! - `network` - 网络传输抽象（注入式Transport）
//! - `translation` - 翻译流程（片段收集、请求分发、结果应用）
//! - `web` - Web服务器功能（联系表单转发、按需翻译，可选）

pub mod core;
pub mod network;
pub mod parsers;
pub mod translation;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::network::*;
pub use crate::parsers::*;
