//! 资源解析器模块
//!
//! 包含HTML文档的解析、DOM操作和序列化功能。

pub mod html;

pub use html::*;
