//! # 网络模块
//!
//! 网络传输抽象层：
//!
//! - `Transport` - 注入式HTTP传输接口（发起GET，返回状态码和响应体）
//! - `HttpTransport` - 基于reqwest的默认实现，携带禁用缓存的请求头
//! - `append_cache_buster` - 请求URL的时间戳防缓存参数

pub mod transport;

// Re-export commonly used items for convenience
pub use transport::{append_cache_buster, HttpTransport, Transport, TransportResponse};
