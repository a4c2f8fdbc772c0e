//! Web 服务器配置

use crate::web::mail::ContactConfig;

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 静态站点目录
    pub static_dir: Option<String>,
    /// 联系表单配置
    pub contact: ContactConfig,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bind_addr) = std::env::var("PAGETRANS_WEB_BIND_ADDRESS") {
            config.bind_addr = bind_addr;
        }
        if let Ok(port) = std::env::var("PAGETRANS_WEB_PORT") {
            if let Ok(parsed) = port.parse() {
                config.port = parsed;
            }
        }
        if let Ok(static_dir) = std::env::var("PAGETRANS_WEB_STATIC_DIR") {
            config.static_dir = if static_dir.is_empty() {
                None
            } else {
                Some(static_dir)
            };
        }

        config.contact = ContactConfig::from_env();
        config
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.is_empty() {
            return Err("bind address cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port cannot be 0".to_string());
        }

        if let Some(ref static_dir) = self.static_dir {
            let path = std::path::Path::new(static_dir);
            if !path.exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        self.contact.validate().map_err(|e| e.to_string())?;

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 7080,
            static_dir: Some("static".to_string()),
            contact: ContactConfig::default(),
        }
    }
}
