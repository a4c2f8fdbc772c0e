//! 联系表单的邮件转发
//!
//! 把提交者的 `name`/`email`/`message` 组装成一封邮件，
//! 通过SMTP中继投递到配置的收件人。提交者作为发件人出现，
//! 方便收件人直接回复。

use lettre::message::Mailbox;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// 邮件转发错误
#[derive(Error, Debug)]
pub enum MailError {
    /// SMTP投递失败
    #[error("邮件投递失败: {0}")]
    MailDeliveryFailed(String),

    /// 提交的发件地址无法解析
    #[error("邮件地址无效: {0}")]
    InvalidAddress(String),

    /// 中继配置错误
    #[error("SMTP配置错误: {0}")]
    RelayConfig(String),
}

/// 联系表单配置
///
/// 收件人地址不再硬编码在处理逻辑里，由部署环境提供。
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// 收件地址
    pub recipient: String,
    /// 收件人显示名
    pub recipient_name: String,
    /// 固定的邮件主题
    pub subject: String,
    /// SMTP中继主机
    pub smtp_host: String,
    pub smtp_port: u16,
    /// true时使用无TLS的本地中继（开发环境）
    pub smtp_insecure: bool,
}

impl ContactConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(recipient) = std::env::var("PAGETRANS_CONTACT_RECIPIENT") {
            config.recipient = recipient;
        }
        if let Ok(name) = std::env::var("PAGETRANS_CONTACT_RECIPIENT_NAME") {
            config.recipient_name = name;
        }
        if let Ok(subject) = std::env::var("PAGETRANS_CONTACT_SUBJECT") {
            config.subject = subject;
        }
        if let Ok(host) = std::env::var("PAGETRANS_SMTP_HOST") {
            config.smtp_host = host;
        }
        if let Ok(port) = std::env::var("PAGETRANS_SMTP_PORT") {
            if let Ok(parsed) = port.parse() {
                config.smtp_port = parsed;
            }
        }
        if let Ok(insecure) = std::env::var("PAGETRANS_SMTP_INSECURE") {
            config.smtp_insecure = insecure == "1" || insecure.eq_ignore_ascii_case("true");
        }

        config
    }

    /// 验证配置
    pub fn validate(&self) -> Result<(), MailError> {
        if self.recipient.is_empty() {
            return Err(MailError::RelayConfig("收件地址不能为空".to_string()));
        }
        if self.smtp_host.is_empty() {
            return Err(MailError::RelayConfig("SMTP主机不能为空".to_string()));
        }
        self.recipient
            .parse::<Address>()
            .map_err(|e| MailError::RelayConfig(format!("收件地址无效: {e}")))?;
        Ok(())
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "mtpsilva@gmail.com".to_string(),
            recipient_name: "AeonLabs website".to_string(),
            subject: "AeonLabs contact form".to_string(),
            smtp_host: "localhost".to_string(),
            smtp_port: 25,
            smtp_insecure: true,
        }
    }
}

/// 邮件转发器
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: ContactConfig,
}

impl Mailer {
    /// 按配置创建转发器
    pub fn new(config: ContactConfig) -> Result<Self, MailError> {
        config.validate()?;

        let transport = if config.smtp_insecure {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.smtp_host.as_str())
                .port(config.smtp_port)
                .build()
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| MailError::RelayConfig(e.to_string()))?
                .port(config.smtp_port)
                .build()
        };

        Ok(Self { transport, config })
    }

    /// 组装联系表单邮件
    pub fn build_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Message, MailError> {
        let from_address = email
            .parse::<Address>()
            .map_err(|e| MailError::InvalidAddress(format!("{email}: {e}")))?;
        let from = Mailbox::new(Some(name.to_string()), from_address);

        let to_address = self
            .config
            .recipient
            .parse::<Address>()
            .map_err(|e| MailError::RelayConfig(format!("收件地址无效: {e}")))?;
        let to = Mailbox::new(Some(self.config.recipient_name.clone()), to_address);

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.config.subject.clone())
            .body(message.to_string())
            .map_err(|e| MailError::MailDeliveryFailed(e.to_string()))
    }

    /// 转发一条联系表单提交
    pub async fn send_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), MailError> {
        let email_message = self.build_message(name, email, message)?;

        self.transport
            .send(email_message)
            .await
            .map_err(|e| MailError::MailDeliveryFailed(e.to_string()))?;

        tracing::info!("联系表单邮件已转发至 {}", self.config.recipient);
        Ok(())
    }
}
