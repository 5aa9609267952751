use clap::Parser;

use crate::{
    consts,
    model::{MessageType, WebhookKey},
};

/// 发送消息到企业微信群机器人
///
/// 每个参数都可以用 GitHub Actions 的 `INPUT_*` 环境变量提供
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wecom-bot-notify", version)]
pub struct Cli {
    /// Comma separated webhook keys
    #[arg(long, env = "INPUT_KEY", hide_env_values = true)]
    pub key: Option<String>,
    /// Message content, format depends on --type
    #[arg(long, env = "INPUT_CONTENT")]
    pub content: Option<String>,
    /// One of text, markdown, image, news, template_card
    #[arg(long = "type", env = "INPUT_TYPE")]
    pub msg_type: Option<String>,
    /// Override the webhook endpoint (defaults to $WECOM_WEBHOOK_URL or the WeCom endpoint)
    #[arg(long)]
    pub webhook_url: Option<String>,
}

/// 校验后的输入
#[derive(Debug, Clone)]
pub struct Invocation {
    pub keys: Vec<WebhookKey>,
    pub message_type: MessageType,
    pub content: String,
    pub webhook_url: String,
}

fn required(value: Option<String>, name: &'static str) -> crate::Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(crate::Error::missing_input(name)),
    }
}

impl Cli {
    /// 与 actions 的 `getInput(name, { required: true })` 一致：去掉首尾空白，空值报错
    pub fn into_invocation(self) -> crate::Result<Invocation> {
        let keys = required(self.key, "key")?;
        let content = required(self.content, "content")?;
        let message_type = required(self.msg_type, "type")?.parse::<MessageType>()?;
        let webhook_url = match self.webhook_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => consts::webhook_send_url(),
        };
        Ok(Invocation {
            keys: WebhookKey::parse_keys(&keys),
            message_type,
            content,
            webhook_url,
        })
    }
}
