use std::fmt::Debug;

/// 群机器人 webhook 地址中的 key
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WebhookKey(String);

impl WebhookKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// 以逗号分隔，保留顺序与重复项，空项留给校验处理
    pub fn parse_keys(list: &str) -> Vec<WebhookKey> {
        list.split(',').map(WebhookKey::new).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 仅检查非空
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn validate(&self) -> crate::Result<&Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(crate::Error::invalid_bot_key())
        }
    }

    pub fn as_query_value(&self) -> &str {
        self.0.trim()
    }

    /// 日志里只露出前 4 个字符
    pub fn masked(&self) -> String {
        let key = self.as_query_value();
        if key.is_empty() {
            return "<empty>".to_string();
        }
        let prefix: String = key.chars().take(4).collect();
        format!("{prefix}***")
    }
}

impl Debug for WebhookKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WebhookKey").field(&self.masked()).finish()
    }
}

impl From<&str> for WebhookKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for WebhookKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
