use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// 群机器人支持的消息类型
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Text,
    Markdown,
    Image,
    News,
    TemplateCard,
}

impl MessageType {
    pub const ALL: [MessageType; 5] = [
        MessageType::Text,
        MessageType::Markdown,
        MessageType::Image,
        MessageType::News,
        MessageType::TemplateCard,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Markdown => "markdown",
            MessageType::Image => "image",
            MessageType::News => "news",
            MessageType::TemplateCard => "template_card",
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == tag)
            .ok_or_else(|| crate::Error::invalid_message_type(tag))
    }
}
