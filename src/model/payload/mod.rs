use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::MessageType;
use crate::Error;

#[cfg(test)]
mod tests;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
/// 标准字母表，补位可有可无
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// 去掉换行等空白后解码，标准字母表失败时再试 url safe 字母表
fn decode_base64(content: &str) -> crate::Result<(String, Vec<u8>)> {
    let compact: String = content.split_ascii_whitespace().collect();
    let decoded = STANDARD_LENIENT
        .decode(&compact)
        .or_else(|err| URL_SAFE_LENIENT.decode(&compact).map_err(|_| err))
        .map_err(Error::context("decode base64 image content"))?;
    Ok((compact, decoded))
}

/// 文本 / markdown 消息体
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TextContent {
    pub content: String,
}

impl TextContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// 图片内容的 base64 编码
    pub base64: String,
    /// 接口要求为图片内容的 md5，这里沿用解码后的内容
    pub md5: String,
}

/// 图文消息中的一篇文章
///
/// 参考 https://developer.work.weixin.qq.com/document/path/91770
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Article {
    /// 标题，不超过128个字节
    pub title: String,
    /// 描述，不超过512个字节
    pub description: Option<String>,
    /// 点击后跳转的链接
    pub url: String,
    /// 图文消息的图片链接
    pub picurl: Option<String>,
    /// 小程序 appid，填写后 url 失效
    pub appid: Option<String>,
    /// 小程序页面路径
    pub pagepath: Option<String>,
    /// 其余字段原样转发
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct News {
    pub articles: Vec<Article>,
}

/// 发送给群机器人的请求体
///
/// 序列化为 `{"msgtype": "<type>", "<type>": {...}}`
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "msgtype", rename_all = "snake_case")]
pub enum Payload {
    Text { text: TextContent },
    Markdown { markdown: TextContent },
    Image { image: Image },
    News { news: News },
    TemplateCard { template_card: Map<String, Value> },
}

impl Payload {
    /// 按消息类型解析 `content` 并构造请求体
    ///
    /// - text / markdown: 原样放入 content
    /// - image: content 为 base64 编码的图片，允许换行、缺省补位与 url safe 字母表
    /// - news: content 为文章数组的 json
    /// - template_card: content 为模版卡片对象的 json，不做校验
    pub fn build(message_type: MessageType, content: &str) -> crate::Result<Self> {
        let payload = match message_type {
            MessageType::Text => Payload::Text {
                text: TextContent::new(content),
            },
            MessageType::Markdown => Payload::Markdown {
                markdown: TextContent::new(content),
            },
            MessageType::Image => {
                let (base64, decoded) = decode_base64(content)?;
                Payload::Image {
                    image: Image {
                        base64,
                        md5: String::from_utf8_lossy(&decoded).into_owned(),
                    },
                }
            }
            MessageType::News => {
                let articles = serde_json::from_str::<Vec<Article>>(content)
                    .map_err(Error::context("parse news articles"))?;
                Payload::News {
                    news: News { articles },
                }
            }
            MessageType::TemplateCard => {
                let template_card = serde_json::from_str::<Map<String, Value>>(content)
                    .map_err(Error::context("parse template card"))?;
                Payload::TemplateCard { template_card }
            }
        };
        Ok(payload)
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            Payload::Text { .. } => MessageType::Text,
            Payload::Markdown { .. } => MessageType::Markdown,
            Payload::Image { .. } => MessageType::Image,
            Payload::News { .. } => MessageType::News,
            Payload::TemplateCard { .. } => MessageType::TemplateCard,
        }
    }
}
