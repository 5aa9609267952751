use serde::Serialize;
use serde_json::Value;

use super::Api;
use crate::model::{Payload, WebhookKey};

/// 群机器人发送消息
///
/// `POST /cgi-bin/webhook/send?key=KEY`
pub struct SendWebhookMessage<'a> {
    marker: std::marker::PhantomData<&'a ()>,
}

#[derive(Debug, Clone, Copy)]
pub struct SendWebhookMessageRequest<'a> {
    pub key: &'a WebhookKey,
    pub payload: &'a Payload,
}

impl Serialize for SendWebhookMessageRequest<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload.serialize(serializer)
    }
}

impl<'a> Api for SendWebhookMessage<'a> {
    type Request = SendWebhookMessageRequest<'a>;

    /// 响应原样返回，不检查 errcode
    type Response = Value;

    const METHOD: http::Method = http::Method::POST;

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("key", request.key.as_query_value().to_owned())]
    }

    /// 任何 2xx 都算成功：空响应为 null，非 json 响应保留为字符串
    fn parse_response(body: String) -> crate::Result<Value> {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body)))
    }
}
