use futures_util::future::join_all;
use tracing::{debug, error, info};

use crate::{
    Error,
    http::{
        api::webhook::{SendWebhookMessage, SendWebhookMessageRequest},
        client::ApiClient,
    },
    model::{MessageType, Payload, WebhookKey},
};

/// 单个 key 的发送结果
#[derive(Debug)]
pub enum KeyOutcome {
    /// 收到 2xx 响应，响应体原样保留
    Delivered { response: serde_json::Value },
    /// key 为空，没有发出请求
    InvalidKey,
    /// 请求失败或响应状态非 2xx
    Failed(Error),
}

#[derive(Debug)]
pub struct KeyReport {
    pub key: WebhookKey,
    pub outcome: KeyOutcome,
}

/// 一次发送的汇总，顺序与传入的 key 一致
#[derive(Debug)]
pub struct DispatchReport {
    message_type: MessageType,
    reports: Vec<KeyReport>,
}

impl DispatchReport {
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
    pub fn reports(&self) -> &[KeyReport] {
        &self.reports
    }
    pub fn total(&self) -> usize {
        self.reports.len()
    }
    pub fn delivered(&self) -> usize {
        self.count(|o| matches!(o, KeyOutcome::Delivered { .. }))
    }
    pub fn invalid_keys(&self) -> usize {
        self.count(|o| matches!(o, KeyOutcome::InvalidKey))
    }
    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, KeyOutcome::Failed(_)))
    }
    pub fn is_success(&self) -> bool {
        self.invalid_keys() == 0 && self.failures() == 0
    }

    /// 请求失败优先报告为 `DispatchFailed`，其次是无效 key
    pub fn into_result(self) -> crate::Result<Self> {
        let failures = self.failures();
        if failures > 0 {
            return Err(Error::dispatch_failed(failures, self.total()));
        }
        if self.invalid_keys() > 0 {
            return Err(Error::invalid_bot_key());
        }
        Ok(self)
    }

    fn count(&self, pred: impl Fn(&KeyOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    api_client: ApiClient,
}

impl Dispatcher {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// 构造一次请求体，然后并发发送给所有 key
    ///
    /// 内容解析失败时直接返回错误，不会发出任何请求
    pub async fn dispatch(
        &self,
        keys: &[WebhookKey],
        message_type: MessageType,
        content: &str,
    ) -> crate::Result<DispatchReport> {
        let payload = Payload::build(message_type, content)?;
        self.send_payload(keys, &payload).await
    }

    /// 每个 key 一个 future，全部完成后才返回
    ///
    /// 只有请求体无法序列化时返回错误，单个 key 的失败记录在报告里
    pub async fn send_payload(
        &self,
        keys: &[WebhookKey],
        payload: &Payload,
    ) -> crate::Result<DispatchReport> {
        let body = serde_json::to_string(payload).map_err(Error::context("serialize payload"))?;
        info!("Sending message to WeCom Bot...");
        debug!(keys = keys.len(), "payload: {}", body);
        let tasks = keys
            .iter()
            .map(|key| self.send_one(key, payload, body.as_str()));
        let reports = join_all(tasks).await;
        Ok(DispatchReport {
            message_type: payload.message_type(),
            reports,
        })
    }

    async fn send_one(&self, key: &WebhookKey, payload: &Payload, body: &str) -> KeyReport {
        let outcome = match key.validate() {
            Err(err) => {
                error!("{}", err);
                KeyOutcome::InvalidKey
            }
            Ok(valid) => {
                let request = SendWebhookMessageRequest {
                    key: valid,
                    payload,
                };
                match self.api_client.send::<SendWebhookMessage>(&request).await {
                    Ok(response) => {
                        info!(key = %key.masked(), "Message sent to WeCom Bot successfully.");
                        info!("{} {} {}", payload.message_type(), body, response);
                        KeyOutcome::Delivered { response }
                    }
                    Err(err) => {
                        error!(key = %key.masked(), "Failed to send message to WeCom Bot: {}", err);
                        KeyOutcome::Failed(err)
                    }
                }
            }
        };
        KeyReport {
            key: key.clone(),
            outcome,
        }
    }
}
