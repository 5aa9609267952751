use std::sync::Arc;

use crate::{Error, http::api::Api};
use http::header::CONTENT_TYPE;
use reqwest::{ClientBuilder, Url};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// 使用默认配置构建客户端，https 地址只允许 https
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let client = ClientBuilder::new()
            .https_only(base_url.starts_with("https://"))
            .build()
            .map_err(Error::context("build http client"))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// 自己提供一个客户端
    pub fn from_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼出完整的请求地址，查询参数会被 url 编码
    pub fn url<A: Api>(&self, request: &A::Request) -> crate::Result<Url> {
        let raw = format!("{}{}", self.base_url, A::path(request));
        let mut url = Url::parse(&raw).map_err(|_| Error::invalid_url(raw))?;
        let query = A::query(request);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, &value);
            }
        }
        Ok(url)
    }

    /// 发送一个请求，非 2xx 视为失败，响应体交给 `A::parse_response`
    ///
    /// 例子
    /// ```rust,no_run,ignore
    /// let resp = client.send::<SendWebhookMessage>(&request).await?
    /// ```
    pub async fn send<A: Api>(&self, request: &A::Request) -> crate::Result<A::Response> {
        let url = self.url::<A>(request)?;
        let resp = self
            .client
            .request(A::METHOD, url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(Error::context("send request"))?
            .error_for_status()
            .map_err(Error::context("webhook responded with error status"))?;
        let body = resp
            .text()
            .await
            .map_err(Error::context("read response body"))?;
        A::parse_response(body)
    }
}
