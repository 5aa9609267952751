pub mod webhook;

use http::Method;
use serde::{Serialize, de::DeserializeOwned};

/// 一个接口的描述：请求体、响应体、方法、路径与查询参数
pub trait Api {
    type Request: Serialize;
    type Response: DeserializeOwned;
    const METHOD: Method;
    const PATH: &'static str = "";
    fn path(_request: &Self::Request) -> impl std::fmt::Display {
        Self::PATH
    }
    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }
    /// 解析 2xx 响应体，默认按 json 解析
    fn parse_response(body: String) -> crate::Result<Self::Response> {
        serde_json::from_str(&body).map_err(crate::Error::context("parse response"))
    }
}
