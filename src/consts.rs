/// 企业微信群机器人 webhook 发送地址
pub static WEBHOOK_SEND_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";

/// 覆盖发送地址的环境变量
pub static WEBHOOK_URL_ENV: &str = "WECOM_WEBHOOK_URL";

pub fn webhook_send_url() -> String {
    match std::env::var(WEBHOOK_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => WEBHOOK_SEND_URL.to_string(),
    }
}
