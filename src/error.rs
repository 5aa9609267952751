use std::borrow::Cow;

pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: Cow<'static, str>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::MalformedContent(MalformedContent::Json(err)) => Some(err),
            ErrorKind::MalformedContent(MalformedContent::Base64(err)) => Some(err),
            ErrorKind::Reqwest(err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
    pub fn context<K: Into<ErrorKind>>(
        context: impl Into<Cow<'static, str>>,
    ) -> impl FnOnce(K) -> Error {
        move |kind| Error::new(kind.into(), context)
    }
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
    pub fn missing_input(name: &'static str) -> Self {
        Self::new(ErrorKind::MissingInput(name), "read inputs")
    }
    pub fn invalid_message_type(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMessageType(tag.into()), "validate message type")
    }
    pub fn invalid_bot_key() -> Self {
        Self::new(ErrorKind::InvalidBotKey, "validate bot key")
    }
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidUrl(url.into()), "build webhook url")
    }
    pub fn dispatch_failed(failed: usize, total: usize) -> Self {
        Self::new(
            ErrorKind::DispatchFailed { failed, total },
            "Failed to send message to WeCom Bot",
        )
    }
}

impl From<serde_json::Error> for ErrorKind {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedContent(MalformedContent::Json(err))
    }
}

impl From<base64::DecodeError> for ErrorKind {
    fn from(err: base64::DecodeError) -> Self {
        Self::MalformedContent(MalformedContent::Base64(err))
    }
}

impl From<reqwest::Error> for ErrorKind {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

#[derive(Debug)]
pub enum MalformedContent {
    Json(serde_json::Error),
    Base64(base64::DecodeError),
}

#[derive(Debug)]
pub enum ErrorKind {
    /// 必填输入为空
    MissingInput(&'static str),
    /// 不支持的消息类型
    InvalidMessageType(String),
    /// bot key 为空
    InvalidBotKey,
    /// 消息内容无法解析
    MalformedContent(MalformedContent),
    InvalidUrl(String),
    Reqwest(reqwest::Error),
    /// 至少一个 key 发送失败
    DispatchFailed { failed: usize, total: usize },
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput(name) => write!(f, "Input required and not supplied: {}", name),
            Self::InvalidMessageType(tag) => write!(
                f,
                "Invalid message type {:?}. Allowed types are \"text\", \"markdown\", \"image\", \"news\" and \"template_card\".",
                tag
            ),
            Self::InvalidBotKey => write!(f, "Invalid or missing wecom bot hook key."),
            Self::MalformedContent(MalformedContent::Json(err)) => {
                write!(f, "malformed json content: {}", err)
            }
            Self::MalformedContent(MalformedContent::Base64(err)) => {
                write!(f, "malformed base64 content: {}", err)
            }
            Self::InvalidUrl(url) => write!(f, "invalid url: {}", url),
            Self::Reqwest(err) => write!(f, "reqwest error: {}", err),
            Self::DispatchFailed { failed, total } => {
                write!(f, "{} of {} webhook requests failed", failed, total)
            }
        }
    }
}
