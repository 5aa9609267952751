use super::*;
use crate::{ErrorKind, error::MalformedContent};
use serde_json::json;

fn sample_content(ty: MessageType) -> &'static str {
    match ty {
        MessageType::Text | MessageType::Markdown => "hello",
        MessageType::Image => "aGVsbG8=",
        MessageType::News => r#"[{"title":"t","url":"u"}]"#,
        MessageType::TemplateCard => r#"{"card_type":"text_notice"}"#,
    }
}

#[test]
fn msgtype_follows_message_type() {
    for ty in MessageType::ALL {
        let payload = Payload::build(ty, sample_content(ty)).unwrap();
        assert_eq!(payload.message_type(), ty);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["msgtype"], ty.as_str());
        assert!(value.get(ty.as_str()).is_some());
    }
}

#[test]
fn text_serializes_verbatim() {
    let payload = Payload::build(MessageType::Text, "hi").unwrap();
    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains(r#"{"msgtype":"text","text":{"content":"hi"}}"#));
}

#[test]
fn markdown_keeps_content_untouched() {
    let content = "# 标题\n> <font color=\"warning\">注意</font>";
    let payload = Payload::build(MessageType::Markdown, content).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"msgtype": "markdown", "markdown": {"content": content}})
    );
}

#[test]
fn news_preserves_articles() {
    let payload = Payload::build(MessageType::News, r#"[{"title":"t","url":"u"}]"#).unwrap();
    let Payload::News { news } = &payload else {
        panic!("expected news payload, got {payload:?}");
    };
    assert_eq!(news.articles.len(), 1);
    assert_eq!(news.articles[0].title, "t");
    assert_eq!(news.articles[0].url, "u");
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"msgtype": "news", "news": {"articles": [{"title": "t", "url": "u"}]}})
    );
}

#[test]
fn news_keeps_optional_fields() {
    let content = r#"[{"title":"中秋节礼品领取","description":"今年中秋节公司有豪礼相送","url":"www.qq.com","picurl":"http://res.mail.qq.com/node/ww/wwopenmng/images/independent/doc/test_pic_msg1.png"}]"#;
    let payload = Payload::build(MessageType::News, content).unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value["news"]["articles"],
        serde_json::from_str::<serde_json::Value>(content).unwrap()
    );
}

#[test]
fn template_card_is_passed_through() {
    let payload = Payload::build(MessageType::TemplateCard, r#"{"foo":"bar"}"#).unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["template_card"], json!({"foo": "bar"}));
}

#[test]
fn image_decodes_base64_into_md5_field() {
    let payload = Payload::build(MessageType::Image, "aGVsbG8=").unwrap();
    assert_eq!(
        payload,
        Payload::Image {
            image: Image {
                base64: "aGVsbG8=".to_string(),
                md5: "hello".to_string(),
            }
        }
    );
}

#[test]
fn malformed_content_is_rejected() {
    let cases = [
        (MessageType::News, "not-json"),
        (MessageType::News, r#"{"title":"t","url":"u"}"#),
        (MessageType::News, r#"[{"title":"t"}]"#),
        (MessageType::TemplateCard, "not-json"),
        (MessageType::TemplateCard, "[1,2]"),
        (MessageType::Image, "%%%not base64%%%"),
    ];
    for (ty, content) in cases {
        let err = Payload::build(ty, content).unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::MalformedContent(_)),
            "{ty} {content:?} gave {err}"
        );
    }
    let err = Payload::build(MessageType::Image, "@@").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::MalformedContent(MalformedContent::Base64(_))
    ));
}

#[test]
fn image_accepts_wrapped_base64() {
    use base64::{Engine, engine::general_purpose::STANDARD};
    let bytes = "wecom bot image ".repeat(8).into_bytes();
    let encoded = STANDARD.encode(&bytes);
    let wrapped = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| std::str::from_utf8(line).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
        + "\n";
    assert!(wrapped.contains('\n'));

    let Payload::Image { image } = Payload::build(MessageType::Image, &wrapped).unwrap() else {
        panic!("expected image payload");
    };
    assert_eq!(image.base64, encoded);
    assert_eq!(image.md5.as_bytes(), bytes.as_slice());
}

#[test]
fn image_accepts_unpadded_and_url_safe_base64() {
    let payload = Payload::build(MessageType::Image, "aGVsbG8").unwrap();
    let Payload::Image { image } = payload else {
        panic!("expected image payload");
    };
    assert_eq!(image.base64, "aGVsbG8");
    assert_eq!(image.md5, "hello");

    // 0xfb 0xff 在 url safe 字母表下为 "-_8"
    let Payload::Image { image } = Payload::build(MessageType::Image, "-_8").unwrap() else {
        panic!("expected image payload");
    };
    assert_eq!(image.md5, String::from_utf8_lossy(&[0xfb, 0xff]));
}

#[test]
fn news_forwards_unknown_article_fields() {
    let payload = Payload::build(
        MessageType::News,
        r#"[{"title":"t","url":"u","extra":"x","btntxt":{"nested":1}}]"#,
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "msgtype": "news",
            "news": {"articles": [{
                "title": "t",
                "url": "u",
                "extra": "x",
                "btntxt": {"nested": 1}
            }]}
        })
    );
}
