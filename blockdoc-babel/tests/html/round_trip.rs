//! Re-serialization tests: HTML → blocks → HTML → blocks is a fixed point

use blockdoc_babel::envelope::JsonStyle;
use blockdoc_babel::formats::html::{parse_from_html, serialize_to_html};
use blockdoc_babel::{serialize, serialize_to_string, unserialize, Envelope};
use proptest::prelude::*;

const SAMPLE: &str = include_str!("fixtures/sample.html");

#[test]
fn test_sample_rendering() {
    let html = unserialize(&serialize_to_string(SAMPLE, JsonStyle::Pretty).unwrap());

    let expected = [
        "<h1>This is an H1 Heading</h1>",
        "<h2>This is an H2 Heading</h2>",
        "<p>This is a paragraph</p>",
        "<hr>",
        "<pre>(function(){",
        "        console.log('this is some code');",
        "    })();</pre>",
        "<blockquote><p>This is a quote</p><p><cite>This is the quote citation</cite></p></blockquote>",
        r#"<div class="grid"><div class="column column-8"><p>8/12 column</p></div>"#,
        r#"<div class="column column-4"><p>4/12 column</p></div></div>"#,
        "<div><p>This is a layer</p></div>",
        r#"<figure><img src="/img.jpg" alt="Alt Text"><figcaption>Picture Caption</figcaption></figure>"#,
        r#"<figure><a href="/" target="_blank"><img src="/img.jpg" alt="Alt Text"></a><figcaption>Picture Caption</figcaption></figure>"#,
        r#"<figure><div class="embed-responsive">test</div></figure>"#,
    ]
    .join("\n");

    assert_eq!(html, expected);
}

#[test]
fn test_sample_is_fixed_point() {
    let first = serialize(SAMPLE).unwrap();
    let html = unserialize(&first.to_json(JsonStyle::Compact).unwrap());
    let second = serialize(&html).unwrap();

    assert_eq!(first.blocks, second.blocks);
    assert_eq!(first.checksum, second.checksum);
    assert_eq!(unserialize(&second.to_json(JsonStyle::Pretty).unwrap()), html);
}

#[test]
fn test_checksum_is_deterministic() {
    let first = serialize(SAMPLE).unwrap();
    let second = serialize(SAMPLE).unwrap();
    assert_eq!(first.checksum, second.checksum);
    assert_ne!(first.checksum, serialize("<p>Other</p>").unwrap().checksum);
}

#[test]
fn test_deeply_nested_layers_survive() {
    let depth = 50;
    let source = format!("{}<p>core</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let envelope = serialize(&source).unwrap();
    let json = envelope.to_json(JsonStyle::Compact).unwrap();
    let decoded = Envelope::from_json(&json).unwrap();
    assert_eq!(decoded.blocks, envelope.blocks);
    assert!(decoded.verify().unwrap());

    let html = unserialize(&json);
    assert_eq!(html.matches("<div>").count(), depth);
    assert!(html.contains("<p>core</p>"));
    assert_eq!(serialize(&html).unwrap().blocks, envelope.blocks);
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 0..5).prop_map(|words| words.join(" "))
}

/// Leaf elements, including ones the importer skips.
fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        words().prop_map(|t| format!("<p>{t}</p>")),
        Just("<hr>".to_string()),
        (1u8..=6, words()).prop_map(|(l, t)| format!("<h{l}>  {t}\n</h{l}>")),
        words().prop_map(|t| format!("<pre>\n  {t}  </pre>")),
        (prop::collection::vec(words(), 0..3), words()).prop_map(|(items, cite)| {
            let items: String = items.iter().map(|t| format!("<p>\n{t} </p>")).collect();
            format!("<blockquote>{items}<p><cite>{cite}</cite></p></blockquote>")
        }),
        (words(), words(), any::<bool>()).prop_map(|(alt, caption, linked)| {
            let img = format!(r#"<img src="/{alt}.png" alt="{alt}">"#);
            let img = if linked {
                format!(r#"<a href="/{caption}" target="_blank">{img}</a>"#)
            } else {
                img
            };
            format!("<figure>{img}<figcaption>{caption}</figcaption></figure>")
        }),
        words().prop_map(|t| format!("<figure>\n  <span>{t}</span>\n</figure>")),
        words().prop_map(|t| format!("<span>{t}</span>")),
    ]
}

fn fragment() -> impl Strategy<Value = String> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        let children = move || prop::collection::vec(inner.clone(), 0..4).prop_map(|c| c.join("\n"));
        prop_oneof![
            children().prop_map(|c| format!("<div>\n{c}\n</div>")),
            (1u32..=12, children()).prop_map(|(n, c)| {
                format!(r#"<div class="grid"><div class="column column-{n}">{c}</div></div>"#)
            }),
            children().prop_map(|c| format!(r#"<div class="column">{c}</div>"#)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_reserialization_is_idempotent(parts in prop::collection::vec(fragment(), 0..6)) {
        let source = parts.join("\n");

        let first = parse_from_html(&source).unwrap().blocks;
        let second = parse_from_html(&serialize_to_html(&first)).unwrap().blocks;
        prop_assert_eq!(&first, &second);

        let envelope = serialize(&source).unwrap();
        let again = serialize(&unserialize(&envelope.to_json(JsonStyle::Compact).unwrap())).unwrap();
        prop_assert_eq!(envelope.blocks, again.blocks);
    }
}
