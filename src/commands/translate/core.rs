use url::{form_urlencoded, Url};

use crate::commands::target::{truncate, TargetMessage, DESCRIPTION_LIMIT};

const TRANSLATOR: &str = "https://translate.google.com/";
const TARGET_LANGUAGE: &str = "en";

/// Most characters the `text` parameter may take up once percent-encoded.
const MAX_ENCODED_TEXT: usize = 1800;

/// The longest prefix of `text` that stays within `max` characters once url-encoded.
fn encodable_prefix(text: &str, max: usize) -> &str {
    let mut encoded = 0;
    let mut buf = [0; 4];

    for (index, c) in text.char_indices() {
        encoded += form_urlencoded::byte_serialize(c.encode_utf8(&mut buf).as_bytes())
            .map(str::len)
            .sum::<usize>();

        if encoded > max {
            return &text[..index];
        }
    }

    text
}

pub fn translation_url(text: &str) -> Url {
    let mut url = Url::parse(TRANSLATOR).expect("hard-coded url should be valid");

    url.query_pairs_mut()
        .append_pair("sl", "auto")
        .append_pair("tl", TARGET_LANGUAGE)
        .append_pair("op", "translate")
        .append_pair("text", text);

    url
}

pub fn to_english(message: TargetMessage<'_>) -> String {
    let text = match message.text() {
        Ok(text) => text,
        Err(reason) => return message.refusal(reason, "translate"),
    };

    let translate = format!(
        "[Translate to English]({})",
        translation_url(encodable_prefix(text, MAX_ENCODED_TEXT))
    );
    let link = message.link();

    let quoted = text
        .lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let room = DESCRIPTION_LIMIT
        .saturating_sub(translate.chars().count() + link.chars().count() + 4);

    format!("{}\n\n{translate}\n\n{link}", truncate(&quoted, room))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;

    use super::{encodable_prefix, to_english, translation_url};
    use crate::commands::target::{TargetMessage, DESCRIPTION_LIMIT};

    #[test]
    fn url_encodes_text() {
        let url = translation_url("hallo & tschüss");

        assert_eq!(url.host_str(), Some("translate.google.com"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            [
                ("sl", "auto"),
                ("tl", "en"),
                ("op", "translate"),
                ("text", "hallo & tschüss"),
            ]
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
        );
    }

    #[test]
    fn quotes_and_links() {
        let permalink = Url::parse("https://discord.com/channels/1/2/3").expect("hard-coded");

        let text = to_english(TargetMessage::new("hoi\nhoe gaat het", 0, &permalink));

        assert!(text.starts_with("> hoi\n> hoe gaat het\n\n[Translate to English](https://translate.google.com/?"));
        assert!(text.ends_with("[Go to the original message](https://discord.com/channels/1/2/3)"));
    }

    #[test]
    fn prefix_respects_encoded_length() {
        assert_eq!(encodable_prefix("abc", 10), "abc");
        assert_eq!(encodable_prefix("a b", 2), "a ");
        // each of these is three bytes, nine characters encoded
        assert_eq!(encodable_prefix("日本語", 20), "日本");
    }

    #[test]
    fn long_foreign_message_fits_in_embed() {
        let permalink = Url::parse("https://discord.com/channels/1/2/3").expect("hard-coded");
        let message = "日本語のメッセージ".repeat(50);

        let text = to_english(TargetMessage::new(&message, 0, &permalink));

        assert!(text.chars().count() <= DESCRIPTION_LIMIT, "{} chars", text.chars().count());
        assert!(text.starts_with("> 日本語のメッセージ"));
        assert!(text.contains("[Translate to English](https://translate.google.com/?"));
        assert!(text.ends_with("[Go to the original message](https://discord.com/channels/1/2/3)"));
    }

    #[test]
    fn long_message_url_keeps_a_prefix() {
        let message = "ü".repeat(5000);
        let url = translation_url(encodable_prefix(&message, super::MAX_ENCODED_TEXT));

        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .expect("text parameter");

        assert!(!text.is_empty());
        assert!(message.starts_with(&text));
        assert!(url.as_str().len() < 2000);
    }

    #[test]
    fn refuses_embeds() {
        let permalink = Url::parse("https://discord.com/channels/1/2/3").expect("hard-coded");

        assert_eq!(
            to_english(TargetMessage::new("", 1, &permalink)),
            "I can't translate embeds, sorry.\n\n\
            [Go to the original message](https://discord.com/channels/1/2/3)"
        );
    }
}
