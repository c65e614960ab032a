use std::borrow::Cow;

use url::Url;

/// Longest embed description Discord accepts, in characters.
pub const DESCRIPTION_LIMIT: usize = 4096;

/// The parts of a message that context menu commands work with.
#[derive(Debug, Clone, Copy)]
pub struct TargetMessage<'a> {
    pub content: &'a str,
    pub embeds: usize,
    pub permalink: &'a Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    Embed,
    Empty,
}

impl<'a> TargetMessage<'a> {
    pub fn new(content: &'a str, embeds: usize, permalink: &'a Url) -> Self {
        Self {
            content,
            embeds,
            permalink,
        }
    }

    /// The message text, or why there's nothing to work with.
    pub fn text(&self) -> Result<&'a str, Unsupported> {
        if !self.content.trim().is_empty() {
            Ok(self.content)
        } else if self.embeds > 0 {
            Err(Unsupported::Embed)
        } else {
            Err(Unsupported::Empty)
        }
    }

    pub fn link(&self) -> String {
        format!("[Go to the original message]({})", self.permalink)
    }

    /// `verb` is what the command does, as in "I can't {verb} embeds".
    pub fn refusal(&self, reason: Unsupported, verb: &str) -> String {
        let what = match reason {
            Unsupported::Embed => "embeds",
            Unsupported::Empty => "messages without text",
        };

        format!("I can't {verb} {what}, sorry.\n\n{}", self.link())
    }

    /// `body` followed by the link back, with `body` cut short to fit in one embed.
    pub fn with_link(&self, body: &str) -> String {
        let link = self.link();
        let room = DESCRIPTION_LIMIT.saturating_sub(link.chars().count() + 2);

        format!("{}\n\n{link}", truncate(body, room))
    }
}

/// Cuts `text` to at most `max` characters, ending in an ellipsis when anything was dropped.
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        None => Cow::Borrowed(text),
        Some(_) if max == 0 => Cow::Borrowed(""),
        Some(_) => {
            let end = text
                .char_indices()
                .nth(max - 1)
                .map_or(text.len(), |(index, _)| index);

            Cow::Owned(format!("{}…", &text[..end]))
        }
    }
}
