use poise::serenity_prelude::{ChannelId, GuildId, Message, MessageId};
use url::Url;

use crate::commands::target::TargetMessage;

pub fn permalink(guild: Option<GuildId>, channel: ChannelId, message: MessageId) -> Url {
    let guild = guild.map_or_else(|| "@me".to_owned(), |id| id.to_string());

    Url::parse(&format!(
        "https://discord.com/channels/{guild}/{channel}/{message}"
    ))
    .expect("discord ids should always form a valid url")
}

pub trait Permalink {
    /// `guild` is where the command ran; resolved messages don't always carry it.
    fn permalink(&self, guild: Option<GuildId>) -> Url;

    fn as_target<'a>(&'a self, permalink: &'a Url) -> TargetMessage<'a>;
}

impl Permalink for Message {
    fn permalink(&self, guild: Option<GuildId>) -> Url {
        permalink(guild.or(self.guild_id), self.channel_id, self.id)
    }

    fn as_target<'a>(&'a self, permalink: &'a Url) -> TargetMessage<'a> {
        TargetMessage::new(&self.content, self.embeds.len(), permalink)
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::{ChannelId, GuildId, MessageId};
    use pretty_assertions::assert_eq;

    use super::permalink;

    #[test]
    fn guild_permalink() {
        let url = permalink(
            Some(GuildId::new(81384788765712384)),
            ChannelId::new(381870553235193857),
            MessageId::new(1186352102357729350),
        );

        assert_eq!(
            url.as_str(),
            "https://discord.com/channels/81384788765712384/381870553235193857/1186352102357729350"
        );
    }

    #[test]
    fn dm_permalink() {
        let url = permalink(None, ChannelId::new(22), MessageId::new(33));

        assert_eq!(url.as_str(), "https://discord.com/channels/@me/22/33");
    }
}
