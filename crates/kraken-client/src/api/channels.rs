use reqwest::Method;

use super::*;

impl KrakenClient {
    /// Get the channel of the authenticated user, including its stream key.
    pub async fn get_channel(&self) -> Result<Channel, ApiError> {
        self.call(Method::GET, "channel", &Params::new()).await
    }

    /// Get a channel by id.
    pub async fn get_channel_by_id(&self, channel_id: u64) -> Result<Channel, ApiError> {
        let path = format!("channels/{channel_id}");
        self.call(Method::GET, &path, &Params::new()).await
    }

    /// Update channel metadata. Only fields set on `input` are sent.
    pub async fn update_channel(&self, input: &UpdateChannel) -> Result<Channel, ApiError> {
        let path = format!("channels/{}", input.channel_id);
        self.call(Method::PUT, &path, &update_channel_params(input))
            .await
    }

    /// Get the users allowed to edit a channel.
    pub async fn get_channel_editors(&self, channel_id: u64) -> Result<Editors, ApiError> {
        let path = format!("channels/{channel_id}/editors");
        self.call(Method::GET, &path, &Params::new()).await
    }

    /// Get one page of a channel's followers.
    pub async fn get_channel_followers(
        &self,
        input: &ListFollowers,
    ) -> Result<Followers, ApiError> {
        let params = Params::new()
            .set_nonzero("limit", input.limit)
            .set_nonzero("offset", input.offset)
            .set_nonempty("cursor", &input.cursor)
            .set_nonempty("direction", &input.direction);
        let path = format!("channels/{}/follows", input.channel_id);
        self.call(Method::GET, &path, &params).await
    }

    /// Get the teams a channel belongs to.
    pub async fn get_channel_teams(&self, channel_id: u64) -> Result<Teams, ApiError> {
        let path = format!("channels/{channel_id}/teams");
        self.call(Method::GET, &path, &Params::new()).await
    }

    /// Get one page of a channel's subscribers.
    pub async fn get_channel_subscribers(
        &self,
        input: &ListSubscribers,
    ) -> Result<Subscribers, ApiError> {
        let params = Params::new()
            .set_nonzero("limit", input.limit)
            .set_nonzero("offset", input.offset)
            .set_nonempty("direction", &input.direction);
        let path = format!("channels/{}/subscriptions", input.channel_id);
        self.call(Method::GET, &path, &params).await
    }

    /// Check whether `user_id` subscribes to `channel_id`. A non-subscriber
    /// is reported by the API as a 404 error.
    pub async fn check_channel_subscription_by_user(
        &self,
        channel_id: u64,
        user_id: u64,
    ) -> Result<Subscription, ApiError> {
        let path = format!("channels/{channel_id}/subscriptions/{user_id}");
        self.call(Method::GET, &path, &Params::new()).await
    }

    /// Get one page of a channel's videos.
    pub async fn get_channel_videos(
        &self,
        input: &ListChannelVideos,
    ) -> Result<VideoList, ApiError> {
        let path = format!("channels/{}/videos", input.channel_id);
        self.call(Method::GET, &path, &channel_videos_params(input))
            .await
    }

    /// Start a commercial break of `length` seconds (30, 60, 90, 120, 150
    /// or 180).
    pub async fn start_channel_commercial(
        &self,
        channel_id: u64,
        length: u32,
    ) -> Result<Commercial, ApiError> {
        let params = Params::new().set("length", length);
        let path = format!("channels/{channel_id}/commercial");
        self.call(Method::POST, &path, &params).await
    }

    /// Reset a channel's stream key. The returned channel carries the new key.
    pub async fn reset_stream_key(&self, channel_id: u64) -> Result<Channel, ApiError> {
        let path = format!("channels/{channel_id}/stream_key");
        self.call(Method::DELETE, &path, &Params::new()).await
    }
}

fn update_channel_params(input: &UpdateChannel) -> Params {
    Params::new()
        .set_some("status", input.status.as_deref())
        .set_some("game", input.game.as_deref())
        .set_some("delay", input.delay)
        .set_some("channel_feed_enabled", input.channel_feed_enabled)
}

fn channel_videos_params(input: &ListChannelVideos) -> Params {
    Params::new()
        .set_nonzero("limit", input.limit)
        .set_nonzero("offset", input.offset)
        .set_nonempty("broadcast_type", &input.broadcast_types.join(","))
        .set_nonempty("language", &input.language)
        .set_nonempty("sort", &input.sort)
}
