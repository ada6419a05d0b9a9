use reqwest::Method;
use url::form_urlencoded;

use super::request::path_segment;
use super::*;

impl KrakenClient {
    /// Get one page of posts from a channel feed.
    pub async fn list_channel_feed_posts(
        &self,
        input: &ListFeedPosts,
    ) -> Result<FeedPostList, ApiError> {
        let params = Params::new()
            .set_nonzero("limit", input.limit)
            .set_nonempty("cursor", &input.cursor);
        let path = format!("feed/{}/posts", input.channel_id);
        self.call(Method::GET, &path, &params).await
    }

    /// Create a post on a channel feed.
    pub async fn create_channel_feed_post(
        &self,
        input: &NewFeedPost,
    ) -> Result<CreatedFeedPost, ApiError> {
        let params = Params::new()
            .set("content", &input.content)
            .set("share", input.share);
        let path = format!("feed/{}/posts", input.channel_id);
        self.call(Method::POST, &path, &params).await
    }

    /// Get a single channel feed post.
    pub async fn get_channel_feed_post(
        &self,
        channel_id: u64,
        post_id: &str,
    ) -> Result<FeedPost, ApiError> {
        let path = post_path(channel_id, post_id)?;
        self.call(Method::GET, &path, &Params::new()).await
    }

    /// Delete a channel feed post.
    pub async fn delete_channel_feed_post(
        &self,
        channel_id: u64,
        post_id: &str,
    ) -> Result<Empty, ApiError> {
        let path = post_path(channel_id, post_id)?;
        self.call(Method::DELETE, &path, &Params::new()).await
    }

    /// React to a channel feed post with an emote (`"endorse"` or an emote id).
    pub async fn create_channel_feed_post_reaction(
        &self,
        channel_id: u64,
        post_id: &str,
        emote_id: &str,
    ) -> Result<FeedReaction, ApiError> {
        let params = Params::new().set("emote_id", emote_id);
        let path = format!("{}/reactions", post_path(channel_id, post_id)?);
        self.call(Method::POST, &path, &params).await
    }

    /// Remove a reaction from a channel feed post.
    ///
    /// The emote id travels in the query string: the API ignores DELETE bodies.
    pub async fn delete_channel_feed_post_reaction(
        &self,
        channel_id: u64,
        post_id: &str,
        emote_id: &str,
    ) -> Result<Empty, ApiError> {
        let emote: String = form_urlencoded::byte_serialize(emote_id.as_bytes()).collect();
        let path = format!(
            "{}/reactions?emote_id={emote}",
            post_path(channel_id, post_id)?
        );
        self.call(Method::DELETE, &path, &Params::new()).await
    }
}

fn post_path(channel_id: u64, post_id: &str) -> Result<String, ApiError> {
    Ok(format!("feed/{channel_id}/posts/{}", path_segment(post_id)?))
}
