use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;

/// Output of endpoints that return no meaningful body (unblock, deletes,
/// upload parts). Any JSON object decodes into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

// ---------------------------------------------------------------------------
// Shared value objects
// ---------------------------------------------------------------------------

/// User as embedded in blocks, feed posts, follows and subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub display_name: String,
    #[serde(rename = "type", deserialize_with = "de::nullable")]
    pub user_type: String,
    pub bio: Option<String>,
    pub logo: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Channel from GET /kraken/channel and GET /kraken/channels/:id.
///
/// `stream_key` and `email` are only present on the authenticated user's
/// own channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub display_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub mature: bool,
    pub status: Option<String>,
    pub broadcaster_language: Option<String>,
    #[serde(deserialize_with = "de::nullable")]
    pub broadcaster_type: String,
    pub game: Option<String>,
    #[serde(deserialize_with = "de::nullable")]
    pub language: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub logo: Option<String>,
    pub video_banner: Option<String>,
    pub profile_banner: Option<String>,
    pub profile_banner_background_color: Option<String>,
    #[serde(deserialize_with = "de::nullable")]
    pub partner: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub url: String,
    #[serde(deserialize_with = "de::nullable")]
    pub views: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub followers: u64,
    pub stream_key: Option<String>,
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// Token details from GET /kraken/.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Root {
    #[serde(deserialize_with = "de::nullable")]
    pub token: RootToken,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootToken {
    pub authorization: Option<RootAuthorization>,
    pub user_name: Option<String>,
    #[serde(deserialize_with = "de::nullable")]
    pub valid: bool,
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootAuthorization {
    #[serde(deserialize_with = "de::nullable")]
    pub scopes: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Query for GET /kraken/users/:id/blocks. Zero `limit`/`offset` use the
/// API defaults (25 and 0).
#[derive(Debug, Clone, Default)]
pub struct ListBlocks {
    pub user_id: u64,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockList {
    #[serde(rename = "_total", deserialize_with = "de::nullable")]
    pub total: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub blocks: Vec<Block>,
}

/// A single block list entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::nullable")]
    pub user: User,
}

// ---------------------------------------------------------------------------
// Channel feed
// ---------------------------------------------------------------------------

/// Query for GET /kraken/feed/:channel/posts.
#[derive(Debug, Clone, Default)]
pub struct ListFeedPosts {
    pub channel_id: u64,
    pub limit: u32,
    pub cursor: String,
}

/// Body for POST /kraken/feed/:channel/posts.
#[derive(Debug, Clone, Default)]
pub struct NewFeedPost {
    pub channel_id: u64,
    pub content: String,
    /// Also share the post on the channel owner's linked Twitter account.
    pub share: bool,
}

/// Emote occurrence inside a feed post body (character offsets).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedEmote {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::id")]
    pub set: String,
    #[serde(deserialize_with = "de::nullable")]
    pub start: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub end: u32,
}

/// Aggregated reactions for one emote on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    #[serde(deserialize_with = "de::nullable")]
    pub count: u64,
    #[serde(deserialize_with = "de::ids")]
    pub user_ids: Vec<String>,
}

/// Channel feed post. Reactions are keyed by emote id (`"endorse"` for the
/// built-in reaction).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedPost {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::nullable")]
    pub deleted: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub emotes: Vec<FeedEmote>,
    #[serde(deserialize_with = "de::nullable")]
    pub body: String,
    #[serde(deserialize_with = "de::nullable")]
    pub reactions: HashMap<String, Reaction>,
    #[serde(deserialize_with = "de::nullable")]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedPostList {
    #[serde(rename = "_total", deserialize_with = "de::nullable")]
    pub total: u64,
    #[serde(rename = "_cursor", deserialize_with = "de::nullable")]
    pub cursor: String,
    #[serde(deserialize_with = "de::nullable")]
    pub posts: Vec<FeedPost>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedFeedPost {
    #[serde(deserialize_with = "de::nullable")]
    pub post: FeedPost,
    /// Tweet URL when the post was shared.
    pub tweet: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedReaction {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::id")]
    pub emote_id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub user: User,
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// Fields for PUT /kraken/channels/:id. Only `Some` fields are sent, so an
/// explicit `delay: Some(0)` still clears the delay.
#[derive(Debug, Clone, Default)]
pub struct UpdateChannel {
    pub channel_id: u64,
    pub status: Option<String>,
    pub game: Option<String>,
    pub delay: Option<u32>,
    pub channel_feed_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Editors {
    #[serde(deserialize_with = "de::nullable")]
    pub users: Vec<User>,
}

/// Query for GET /kraken/channels/:id/follows.
#[derive(Debug, Clone, Default)]
pub struct ListFollowers {
    pub channel_id: u64,
    pub limit: u32,
    pub offset: u32,
    pub cursor: String,
    /// `asc` or `desc`; empty uses the API default.
    pub direction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Followers {
    #[serde(rename = "_cursor", deserialize_with = "de::nullable")]
    pub cursor: String,
    #[serde(rename = "_total", deserialize_with = "de::nullable")]
    pub total: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub follows: Vec<Follow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Follow {
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::nullable")]
    pub notifications: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub display_name: String,
    pub info: Option<String>,
    pub logo: Option<String>,
    pub banner: Option<String>,
    pub background: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teams {
    #[serde(deserialize_with = "de::nullable")]
    pub teams: Vec<Team>,
}

/// Query for GET /kraken/channels/:id/subscriptions.
#[derive(Debug, Clone, Default)]
pub struct ListSubscribers {
    pub channel_id: u64,
    pub limit: u32,
    pub offset: u32,
    pub direction: String,
}

/// A subscription. Channel listings fill `user`; the per-user check fills
/// `channel` on some API revisions and `user` on others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::nullable")]
    pub sub_plan: String,
    #[serde(deserialize_with = "de::nullable")]
    pub sub_plan_name: String,
    #[serde(deserialize_with = "de::nullable")]
    pub is_gift: bool,
    pub user: Option<User>,
    pub channel: Option<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscribers {
    #[serde(rename = "_total", deserialize_with = "de::nullable")]
    pub total: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub subscriptions: Vec<Subscription>,
}

/// Query for GET /kraken/channels/:id/videos.
#[derive(Debug, Clone, Default)]
pub struct ListChannelVideos {
    pub channel_id: u64,
    pub limit: u32,
    pub offset: u32,
    /// Any of `archive`, `highlight`, `upload`; sent comma-separated.
    pub broadcast_types: Vec<String>,
    /// Comma-separated language codes.
    pub language: String,
    /// `time` or `views`.
    pub sort: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoList {
    #[serde(rename = "_total", deserialize_with = "de::nullable")]
    pub total: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub videos: Vec<Video>,
}

/// Result of POST /kraken/channels/:id/commercial. The API capitalizes
/// these keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commercial {
    #[serde(rename = "Length", deserialize_with = "de::nullable")]
    pub length: u64,
    #[serde(rename = "Message", deserialize_with = "de::nullable")]
    pub message: String,
    #[serde(rename = "RetryAfter", deserialize_with = "de::nullable")]
    pub retry_after: u64,
}

// ---------------------------------------------------------------------------
// Videos and upload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    #[serde(deserialize_with = "de::nullable")]
    pub small: String,
    #[serde(deserialize_with = "de::nullable")]
    pub medium: String,
    #[serde(deserialize_with = "de::nullable")]
    pub large: String,
    #[serde(deserialize_with = "de::nullable")]
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(deserialize_with = "de::nullable")]
    pub url: String,
    #[serde(rename = "type", deserialize_with = "de::nullable")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    #[serde(deserialize_with = "de::nullable")]
    pub small: Vec<Thumbnail>,
    #[serde(deserialize_with = "de::nullable")]
    pub medium: Vec<Thumbnail>,
    #[serde(deserialize_with = "de::nullable")]
    pub large: Vec<Thumbnail>,
    #[serde(deserialize_with = "de::nullable")]
    pub template: Vec<Thumbnail>,
}

/// Video metadata. `fps` and `resolutions` are keyed by quality name
/// (`chunked`, `720p60`, ...); both are empty until transcoding finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(rename = "_id", deserialize_with = "de::id")]
    pub id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "de::id")]
    pub broadcast_id: String,
    #[serde(deserialize_with = "de::nullable")]
    pub broadcast_type: String,
    #[serde(deserialize_with = "de::nullable")]
    pub status: String,
    #[serde(deserialize_with = "de::nullable")]
    pub tag_list: String,
    #[serde(deserialize_with = "de::nullable")]
    pub views: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub url: String,
    #[serde(deserialize_with = "de::nullable")]
    pub language: String,
    pub viewable: Option<String>,
    pub game: Option<String>,
    #[serde(deserialize_with = "de::nullable")]
    pub length: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub preview: Preview,
    #[serde(deserialize_with = "de::nullable")]
    pub thumbnails: Thumbnails,
    #[serde(deserialize_with = "de::nullable")]
    pub paywalled: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub fps: HashMap<String, f64>,
    #[serde(deserialize_with = "de::nullable")]
    pub resolutions: HashMap<String, String>,
    #[serde(deserialize_with = "de::nullable")]
    pub channel: Channel,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Body for POST /kraken/videos.
#[derive(Debug, Clone, Default)]
pub struct NewVideo {
    pub channel_name: String,
    pub title: String,
}

/// Where and with which token the parts of a new video are uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Upload {
    #[serde(deserialize_with = "de::nullable")]
    pub url: String,
    #[serde(deserialize_with = "de::nullable")]
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedVideo {
    #[serde(deserialize_with = "de::nullable")]
    pub upload: Upload,
    #[serde(deserialize_with = "de::nullable")]
    pub video: Video,
}

/// One part of a video upload. Parts are numbered from 1.
#[derive(Debug, Clone, Default)]
pub struct VideoPart {
    pub video_id: String,
    pub token: String,
    pub part: u32,
    pub body: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_tolerates_nulls_and_string_id() {
        let body = r#"{
            "mature": true,
            "status": "Struggle Bus 5: The Fight to Stay Alive",
            "broadcaster_language": "en",
            "display_name": "dallas",
            "game": "Nioh",
            "language": "en",
            "_id": "1234",
            "name": "dallas",
            "created_at": "2013-06-03T19:12:02Z",
            "updated_at": "2017-04-24T10:03:34Z",
            "partner": false,
            "profile_banner": null,
            "profile_banner_background_color": null,
            "views": 2000,
            "followers": 79,
            "broadcaster_type": "affiliate"
        }"#;

        let channel: Channel = serde_json::from_str(body).unwrap();
        assert_eq!(channel.id, "1234");
        assert_eq!(channel.name, "dallas");
        assert_eq!(channel.game.as_deref(), Some("Nioh"));
        assert_eq!(channel.profile_banner, None);
        assert_eq!(channel.followers, 79);
        assert_eq!(
            channel.created_at.map(|t| t.to_rfc3339()),
            Some("2013-06-03T19:12:02+00:00".to_string())
        );
    }

    #[test]
    fn feed_post_decodes_reactions_and_emotes() {
        let body = r#"{
            "id": "20",
            "created_at": "2016-01-29T21:07:23.075611Z",
            "deleted": false,
            "emotes": [{"start": 0, "end": 4, "id": 25, "set": 0}],
            "reactions": {"endorse": {"count": 2, "user_ids": [104447238, "1"]}},
            "body": "Kappa post",
            "user": {"_id": 104447238, "name": "bangbangalang", "type": "user"}
        }"#;

        let post: FeedPost = serde_json::from_str(body).unwrap();
        assert_eq!(post.emotes[0].id, "25");
        assert_eq!(post.emotes[0].end, 4);
        let endorse = &post.reactions["endorse"];
        assert_eq!(endorse.count, 2);
        assert_eq!(endorse.user_ids, vec!["104447238".to_string(), "1".to_string()]);
        assert_eq!(post.user.id, "104447238");
    }

    #[test]
    fn video_decodes_sparse_channel_and_null_fields() {
        let body = r#"{
            "_id": "v123456",
            "title": "Test Title",
            "description": null,
            "broadcast_id": 1,
            "broadcast_type": "upload",
            "game": null,
            "thumbnails": {"small": [], "medium": [], "large": [], "template": []},
            "fps": {},
            "resolutions": {},
            "channel": {"name": "ollieparsleydev", "display_name": "ollieparsleydev"}
        }"#;

        let video: Video = serde_json::from_str(body).unwrap();
        assert_eq!(video.id, "v123456");
        assert_eq!(video.broadcast_id, "1");
        assert_eq!(video.description, None);
        assert_eq!(video.game, None);
        assert_eq!(video.channel.name, "ollieparsleydev");
        assert!(video.channel.id.is_empty());
    }

    #[test]
    fn explicit_nulls_decode_to_defaults() {
        let channel: Channel = serde_json::from_str(
            r#"{"_id":1,"name":"x","display_name":null,"mature":null,"broadcaster_type":null,
                "language":null,"partner":null,"url":null,"views":null,"followers":null}"#,
        )
        .unwrap();
        assert_eq!(channel.id, "1");
        assert_eq!(channel.name, "x");
        assert!(channel.language.is_empty());
        assert!(channel.url.is_empty());
        assert_eq!(channel.views, 0);
        assert!(!channel.partner);

        let video: Video = serde_json::from_str(
            r#"{"_id":"v1","title":null,"status":null,"tag_list":null,"url":null,
                "language":null,"views":null,"length":null,"preview":null,
                "thumbnails":null,"paywalled":null,"channel":null}"#,
        )
        .unwrap();
        assert_eq!(video.id, "v1");
        assert!(video.status.is_empty());
        assert!(video.tag_list.is_empty());
        assert_eq!(video.length, 0);
        assert_eq!(video.preview, Preview::default());
        assert_eq!(video.channel, Channel::default());

        let user: User =
            serde_json::from_str(r#"{"_id":null,"name":null,"display_name":null,"type":null}"#)
                .unwrap();
        assert_eq!(user, User::default());
    }

    #[test]
    fn commercial_uses_capitalized_keys() {
        let c: Commercial =
            serde_json::from_str(r#"{"Length":30,"Message":"","RetryAfter":480}"#).unwrap();
        assert_eq!(c.length, 30);
        assert_eq!(c.retry_after, 480);
    }

    #[test]
    fn empty_accepts_any_object() {
        let _: Empty = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        let _: Empty = serde_json::from_str("{}").unwrap();
    }
}
