//! Twitch kraken REST API client.
//!
//! All endpoints share one request pipeline (see `request.rs`): OAuth +
//! Client-ID + versioned `Accept` header injection, GET parameters in the
//! query string, form bodies for mutating verbs, and a single response
//! decoder that maps statuses onto a typed value or an [`ApiError`].

mod blocks;
mod channels;
mod de;
mod feed;
mod params;
mod request;
mod root;
mod upload;

pub mod models;

pub use models::{
    Block, BlockList, Channel, Commercial, CreatedFeedPost, CreatedVideo, Editors, Empty,
    FeedEmote, FeedPost, FeedPostList, FeedReaction, Follow, Followers, ListBlocks,
    ListChannelVideos, ListFeedPosts, ListFollowers, ListSubscribers, NewFeedPost, NewVideo,
    Preview, Reaction, Root, RootAuthorization, RootToken, Subscribers, Subscription, Team, Teams,
    Thumbnail, Thumbnails, UpdateChannel, Upload, User, Video, VideoList, VideoPart,
};
pub use params::Params;

use crate::{ApiError, ClientConfig};

/// Kraken API client with automatic auth and version header injection.
///
/// Cheap to clone; clones share the caller-supplied connection pool.
#[derive(Debug, Clone)]
pub struct KrakenClient {
    pub(super) http: reqwest::Client,
    pub(super) config: ClientConfig,
}
