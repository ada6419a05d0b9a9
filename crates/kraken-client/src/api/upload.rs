//! Two-stage video upload: create the video record on the API host, then
//! push its parts to the upload host and mark it complete.

use reqwest::Method;

use super::request::path_segment;
use super::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl KrakenClient {
    /// Create a video record and obtain its upload URL and token.
    pub async fn create_video(&self, input: &NewVideo) -> Result<CreatedVideo, ApiError> {
        let params = Params::new()
            .set("channel_name", &input.channel_name)
            .set("title", &input.title);
        self.call(Method::POST, "videos", &params).await
    }

    /// Upload one part of a video created with [`create_video`](Self::create_video).
    pub async fn upload_video_part(&self, input: VideoPart) -> Result<Empty, ApiError> {
        let query = Params::new()
            .set("upload_token", &input.token)
            .set("part", input.part);
        let path = format!("upload/{}", path_segment(upload_id(&input.video_id))?);
        tracing::debug!(part = input.part, bytes = input.body.len(), "Uploading video part");
        self.call_upload(Method::PUT, &path, &query, None, input.body)
            .await
    }

    /// Mark an upload as complete once every part has been sent.
    pub async fn complete_video(&self, video_id: &str, token: &str) -> Result<Empty, ApiError> {
        let query = Params::new().set("upload_token", token);
        let path = format!("upload/{}/complete", path_segment(upload_id(video_id))?);
        self.call_upload(
            Method::POST,
            &path,
            &query,
            Some(FORM_CONTENT_TYPE),
            Vec::new(),
        )
        .await
    }
}

/// The upload host addresses videos without the `v` prefix the API uses.
fn upload_id(video_id: &str) -> &str {
    video_id.strip_prefix('v').unwrap_or(video_id)
}
