use reqwest::Method;

use super::*;

impl KrakenClient {
    /// Get one page of a user's block list.
    pub async fn list_blocks(&self, input: &ListBlocks) -> Result<BlockList, ApiError> {
        let params = Params::new()
            .set_nonzero("limit", input.limit)
            .set_nonzero("offset", input.offset);
        let path = format!("users/{}/blocks", input.user_id);
        self.call(Method::GET, &path, &params).await
    }

    /// Add `target_user_id` to the block list of `user_id`.
    pub async fn block_user(&self, user_id: u64, target_user_id: u64) -> Result<Block, ApiError> {
        let path = format!("users/{user_id}/blocks/{target_user_id}");
        self.call(Method::PUT, &path, &Params::new()).await
    }

    /// Remove `target_user_id` from the block list of `user_id`.
    pub async fn unblock_user(&self, user_id: u64, target_user_id: u64) -> Result<Empty, ApiError> {
        let path = format!("users/{user_id}/blocks/{target_user_id}");
        self.call(Method::DELETE, &path, &Params::new()).await
    }
}
