use reqwest::Method;

use super::*;

impl KrakenClient {
    /// Get the API root, which describes the token the client is using.
    pub async fn get_root(&self) -> Result<Root, ApiError> {
        self.call(Method::GET, "", &Params::new()).await
    }
}
