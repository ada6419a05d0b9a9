use kraken_client::{ClientConfig, Credentials, KrakenClient};
use wiremock::MockServer;

/// Client pointed at `server`: API under `/kraken/`, uploads at the root.
pub fn client_for(server: &MockServer) -> KrakenClient {
    let config = ClientConfig::new(Credentials::new("client-id", "access-token"))
        .with_api_url(&format!("{}/kraken", server.uri()))
        .with_upload_url(&server.uri());
    KrakenClient::with_config(config, reqwest::Client::new())
}

#[allow(dead_code)]
pub const CHANNEL_JSON: &str = r#"{"mature":true,"status":"Struggle Bus 5: The Fight to Stay Alive","broadcaster_language":"en","display_name":"dallas","game":"Nioh","language":"en","_id":"1234","name":"dallas","created_at":"2013-06-03T19:12:02Z","updated_at":"2017-04-24T10:03:34Z","partner":false,"logo":"https://static-cdn.jtvnw.net/jtv_user_pictures/dallas-profile_image-1a2c906ee2c35f12-300x300.png","video_banner":"https://static-cdn.jtvnw.net/jtv_user_pictures/dallas-channel_offline_image-2e82c1df2a464df7-1920x1080.jpeg","profile_banner":null,"profile_banner_background_color":null,"url":"https://www.twitch.tv/dallas","views":2000,"followers":79,"broadcaster_type":"affiliate","stream_key":"live_44322889_a34ub37c8ajv98a0","email":"email@provider.com"}"#;
