//! `kraken`: command-line access to the Twitch kraken API.
//!
//! Reads credentials from `KRAKEN_*` environment variables (or `.env`) and
//! prints each response as pretty JSON.

mod config;

use anyhow::{Context, bail};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use kraken_client::KrakenClient;
use kraken_client::api::{ListBlocks, ListFeedPosts, NewVideo, VideoPart};

use crate::config::CliConfig;

/// Upload part size. The upload host rejects parts under 5 MiB except the last.
const PART_SIZE: usize = 10 * 1024 * 1024;

const USAGE: &str = "usage: kraken <command>

commands:
  root                                  show the token behind KRAKEN_ACCESS_TOKEN
  channel [id]                          show your channel, or channel <id>
  blocks <user_id>                      list a user's blocked users
  feed <channel_id>                     list a channel's feed posts
  upload <channel_name> <title> <file>  upload a video file";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Root,
    Channel(Option<u64>),
    Blocks(u64),
    Feed(u64),
    Upload {
        channel_name: String,
        title: String,
        file: String,
    },
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let cmd = match args.as_slice() {
            ["root"] => Self::Root,
            ["channel"] => Self::Channel(None),
            ["channel", id] => Self::Channel(Some(parse_id(id)?)),
            ["blocks", user_id] => Self::Blocks(parse_id(user_id)?),
            ["feed", channel_id] => Self::Feed(parse_id(channel_id)?),
            ["upload", channel_name, title, file] => Self::Upload {
                channel_name: channel_name.to_string(),
                title: title.to_string(),
                file: file.to_string(),
            },
            _ => bail!("{USAGE}"),
        };
        Ok(cmd)
    }
}

fn parse_id(s: &str) -> anyhow::Result<u64> {
    s.parse().with_context(|| format!("invalid id: {s}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = CliConfig::load()?;
    let client = KrakenClient::with_config(config.client_config(), reqwest::Client::new());

    match command {
        Command::Root => print_json(&client.get_root().await?),
        Command::Channel(None) => print_json(&client.get_channel().await?),
        Command::Channel(Some(id)) => print_json(&client.get_channel_by_id(id).await?),
        Command::Blocks(user_id) => {
            let input = ListBlocks {
                user_id,
                ..ListBlocks::default()
            };
            print_json(&client.list_blocks(&input).await?)
        }
        Command::Feed(channel_id) => {
            let input = ListFeedPosts {
                channel_id,
                ..ListFeedPosts::default()
            };
            print_json(&client.list_channel_feed_posts(&input).await?)
        }
        Command::Upload {
            channel_name,
            title,
            file,
        } => upload(&client, channel_name, title, &file).await,
    }
}

async fn upload(
    client: &KrakenClient,
    channel_name: String,
    title: String,
    file: &str,
) -> anyhow::Result<()> {
    let data = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {file}"))?;

    let created = client
        .create_video(&NewVideo {
            channel_name,
            title,
        })
        .await?;
    let video_id = created.video.id.clone();
    let token = created.upload.token.clone();
    tracing::info!(video_id = %video_id, bytes = data.len(), "Created video");

    for (index, chunk) in data.chunks(PART_SIZE).enumerate() {
        let part = u32::try_from(index + 1).context("too many upload parts")?;
        client
            .upload_video_part(VideoPart {
                video_id: video_id.clone(),
                token: token.clone(),
                part,
                body: chunk.to_vec(),
            })
            .await?;
        tracing::info!(part, "Uploaded part");
    }

    client.complete_video(&video_id, &token).await?;
    tracing::info!(video_id = %video_id, "Upload complete");

    print_json(&created.video)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(Command::parse(&args(&["root"])).unwrap(), Command::Root);
        assert_eq!(
            Command::parse(&args(&["channel"])).unwrap(),
            Command::Channel(None)
        );
        assert_eq!(
            Command::parse(&args(&["channel", "1234"])).unwrap(),
            Command::Channel(Some(1234))
        );
        assert_eq!(
            Command::parse(&args(&["feed", "12345"])).unwrap(),
            Command::Feed(12345)
        );
        assert_eq!(
            Command::parse(&args(&["upload", "dallas", "My video", "a.mp4"])).unwrap(),
            Command::Upload {
                channel_name: "dallas".into(),
                title: "My video".into(),
                file: "a.mp4".into(),
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse(&args(&[])).is_err());
        assert!(Command::parse(&args(&["blocks"])).is_err());
        let err = Command::parse(&args(&["blocks", "abc"])).unwrap_err();
        assert!(err.to_string().contains("invalid id: abc"));
    }
}
