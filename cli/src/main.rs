use clap::{Parser, Subcommand};
use serde_json::json;
use wire::{ChatError, ChatReply, ChatRequest, FailureDetail};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("{}", .0.user_message())]
    Chat(#[from] ChatError),
    #[error("{}", wire::NO_RESPONSE_MESSAGE)]
    NoResponse,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(name = "newsdesk-cli", about = "Ask the news context agent from the terminal")]
struct Cli {
    #[arg(long, env = "NEWSDESK_CHAT_ENDPOINT", default_value = wire::DEFAULT_CHAT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one query and print the answer.
    Ask {
        /// Print the result entry as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Check that the backend root answers.
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder().build()?;

    match cli.command {
        Command::Ask { json, query } => {
            let query = join_query(&query)?;
            let reply = ask(&client, &cli.endpoint, &query).await?;
            println!("{}", render_reply(&reply, json)?);
            Ok(())
        }
        Command::Ping => {
            let body = ping(&client, &cli.endpoint).await?;
            println!("{}", body.trim());
            Ok(())
        }
    }
}

/// Join positional words into one query, rejecting blank input.
fn join_query(words: &[String]) -> Result<String, CliError> {
    let query = words.join(" ");
    if query.trim().is_empty() {
        return Err(CliError::EmptyQuery);
    }
    Ok(query)
}

/// Root URL of the backend that serves `endpoint`.
fn backend_root(endpoint: &str) -> Result<String, CliError> {
    let mut url = reqwest::Url::parse(endpoint).map_err(|e| CliError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.to_string())
}

async fn ask(client: &reqwest::Client, endpoint: &str, query: &str) -> Result<ChatReply, ChatError> {
    let response = client
        .post(endpoint)
        .json(&ChatRequest::new(query))
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| ChatError::Decode(e.to_string()))?;
    wire::decode_reply(status, &body)
}

async fn ping(client: &reqwest::Client, endpoint: &str) -> Result<String, CliError> {
    let url = backend_root(endpoint)?;
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| ChatError::Decode(e.to_string()))?;
    if !wire::is_success(status) {
        return Err(ChatError::Api { status, detail: FailureDetail::parse(&body) }.into());
    }
    Ok(body)
}

/// Answer text, or the `{text, type}` result entry as pretty JSON.
fn render_reply(reply: &ChatReply, as_json: bool) -> Result<String, CliError> {
    let text = reply.text().ok_or(CliError::NoResponse)?;
    if as_json {
        return Ok(serde_json::to_string_pretty(&json!({ "text": text, "type": "response" }))?);
    }
    Ok(text)
}
