//! Basic Anthropic client usage example

use anthropic_client::{AnthropicClient, Message, MessagesRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = AnthropicClient::from_env()?;

    println!("=== Messages ===");
    let response = client
        .messages(
            MessagesRequest::new("claude-3-sonnet-20240229", 100)
                .system("You are a concise assistant.")
                .message(Message::user("What is a stock ticker, in one sentence?"))
                .temperature(0.2),
        )
        .await?;

    println!("Response: {}", response.text());
    if let Some(usage) = response.usage {
        println!("Tokens: {} in / {} out", usage.input_tokens, usage.output_tokens);
    }

    Ok(())
}
