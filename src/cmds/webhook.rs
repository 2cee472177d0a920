use clap::Args;

#[derive(Args, Debug)]
pub struct WebhookArgs {
    /// Webhook URL; falls back to the WEBHOOK_URL environment variable
    #[arg(long)]
    pub url: Option<String>,

    /// Message content to post
    #[arg(long, default_value = "Hello, this is a test message!")]
    pub content: String,
}

#[derive(serde::Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Post one message to a webhook and report the outcome. No retries.
pub async fn send(args: WebhookArgs) {
    let url = match args.url.or_else(|| std::env::var("WEBHOOK_URL").ok()) {
        Some(url) => url,
        None => {
            eprintln!("No webhook URL given (use --url or set WEBHOOK_URL)");
            std::process::exit(1);
        }
    };

    let payload = WebhookPayload {
        content: &args.content,
    };

    let response = match reqwest::Client::new().post(&url).json(&payload).send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Failed to send webhook: {}", e);
            std::process::exit(1);
        }
    };

    if response.status() == reqwest::StatusCode::NO_CONTENT {
        println!("Webhook sent successfully.");
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        println!("Failed to send webhook. Status code: {}", status);
        println!("Response: {}", body);
    }
}
