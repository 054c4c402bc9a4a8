//! Send one email through Postmark.
//!
//! ```text
//! POSTMARK_SERVER_TOKEN=... cargo run --example send -- sender@example.com receiver@example.com
//! ```

use postmark_client::{Client, Error, OutgoingEmail, TrackLinks};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let token = std::env::var("POSTMARK_SERVER_TOKEN")
        .unwrap_or_else(|_| "POSTMARK_API_TEST".to_string());
    let mut args = std::env::args().skip(1);
    let from = args.next().unwrap_or_else(|| "sender@example.com".to_string());
    let to = args.next().unwrap_or_else(|| "receiver@example.com".to_string());

    let client = Client::builder(token)
        .timeout(Duration::from_secs(30))
        .build()?;

    let email = OutgoingEmail::single(from, to, "Hello from postmark-client", "It works.")
        .with_html_body("<p>It <strong>works</strong>.</p>")
        .with_track_links(TrackLinks::HtmlOnly);

    match client.send(&email).await {
        Ok(sent) => println!(
            "Sent {:?} to {:?} at {:?}",
            sent.message_id, sent.to, sent.submitted_at
        ),
        Err(Error::Postmark { code, message }) => {
            eprintln!("Postmark rejected the email: {message} ({code:?})");
        }
        Err(err) => return Err(err),
    }
    Ok(())
}
