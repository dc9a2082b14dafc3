//! Follow a Siren entry point and list what the entity offers.
//!
//! Run with: cargo run --example follow_entry -- <url>

use siren_rs::{Search, SirenClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let href = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080/api".to_string());

    let client = SirenClient::new();

    println!("Following {href}...\n");

    match client.follow(href.as_str()).await {
        Ok(fetched) => {
            println!("Resolved URL: {}", fetched.href);
            println!("Title: {}", fetched.entity.title());
            println!("Classes: {:?}", fetched.entity.class());

            for link in fetched.entity.links(Search::Any) {
                println!("link {:?} -> {}", link.rel, link.href);
            }

            for action in fetched.entity.actions(Search::Any) {
                println!(
                    "action {} ({} {})",
                    action.name,
                    action.request_method(),
                    action.href
                );
            }
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
