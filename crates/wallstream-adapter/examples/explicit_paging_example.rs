/*
[INPUT]:  Graph credentials from the environment
[OUTPUT]: Pages fetched through explicit cursor state
[POS]:    Examples - cursor-state navigation without hidden preconditions
[UPDATE]: When the explicit paging API changes
*/

use wallstream_adapter::*;

/// Example: navigate with explicit cursor state
///
/// Instead of relying on the client's remembered cursors, keep the
/// `PageCursors` value from each fetch and ask for a direction explicitly.
#[tokio::main]
async fn main() {
    println!("=== Explicit Paging Example ===\n");

    let (Ok(api_key), Ok(app_secret), Ok(access_token)) = (
        std::env::var("GRAPH_API_KEY"),
        std::env::var("GRAPH_APP_SECRET"),
        std::env::var("GRAPH_ACCESS_TOKEN"),
    ) else {
        eprintln!("Set GRAPH_API_KEY, GRAPH_APP_SECRET and GRAPH_ACCESS_TOKEN first");
        return;
    };
    let wall_id = std::env::var("WALL_ID").unwrap_or_else(|_| "ubisoft.de".to_string());

    let mut stream = match WallStreamClient::new(api_key, app_secret, access_token) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Fetching wall for {}...", wall_id);
    let page = match stream.try_fetch_wall(&wall_id, DEFAULT_WALL_LIMIT).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("✗ Fetch failed: {}", e);
            return;
        }
    };
    println!("✓ First page: {} post(s)", page.len());

    let Some(cursors) = stream.cursors().cloned() else {
        println!("No cursor state; nothing to navigate");
        return;
    };
    println!(
        "  cursors: next={}, previous={}",
        cursors.has_next(),
        cursors.has_previous()
    );

    for direction in [PageDirection::Next, PageDirection::Previous] {
        match stream.try_page(&cursors, direction).await {
            Ok(page) => println!("✓ {} page: {} post(s)", direction, page.len()),
            Err(e) => println!("✗ {} page unavailable: {}", direction, e),
        }
    }

    println!("\n✓ Explicit paging example complete");
}
