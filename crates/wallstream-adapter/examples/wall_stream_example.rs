/*
[INPUT]:  Graph credentials and a wall identifier from the environment
[OUTPUT]: Keyed post pages printed for three navigation steps
[POS]:    Examples - fetch/next/previous walkthrough
[UPDATE]: When the wall-stream flow changes
*/

use wallstream_adapter::*;

/// Example: walk a page's wall forward and backward
///
/// Reads GRAPH_API_KEY, GRAPH_APP_SECRET and GRAPH_ACCESS_TOKEN from the
/// environment; WALL_ID is optional and defaults to "ubisoft.de".
#[tokio::main]
async fn main() {
    println!("=== Wall Stream Example ===\n");

    let Some((api_key, app_secret, access_token)) = read_credentials() else {
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
    println!("✓ Wall stream client created\n");

    println!("Fetching wall for {}...", wall_id);
    let page = stream.fetch_wall(&wall_id, 1).await;
    print_page("first", &page);

    match stream.next().await {
        Ok(page) => print_page("next", &page),
        Err(e) => println!("✗ Error: {}", e),
    }

    match stream.previous().await {
        Ok(page) => print_page("previous", &page),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Wall stream example complete");
}

fn read_credentials() -> Option<(String, String, String)> {
    let api_key = std::env::var("GRAPH_API_KEY").ok()?;
    let app_secret = std::env::var("GRAPH_APP_SECRET").ok()?;
    let access_token = std::env::var("GRAPH_ACCESS_TOKEN").ok()?;
    Some((api_key, app_secret, access_token))
}

fn print_page(label: &str, page: &PostPage) {
    println!("✓ {} page: {} post(s)", label, page.len());
    for (id, post) in page.iter() {
        println!("  [{}] {}", id, post.message().unwrap_or("<no message>"));
    }
}
