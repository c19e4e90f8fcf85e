use sonnet_search::render::render_results;
use sonnet_search::{Document, HighlightMode, SearchMode, Searcher};

fn main() -> anyhow::Result<()> {
    println!("=== Sonnet Search Basic Usage Example ===\n");

    let searcher = Searcher::new(vec![
        Document::new(
            1,
            "Sonnet 1: From fairest creatures",
            vec![
                "From fairest creatures we desire increase,".to_string(),
                "That thereby beauty's rose might never die,".to_string(),
            ],
        ),
        Document::new(
            18,
            "Sonnet 18: Shall I compare thee",
            vec![
                "Shall I compare thee to a summer's day?".to_string(),
                "Thou art more lovely and more temperate:".to_string(),
            ],
        ),
        Document::new(
            130,
            "Sonnet 130: My mistress' eyes",
            vec![
                "I have seen roses damask'd, red and white,".to_string(),
                "But no such roses see I in her cheeks;".to_string(),
            ],
        ),
    ])?;

    let stats = searcher.stats();
    println!(
        "Indexed {} documents, {} distinct stems, {} postings\n",
        stats.total_documents, stats.total_tokens, stats.total_postings
    );

    // Example 1: "roses" and "rose" share a stem
    println!("--- Example 1: OR search for 'rose' ---");
    let results = searcher.search("rose", SearchMode::Or);
    print!("{}", render_results(&results, Some(HighlightMode::Default)));

    // Example 2: every word must match
    println!("\n--- Example 2: AND search for 'rose fairest' ---");
    let results = searcher.search("rose fairest", SearchMode::And);
    print!("{}", render_results(&results, Some(HighlightMode::Green)));

    // Example 3: match counts add up across words
    println!("\n--- Example 3: OR search for 'rose summer' ---");
    for result in searcher.search("rose summer", SearchMode::Or) {
        println!("{}: {} match(es)", result.title, result.matches);
    }

    // Example 4: modes given as strings are validated
    println!("\n--- Example 4: unknown mode ---");
    if let Err(e) = searcher.search_with_mode("rose", "XOR") {
        println!("Error: {}", e);
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
