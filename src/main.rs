use std::io::{self, BufRead, Write};

use anyhow::Result;
use vreme_core::Config;
use vreme_weather::SearchService;

mod render;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    vreme_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    let mut service = SearchService::new(&config)?;

    tracing::info!("vreme started");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        interactive(&mut service).await
    } else {
        search_and_print(&mut service, &args.join(" ")).await;
        Ok(())
    }
}

async fn search_and_print(service: &mut SearchService, query: &str) {
    match service.search(query).await {
        Ok(report) => println!("{}", render::render_report(&report)),
        // Failed searches are user-facing results, not process failures.
        Err(err) => println!("{}", render::render_error(&err)),
    }
}

/// Read place names from stdin until a blank line or EOF.
async fn interactive(service: &mut SearchService) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("Place: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        search_and_print(service, query).await;
    }
    Ok(())
}
