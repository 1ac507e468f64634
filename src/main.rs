use bittrex::core::config::Credentials;
use bittrex::exchanges::bittrex::BittrexBuilder;
use bittrex::{AccountInfo, MarketDataSource, TickInterval};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut builder = BittrexBuilder::new().with_timeout(10);

    // Private endpoints are only exercised when BITTREX_API_KEY/BITTREX_API_SECRET are set
    let credentials = Credentials::from_env("BITTREX").ok();
    if let Some(credentials) = credentials.clone() {
        builder = builder.with_credentials(credentials);
    }
    let bittrex = builder.build()?;

    println!("Fetching market summaries...");
    match bittrex.get_market_summaries().await {
        Ok(summaries) => {
            let count = summaries.as_array().map_or(0, Vec::len);
            println!("Found {} market summaries", count);
        }
        Err(e) => println!("Error fetching market summaries: {}", e),
    }

    match bittrex.get_latest_tick("BTC-LTC", TickInterval::Hour).await {
        Ok(tick) => println!("Latest BTC-LTC tick: {}", tick),
        Err(e) => println!("Error fetching latest tick: {}", e),
    }

    if credentials.is_some() {
        match bittrex.get_balances().await {
            Ok(balances) => {
                for balance in balances.iter().filter(|b| !b.balance.is_zero()) {
                    println!(
                        "{}: {} (available {})",
                        balance.currency, balance.balance, balance.available
                    );
                }
            }
            Err(e) => println!("Error fetching balances: {}", e),
        }
    }

    Ok(())
}
