//! Print ticker, top of book, and the latest funding rate for one market
//!
//! Run with: cargo run --example market_snapshot -- ETH

use coinex_rest::{CoinExRestClient, KlinePeriod, Market, MarketType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base = std::env::args().nth(1).unwrap_or_else(|| "BTC".to_string());
    let market = Market::new(base, Market::DEFAULT_QUOTE)?;
    let client = CoinExRestClient::new()?;

    let ticker = client.get_tickers(Some(&market), MarketType::Spot).await?;
    if let Some(entry) = ticker.data_array().and_then(|d| d.first()) {
        println!("{market} last={} volume={}", entry["last"], entry["volume"]);
    } else {
        println!("ticker: code={} message={}", ticker.code, ticker.message);
    }

    let depth = client.get_depth(&market, MarketType::Spot, 5, "0").await?;
    if let Some(book) = depth.data.as_ref().map(|d| &d["depth"]) {
        println!("best ask={} best bid={}", book["asks"][0], book["bids"][0]);
    }

    let candles = client
        .get_kline(&market, MarketType::Spot, KlinePeriod::D1, 7)
        .await?;
    println!(
        "daily candles: {}",
        candles.data_array().map(Vec::len).unwrap_or_default()
    );

    let funding = client.get_funding_rate(&market).await?;
    println!("funding: code={} data={:?}", funding.code, funding.data);

    Ok(())
}
