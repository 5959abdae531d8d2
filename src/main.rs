use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;

use fcpo_tracker::config::MARKET;
use fcpo_tracker::{CachedProvider, Cli, DashboardEngine, DemoProvider, MarketDataProvider};

fn main() {
    // A. Init logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Wire the provider (demo feed, cache-backed unless told otherwise)
    let feed: Arc<dyn MarketDataProvider> = Arc::new(DemoProvider::default());
    let provider: Arc<dyn MarketDataProvider> = if args.prefer_fresh {
        feed
    } else {
        Arc::new(CachedProvider::new(feed))
    };

    // D. Load data
    let mut engine = DashboardEngine::new(provider, args.timeframe);
    engine.refresh();
    engine.set_comparison_mode(args.compare);

    let deadline = Instant::now() + Duration::from_secs(30);
    while engine.update() {
        if Instant::now() > deadline {
            log::error!("Timed out waiting for price data");
            std::process::exit(1);
        }
        std::thread::sleep(Duration::from_millis(25));
    }

    // E. Print the dashboard
    let failed = render(&engine, &args);
    if failed {
        std::process::exit(1);
    }
}

/// Print the dashboard state to stdout. Returns true when the load ended in
/// a user-visible error.
fn render(engine: &DashboardEngine, args: &Cli) -> bool {
    println!("{} — {}", MARKET.instrument_label, engine.timeframe());

    if let Some(snapshot) = engine.price_snapshot() {
        println!(
            "Last {:.2} {}  {:+.2} ({:+.2}%)",
            snapshot.price, MARKET.currency, snapshot.change, snapshot.change_percent
        );
    }

    if let Some(error) = engine.last_error() {
        eprintln!("{error}");
        eprintln!("Run again to retry (add --prefer-fresh to bypass the cache).");
        return true;
    }

    let merged = engine.merged_window();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&merged).expect("merged window serializes")
        );
    } else {
        let range = engine.visible_range();
        println!(
            "Showing candles {}..{} of {}",
            range.start_index,
            range.end_index,
            engine.primary_series().len()
        );

        let overlay = engine.comparison_mode();
        println!(
            "{:<18} {:>10} {:>10} {:>10} {:>10} {:>16}",
            "DATE",
            "OPEN",
            "HIGH",
            "LOW",
            "CLOSE",
            if overlay.is_active() {
                overlay.label()
            } else {
                ""
            }
        );
        for row in &merged {
            let overlay_cell = match row.comparison_close {
                Some(close) => format!("{close:.2}"),
                None => "-".to_string(),
            };
            println!(
                "{:<18} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>16}",
                row.date, row.open, row.high, row.low, row.close, overlay_cell
            );
        }
    }

    if !engine.sources().is_empty() {
        println!();
        println!("Sources:");
        for source in engine.sources() {
            println!("  {} <{}>", source.title, source.uri);
        }
    }

    false
}
