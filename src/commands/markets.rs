//! List the supported stat markets.

use crate::cli::types::StatKind;

pub fn handle_markets() {
    println!(
        "{:<14} {:<14} {:<8}",
        "Market", "Name", "Log col"
    );
    for stat in StatKind::ALL {
        println!(
            "{:<14} {:<14} {:<8}",
            stat.market_param(),
            stat,
            stat.log_column()
        );
    }
}
