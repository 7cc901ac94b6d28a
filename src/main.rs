#[tokio::main]
async fn main() {
    if let Err(e) = lnd_balance_report::cli::run().await {
        eprintln!("[lnb] {}", e);
        std::process::exit(1);
    }
}
