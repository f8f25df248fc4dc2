pub fn run() -> anyhow::Result<()> {
    println!("hrdesk {}", env!("CARGO_PKG_VERSION"));
    println!("Session event model for the HR dashboard");
    Ok(())
}
