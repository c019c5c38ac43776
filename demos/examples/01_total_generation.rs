use genmix_demos::common::{anchor, builder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let genmix = builder().build()?;
    let now = anchor();

    let total = genmix.total_generation().await?;
    println!("{:<26} {:>10}  kind", "timestamp", "MW");
    for s in &total {
        let kind = if s.ts <= now { "measured" } else { "forecast" };
        println!("{:<26} {:>10.0}  {kind}", s.ts.to_rfc3339(), s.value);
    }

    let measured = total.iter().filter(|s| s.ts <= now).count();
    println!(
        "{measured} measured hours, {} forecast hours",
        total.len() - measured
    );
    Ok(())
}
