use genmix::AlignmentPolicy;
use genmix_demos::common::builder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    for policy in [
        AlignmentPolicy::ByTimestamp,
        AlignmentPolicy::Strict,
        AlignmentPolicy::Shortest,
    ] {
        let genmix = builder().alignment(policy).build()?;
        match genmix.recent_past_total().await {
            Ok(past) => {
                let energy: f64 = past.iter().map(|s| s.value).sum();
                println!(
                    "{policy:?}: {} hours, {:.1} GWh",
                    past.len(),
                    energy / 1_000.0
                );
            }
            Err(e) => println!("{policy:?}: rejected ({e})"),
        }
    }
    Ok(())
}
