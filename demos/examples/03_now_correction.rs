use genmix::NowCorrection;
use genmix_demos::common::builder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Hold the boundary back to account for publication lag, then align it to
    // the full hour.
    let corrections = [
        ("none", NowCorrection::NONE),
        ("-2h", NowCorrection::offset(-2 * 3600)),
        ("-90m, hourly", NowCorrection::offset(-90 * 60).floored_to(3600)),
    ];

    for (label, correction) in corrections {
        let genmix = builder().now_correction(correction).build()?;
        let past = genmix.recent_past_total().await?;
        let future = genmix.future_forecast().await?;
        println!(
            "{label:>14}: past ends {}, forecast starts {}",
            past.last().map_or_else(|| "-".to_string(), |s| s.ts.to_rfc3339()),
            future
                .first()
                .map_or_else(|| "-".to_string(), |s| s.ts.to_rfc3339()),
        );
    }
    Ok(())
}
