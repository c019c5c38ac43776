use genmix::{GenMixConfig, SeriesId};
use genmix_demos::common::builder;

const CONFIG: &str = r#"{
    "generation_sources": ["wind-onshore", "wind-offshore", "photovoltaic"],
    "anchor": "wind-onshore",
    "forecast": "total-generation-forecast",
    "past_window": { "secs": 43200, "nanos": 0 },
    "now_correction": { "offset_secs": -3600, "floor_secs": 900 },
    "alignment": "strict"
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg: GenMixConfig = serde_json::from_str(CONFIG)?;
    let renewables: Vec<SeriesId> = cfg.generation_sources.clone();

    let genmix = builder().config(cfg).build()?;
    let past = genmix.recent_past_total().await?;

    println!(
        "variable renewables ({}) over the last 12 hours:",
        renewables
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    for s in &past {
        println!("  {} {:>8.0} MW", s.ts.format("%d.%m. %H:%M"), s.value);
    }
    Ok(())
}
