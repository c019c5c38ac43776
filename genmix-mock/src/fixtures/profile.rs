use chrono::{DateTime, Timelike, Utc};
use genmix_core::SeriesId;

/// Deterministic hourly generation profile (MW) for a measured category.
///
/// Other-renewable reports nothing at 03:00 so fixtures exercise absent values.
pub fn measured(id: SeriesId, ts: DateTime<Utc>) -> Option<f64> {
    let h = i64::from(ts.hour());
    let v = match id {
        SeriesId::Biomass => 4_400,
        SeriesId::Hydropower => 1_700,
        SeriesId::WindOffshore => 2_500 + (h % 6) * 100,
        SeriesId::WindOnshore => 9_000 + ((h * 37) % 11) * 400,
        SeriesId::Photovoltaic => {
            let d = (h - 13).abs();
            if d < 7 { (7 - d) * 5_000 } else { 0 }
        }
        SeriesId::OtherRenewable => {
            if h == 3 {
                return None;
            }
            160
        }
        SeriesId::Nuclear => 0,
        SeriesId::BrownCoal => 9_500,
        SeriesId::HardCoal => 3_800,
        SeriesId::NaturalGas => 6_200 + h * 50,
        SeriesId::PumpStorage => {
            if (7..=9).contains(&h) || (18..=21).contains(&h) {
                900
            } else {
                0
            }
        }
        SeriesId::OtherConventional => 1_100,
        _ => return forecast(ts),
    };
    Some(v as f64)
}

/// Forecast of total generation: the sum of all measured profiles plus a fixed margin.
pub fn forecast(ts: DateTime<Utc>) -> Option<f64> {
    let total: f64 = SeriesId::GENERATION
        .into_iter()
        .filter_map(|id| measured(id, ts))
        .sum();
    Some(total + 500.0)
}
