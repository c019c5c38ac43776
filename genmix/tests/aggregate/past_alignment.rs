use genmix::{AlignmentPolicy, GenMix, GenMixError, SeriesId};
use genmix_mock::MockBehavior;

use crate::helpers::{builder, h, pairs, payload, scripted};

// Biomass publishes one hour more than hydropower; the hydropower hours are
// also shifted relative to the biomass positions.
async fn ragged(policy: AlignmentPolicy) -> GenMix {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(payload(&[
                (h(-3), Some(1.0)),
                (h(-2), Some(1.0)),
                (h(-1), Some(1.0)),
            ])),
        )
        .await;
    controller
        .set_series_behavior(
            SeriesId::Hydropower,
            MockBehavior::Return(payload(&[(h(-2), Some(10.0)), (h(-1), Some(10.0))])),
        )
        .await;
    builder(source)
        .generation_sources(&[SeriesId::Biomass, SeriesId::Hydropower])
        .alignment(policy)
        .build()
        .unwrap()
}

#[tokio::test]
async fn by_timestamp_merges_ragged_series() {
    let out = ragged(AlignmentPolicy::ByTimestamp)
        .await
        .recent_past_total()
        .await
        .unwrap();
    assert_eq!(
        pairs(&out),
        vec![(h(-3), 1.0), (h(-2), 11.0), (h(-1), 11.0)]
    );
}

#[tokio::test]
async fn strict_rejects_length_mismatch() {
    let err = ragged(AlignmentPolicy::Strict)
        .await
        .recent_past_total()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        GenMixError::Misaligned {
            series: SeriesId::Hydropower,
            expected: 3,
            actual: 2,
        }
    );
}

#[tokio::test]
async fn shortest_truncates_and_uses_first_timestamps() {
    let out = ragged(AlignmentPolicy::Shortest)
        .await
        .recent_past_total()
        .await
        .unwrap();
    // Positional: biomass[0..2] + hydropower[0..2], stamped with biomass times.
    assert_eq!(pairs(&out), vec![(h(-3), 11.0), (h(-2), 11.0)]);
}

#[tokio::test]
async fn strict_rejects_timestamp_mismatch() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(payload(&[(h(-2), Some(1.0)), (h(-1), Some(1.0))])),
        )
        .await;
    controller
        .set_series_behavior(
            SeriesId::Hydropower,
            MockBehavior::Return(payload(&[(h(-2), Some(1.0)), (h(0), Some(1.0))])),
        )
        .await;
    let genmix = builder(source)
        .generation_sources(&[SeriesId::Biomass, SeriesId::Hydropower])
        .alignment(AlignmentPolicy::Strict)
        .build()
        .unwrap();

    let err = genmix.recent_past_total().await.unwrap_err();
    assert_eq!(
        err,
        GenMixError::TimestampMismatch {
            series: SeriesId::Hydropower,
            position: 1,
        }
    );
}

#[tokio::test]
async fn strict_accepts_aligned_series() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    for id in [SeriesId::Biomass, SeriesId::Hydropower] {
        controller
            .set_series_behavior(
                id,
                MockBehavior::Return(payload(&[(h(-1), Some(2.0)), (h(0), None)])),
            )
            .await;
    }
    let genmix = builder(source)
        .generation_sources(&[SeriesId::Biomass, SeriesId::Hydropower])
        .alignment(AlignmentPolicy::Strict)
        .build()
        .unwrap();

    let out = genmix.recent_past_total().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(-1), 4.0), (h(0), 0.0)]);
}
