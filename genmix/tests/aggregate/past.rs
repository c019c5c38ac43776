use genmix::{GenMixError, NowCorrection, SeriesId};
use genmix_mock::MockBehavior;

use crate::helpers::{INDEX, builder, h, pairs, payload, scripted};

const TWO: [SeriesId; 2] = [SeriesId::Biomass, SeriesId::Hydropower];

#[tokio::test]
async fn two_sources_sum_with_absent_value_as_zero() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(payload(&[(h(-2), Some(5.0)), (h(-1), None)])),
        )
        .await;
    controller
        .set_series_behavior(
            SeriesId::Hydropower,
            MockBehavior::Return(payload(&[(h(-2), Some(3.0)), (h(-1), Some(2.0))])),
        )
        .await;

    let genmix = builder(source).generation_sources(&TWO).build().unwrap();
    let out = genmix.recent_past_total().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(-2), 8.0), (h(-1), 2.0)]);
}

#[tokio::test]
async fn every_fetch_uses_the_anchor_index() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    for id in SeriesId::GENERATION {
        controller
            .set_series_behavior(id, MockBehavior::Return(payload(&[(h(0), Some(1.0))])))
            .await;
    }

    let genmix = builder(source).build().unwrap();
    let out = genmix.recent_past_total().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(0), 12.0)]);

    assert_eq!(controller.index_requests().await, vec![SeriesId::Biomass]);
    let requests = controller.series_requests().await;
    assert_eq!(requests.len(), 12);
    assert!(
        requests
            .iter()
            .all(|(_, ts)| *ts == INDEX.timestamp_millis())
    );
}

#[tokio::test]
async fn one_failed_fetch_fails_the_whole_past() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    for id in SeriesId::GENERATION {
        controller
            .set_series_behavior(id, MockBehavior::Return(payload(&[(h(0), Some(1.0))])))
            .await;
    }
    let boom = GenMixError::source("P0", "gas feed unavailable");
    controller
        .set_series_behavior(SeriesId::NaturalGas, MockBehavior::Fail(boom.clone()))
        .await;

    let genmix = builder(source).build().unwrap();
    let err = genmix.recent_past_total().await.unwrap_err();
    assert_eq!(err, boom);
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn empty_anchor_index_is_reported() {
    let (source, controller) = scripted(&[]).await;
    controller
        .set_index_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(genmix::IndexResponse::default()),
        )
        .await;

    let genmix = builder(source).build().unwrap();
    let err = genmix.recent_past_total().await.unwrap_err();
    assert_eq!(err, GenMixError::empty_index(SeriesId::Biomass));
    assert!(controller.series_requests().await.is_empty());
}

#[tokio::test]
async fn custom_anchor_is_queried() {
    let (source, controller) = scripted(&[SeriesId::Nuclear]).await;
    for id in TWO {
        controller
            .set_series_behavior(id, MockBehavior::Return(payload(&[])))
            .await;
    }

    let genmix = builder(source)
        .generation_sources(&TWO)
        .anchor(SeriesId::Nuclear)
        .build()
        .unwrap();
    assert!(genmix.recent_past_total().await.unwrap().is_empty());
    assert_eq!(controller.index_requests().await, vec![SeriesId::Nuclear]);
}

#[tokio::test]
async fn window_is_half_open_over_the_last_day() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(payload(&[
                (h(-25), Some(1.0)),
                (h(-24), Some(2.0)),
                (h(-23), Some(3.0)),
                (h(0), Some(4.0)),
                (h(1), Some(5.0)),
            ])),
        )
        .await;

    let genmix = builder(source)
        .generation_sources(&[SeriesId::Biomass])
        .build()
        .unwrap();
    let out = genmix.recent_past_total().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(-23), 3.0), (h(0), 4.0)]);
}

#[tokio::test]
async fn corrected_now_bounds_the_past() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(payload(&[
                (h(-23), Some(1.0)),
                (h(-1), Some(2.0)),
                (h(0), Some(3.0)),
            ])),
        )
        .await;

    // One hour of publication lag: the lower bound still follows the raw clock.
    let genmix = builder(source)
        .generation_sources(&[SeriesId::Biomass])
        .now_correction(NowCorrection::offset(-3600))
        .build()
        .unwrap();
    let out = genmix.recent_past_total().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(-23), 1.0), (h(-1), 2.0)]);
}

#[tokio::test]
async fn untagged_errors_are_tagged_with_the_source_name() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Fail(GenMixError::Other("socket closed".into())),
        )
        .await;

    let genmix = builder(source)
        .generation_sources(&[SeriesId::Biomass])
        .build()
        .unwrap();
    let err = genmix.recent_past_total().await.unwrap_err();
    match err {
        GenMixError::Source { source_name, msg } => {
            assert_eq!(source_name, "P0");
            assert!(msg.contains("socket closed"), "msg: {msg}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn out_of_range_timestamp_is_a_data_error() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    controller
        .set_series_behavior(
            SeriesId::Biomass,
            MockBehavior::Return(genmix::SeriesResponse {
                series: vec![(i64::MAX, Some(1.0))],
            }),
        )
        .await;

    let genmix = builder(source)
        .generation_sources(&[SeriesId::Biomass])
        .build()
        .unwrap();
    let err = genmix.recent_past_total().await.unwrap_err();
    assert!(matches!(err, GenMixError::Data(_)), "got {err:?}");
}

#[tokio::test(start_paused = true)]
async fn category_fetches_run_concurrently() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    let delay = std::time::Duration::from_millis(500);
    for id in SeriesId::GENERATION {
        controller
            .set_series_behavior(
                id,
                MockBehavior::Delay(delay, payload(&[(h(0), Some(1.0))])),
            )
            .await;
    }

    let genmix = builder(source).build().unwrap();
    let started = tokio::time::Instant::now();
    let out = genmix.recent_past_total().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(0), 12.0)]);
    assert!(started.elapsed() < delay * 2, "took {:?}", started.elapsed());
}

#[tokio::test]
async fn failed_category_does_not_wait_for_a_stalled_one() {
    let (source, controller) = scripted(&[SeriesId::Biomass]).await;
    for id in SeriesId::GENERATION {
        controller
            .set_series_behavior(id, MockBehavior::Return(payload(&[(h(0), Some(1.0))])))
            .await;
    }
    controller
        .set_series_behavior(SeriesId::Biomass, MockBehavior::Hang)
        .await;
    let boom = GenMixError::source("P0", "pump storage unavailable");
    controller
        .set_series_behavior(SeriesId::PumpStorage, MockBehavior::Fail(boom.clone()))
        .await;

    let genmix = builder(source).build().unwrap();
    let res = tokio::time::timeout(
        std::time::Duration::from_secs(1),
        genmix.recent_past_total(),
    )
    .await;
    assert_eq!(res.expect("first error wins"), Err(boom));
}
