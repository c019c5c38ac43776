use genmix::{GenMixError, IndexResponse, NowCorrection, SeriesId};
use genmix_mock::MockBehavior;

use crate::helpers::{builder, h, pairs, payload, scripted};

const FC: SeriesId = SeriesId::TotalGenerationForecast;

#[tokio::test]
async fn keeps_only_present_values_from_corrected_now() {
    let (source, controller) = scripted(&[FC]).await;
    controller
        .set_series_behavior(
            FC,
            MockBehavior::Return(payload(&[
                (h(-1), Some(10.0)),
                (h(0), Some(20.0)),
                (h(1), None),
                (h(2), Some(30.0)),
            ])),
        )
        .await;

    let genmix = builder(source).build().unwrap();
    let out = genmix.future_forecast().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(0), 20.0), (h(2), 30.0)]);
}

#[tokio::test]
async fn one_sample_before_and_one_after() {
    let (source, controller) = scripted(&[FC]).await;
    controller
        .set_series_behavior(
            FC,
            MockBehavior::Return(payload(&[(h(-1), Some(7.0)), (h(3), Some(9.0))])),
        )
        .await;

    let genmix = builder(source).build().unwrap();
    let out = genmix.future_forecast().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(3), 9.0)]);
}

#[tokio::test]
async fn floor_step_moves_the_lower_bound() {
    let (source, controller) = scripted(&[FC]).await;
    controller
        .set_series_behavior(
            FC,
            MockBehavior::Return(payload(&[
                (h(-3), Some(1.0)),
                (h(-2), Some(2.0)),
                (h(-1), Some(3.0)),
            ])),
        )
        .await;

    // 10:00 - 90 min = 08:30, floored to the hour = 08:00.
    let genmix = builder(source)
        .now_correction(NowCorrection::offset(-90 * 60).floored_to(3600))
        .build()
        .unwrap();
    let out = genmix.future_forecast().await.unwrap();
    assert_eq!(pairs(&out), vec![(h(-2), 2.0), (h(-1), 3.0)]);
}

#[tokio::test]
async fn uses_most_recent_index_timestamp() {
    let (source, controller) = scripted(&[]).await;
    controller
        .set_index_behavior(
            FC,
            MockBehavior::Return(IndexResponse {
                timestamps: vec![300, 200, 100],
            }),
        )
        .await;
    controller
        .set_series_behavior(FC, MockBehavior::Return(payload(&[])))
        .await;

    let genmix = builder(source).build().unwrap();
    assert!(genmix.future_forecast().await.unwrap().is_empty());
    assert_eq!(controller.series_requests().await, vec![(FC, 300)]);
}

#[tokio::test]
async fn empty_forecast_index_is_reported() {
    let (source, controller) = scripted(&[]).await;
    controller
        .set_index_behavior(FC, MockBehavior::Return(IndexResponse::default()))
        .await;

    let genmix = builder(source).build().unwrap();
    let err = genmix.future_forecast().await.unwrap_err();
    assert_eq!(err, GenMixError::empty_index(FC));
}

#[tokio::test]
async fn fetch_failure_propagates_unchanged() {
    let (source, controller) = scripted(&[FC]).await;
    let boom = GenMixError::source("P0", "forecast not published");
    controller
        .set_series_behavior(FC, MockBehavior::Fail(boom.clone()))
        .await;

    let genmix = builder(source).build().unwrap();
    assert_eq!(genmix.future_forecast().await.unwrap_err(), boom);
}
