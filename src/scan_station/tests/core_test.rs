use crate::config::Config;
use crate::device_camera::interface::{CameraAcquired, CameraError, CameraFacing};
use crate::device_file_input::interface::FileInputEvent;
use crate::device_user_input::interface::UserInputEvent;
use crate::image_payload::ImagePayload;
use crate::prediction_client::interface::{PredictError, PredictionResult};
use crate::scan_station::core::{init, transition, Banner, Effect, Event, Model, State};

fn jpeg_payload(len: usize) -> ImagePayload {
    ImagePayload::new("lesion.jpg", "image/jpeg", vec![0u8; len])
}

fn example_result() -> PredictionResult {
    serde_json::from_str(
        r#"{
            "disease": {
                "top_prediction": {"label": "acne vulgaris", "confidence": 87.5},
                "top_k": [
                    {"label": "acne vulgaris", "confidence": 87.5},
                    {"label": "rosacea", "confidence": 8.1}
                ]
            },
            "fitzpatrick": {
                "top_prediction": {"scale": 3, "confidence": 61.2},
                "all_scales": [
                    {"scale": 1, "confidence": 2.0},
                    {"scale": 2, "confidence": 10.1},
                    {"scale": 3, "confidence": 61.2},
                    {"scale": 4, "confidence": 20.3},
                    {"scale": 5, "confidence": 5.0},
                    {"scale": 6, "confidence": 1.4}
                ]
            }
        }"#,
    )
    .unwrap()
}

fn uploading(request_id: u64) -> Model {
    Model {
        state: State::Uploading {
            preview: jpeg_payload(64),
            request_id,
            steps_done: 1,
        },
        banner: None,
        next_request_id: request_id + 1,
    }
}

#[test]
fn init_subscribes_to_inputs_and_ticks() {
    let (model, effects) = init();

    assert!(matches!(model.state, State::Idle));
    assert!(model.banner.is_none());
    assert_eq!(
        effects,
        vec![
            Effect::SubscribeFileInput,
            Effect::SubscribeUserInput,
            Effect::SubscribeTick,
        ]
    );
}

#[test]
fn oversized_file_is_rejected_and_input_reset() {
    let config = Config::default();
    let (model, _) = init();

    let too_big = jpeg_payload(10 * 1024 * 1024 + 1);
    let (model, effects) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Picked(too_big)),
    );

    assert!(matches!(model.state, State::Idle));
    assert!(model.banner.is_some());
    assert_eq!(effects, vec![Effect::ResetFileInput]);
}

#[test]
fn wrong_mime_type_is_rejected_and_input_reset() {
    let config = Config::default();
    let (model, _) = init();

    let gif = ImagePayload::new("anim.gif", "image/gif", vec![0u8; 64]);
    let (model, effects) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Picked(gif)),
    );

    assert!(matches!(model.state, State::Idle));
    assert!(model.banner.is_some());
    assert_eq!(effects, vec![Effect::ResetFileInput]);
}

#[test]
fn accepted_file_heads_to_normalization_not_straight_to_upload() {
    let config = Config::default();
    let (model, _) = init();

    let payload = jpeg_payload(64);
    let (model, effects) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Picked(payload.clone())),
    );

    assert!(matches!(model.state, State::Normalizing { request_id: 0, .. }));
    assert_eq!(
        effects,
        vec![Effect::Normalize {
            request_id: 0,
            payload
        }]
    );
}

#[test]
fn only_first_dropped_file_is_taken() {
    let config = Config::default();
    let (model, _) = init();

    let first = jpeg_payload(64);
    let second = ImagePayload::new("second.png", "image/png", vec![0u8; 32]);
    let (model, effects) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Dropped(vec![first.clone(), second])),
    );

    match model.state {
        State::Normalizing { preview, .. } => assert_eq!(preview, first),
        other => panic!("unexpected state: {:?}", other),
    }
    assert_eq!(
        effects,
        vec![Effect::Normalize {
            request_id: 0,
            payload: first
        }]
    );
}

#[test]
fn empty_drop_changes_nothing() {
    let config = Config::default();
    let (model, _) = init();

    let (model, effects) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Dropped(vec![])),
    );

    assert!(matches!(model.state, State::Idle));
    assert!(effects.is_empty());
}

#[test]
fn normalization_done_starts_exactly_one_upload() {
    let config = Config::default();
    let (model, _) = init();
    let payload = jpeg_payload(64);

    let (model, _) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Picked(payload.clone())),
    );
    assert_eq!(model.next_request_id, 1);

    let (model, effects) = transition(
        &config,
        model,
        Event::NormalizeDone {
            request_id: 0,
            payload: payload.clone(),
        },
    );

    match &model.state {
        State::Uploading {
            request_id,
            steps_done,
            ..
        } => {
            assert_eq!(*request_id, 0);
            assert_eq!(*steps_done, 1);
        }
        other => panic!("unexpected state: {:?}", other),
    }
    assert_eq!(
        effects,
        vec![Effect::Predict {
            request_id: 0,
            payload
        }]
    );
}

#[test]
fn stale_normalization_of_a_superseded_capture_is_dropped() {
    let config = Config::default();
    let (model, _) = init();
    let first = ImagePayload::new("a.jpg", "image/jpeg", vec![1u8; 64]);
    let second = ImagePayload::new("b.jpg", "image/jpeg", vec![2u8; 64]);

    // Capture A is normalizing when capture B arrives.
    let (model, _) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Picked(first.clone())),
    );
    let (model, _) = transition(
        &config,
        model,
        Event::FileInput(FileInputEvent::Picked(second.clone())),
    );
    assert!(matches!(
        model.state,
        State::Normalizing { request_id: 1, .. }
    ));

    // A finishes late; its bytes must not ride under B's preview.
    let (model, effects) = transition(
        &config,
        model,
        Event::NormalizeDone {
            request_id: 0,
            payload: first,
        },
    );
    assert!(matches!(
        model.state,
        State::Normalizing { request_id: 1, .. }
    ));
    assert!(effects.is_empty());

    // B's own normalization is the one that uploads.
    let (model, effects) = transition(
        &config,
        model,
        Event::NormalizeDone {
            request_id: 1,
            payload: second.clone(),
        },
    );
    match model.state {
        State::Uploading {
            preview,
            request_id,
            ..
        } => {
            assert_eq!(preview, second);
            assert_eq!(request_id, 1);
        }
        other => panic!("unexpected state: {:?}", other),
    }
    assert_eq!(
        effects,
        vec![Effect::Predict {
            request_id: 1,
            payload: second
        }]
    );
}

#[test]
fn successful_prediction_shows_results() {
    let config = Config::default();
    let result = example_result();

    let (model, effects) = transition(
        &config,
        uploading(0),
        Event::PredictDone {
            request_id: 0,
            result: Ok(result.clone()),
        },
    );

    match model.state {
        State::Results { result: shown, .. } => assert_eq!(shown, result),
        other => panic!("unexpected state: {:?}", other),
    }
    assert!(effects.is_empty());
}

#[test]
fn failed_prediction_keeps_preview_and_banners_the_detail() {
    let config = Config::default();

    let (model, effects) = transition(
        &config,
        uploading(0),
        Event::PredictDone {
            request_id: 0,
            result: Err(PredictError::Rejected("Model not loaded".to_string())),
        },
    );

    assert!(matches!(model.state, State::Preview { .. }));
    assert_eq!(model.banner.unwrap().message, "Model not loaded");
    assert!(effects.is_empty());
}

#[test]
fn stale_prediction_response_is_dropped() {
    let config = Config::default();

    // A second capture superseded request 0; the model is uploading request 1.
    let (model, effects) = transition(
        &config,
        uploading(1),
        Event::PredictDone {
            request_id: 0,
            result: Ok(example_result()),
        },
    );

    assert!(matches!(model.state, State::Uploading { request_id: 1, .. }));
    assert!(effects.is_empty());
}

#[test]
fn prediction_response_after_results_is_dropped() {
    let config = Config::default();
    let model = Model {
        state: State::Results {
            preview: jpeg_payload(64),
            result: example_result(),
        },
        banner: None,
        next_request_id: 2,
    };

    let (model, effects) = transition(
        &config,
        model,
        Event::PredictDone {
            request_id: 0,
            result: Err(PredictError::Failed),
        },
    );

    assert!(matches!(model.state, State::Results { .. }));
    assert!(model.banner.is_none());
    assert!(effects.is_empty());
}

#[test]
fn ticks_advance_progress_steps_up_to_the_last() {
    let config = Config::default();
    let total = config.progress_steps.len();
    let mut model = uploading(0);

    for _ in 0..total + 3 {
        let (next, effects) = transition(&config, model, Event::Tick);
        assert!(effects.is_empty());
        model = next;
    }

    match model.state {
        State::Uploading { steps_done, .. } => assert_eq!(steps_done, total),
        other => panic!("unexpected state: {:?}", other),
    }
}

#[test]
fn ticks_after_response_leave_results_alone() {
    let config = Config::default();
    let (model, _) = transition(
        &config,
        uploading(0),
        Event::PredictDone {
            request_id: 0,
            result: Ok(example_result()),
        },
    );

    let (model, effects) = transition(&config, model, Event::Tick);
    assert!(matches!(model.state, State::Results { .. }));
    assert!(effects.is_empty());
}

#[test]
fn banner_expires_after_its_tick_window() {
    let config = Config::default();
    let mut model = Model {
        state: State::Idle,
        banner: Some(Banner {
            message: "oops".to_string(),
            ticks_left: config.banner_ticks(),
        }),
        next_request_id: 0,
    };

    // Visible all the way to the last tick of the window.
    for _ in 0..config.banner_ticks() - 1 {
        let (next, _) = transition(&config, model, Event::Tick);
        assert!(next.banner.is_some());
        model = next;
    }

    let (model, _) = transition(&config, model, Event::Tick);
    assert!(model.banner.is_none());
}

#[test]
fn camera_open_acquires_preferred_facing() {
    let config = Config::default();
    let (model, _) = init();

    let (model, effects) = transition(&config, model, Event::CameraOpenRequested);

    assert!(matches!(
        model.state,
        State::CameraStarting {
            facing: CameraFacing::Rear
        }
    ));
    assert_eq!(
        effects,
        vec![Effect::AcquireCamera {
            facing: CameraFacing::Rear
        }]
    );
}

#[test]
fn user_commands_map_onto_camera_and_clear_transitions() {
    let config = Config::default();
    let (model, _) = init();

    let (model, effects) = transition(
        &config,
        model,
        Event::UserInput(UserInputEvent::OpenCamera),
    );
    assert!(matches!(model.state, State::CameraStarting { .. }));
    assert_eq!(
        effects,
        vec![Effect::AcquireCamera {
            facing: CameraFacing::Rear
        }]
    );

    let (model, _) = transition(
        &config,
        model,
        Event::CameraAcquireDone(Ok(CameraAcquired { camera_count: 2 })),
    );

    let (model, effects) = transition(
        &config,
        model,
        Event::UserInput(UserInputEvent::Snapshot),
    );
    assert!(matches!(model.state, State::CameraLive { .. }));
    assert_eq!(effects, vec![Effect::CaptureStill]);

    let (model, effects) = transition(
        &config,
        model,
        Event::UserInput(UserInputEvent::DismissCamera),
    );
    assert!(matches!(model.state, State::Idle));
    assert_eq!(effects, vec![Effect::ReleaseCamera]);

    let (model, effects) = transition(&config, model, Event::UserInput(UserInputEvent::Clear));
    assert!(matches!(model.state, State::Idle));
    assert_eq!(effects, vec![Effect::ResetFileInput]);
}

#[test]
fn camera_acquire_success_goes_live() {
    let config = Config::default();
    let (model, _) = init();
    let (model, _) = transition(&config, model, Event::CameraOpenRequested);

    let (model, effects) = transition(
        &config,
        model,
        Event::CameraAcquireDone(Ok(CameraAcquired { camera_count: 2 })),
    );

    assert!(matches!(
        model.state,
        State::CameraLive {
            facing: CameraFacing::Rear,
            camera_count: 2
        }
    ));
    assert!(effects.is_empty());
}

#[test]
fn camera_errors_surface_distinct_messages() {
    let config = Config::default();

    let mut messages = Vec::new();
    for error in [
        CameraError::PermissionDenied,
        CameraError::NotFound,
        CameraError::Acquisition("busy".to_string()),
    ] {
        let (model, _) = init();
        let (model, _) = transition(&config, model, Event::CameraOpenRequested);
        let (model, _) = transition(&config, model, Event::CameraAcquireDone(Err(error)));

        assert!(matches!(model.state, State::Idle));
        messages.push(model.banner.unwrap().message);
    }

    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
    assert_ne!(messages[0], messages[2]);
}

#[test]
fn switch_toggles_facing_only_with_multiple_cameras() {
    let config = Config::default();

    let single = Model {
        state: State::CameraLive {
            facing: CameraFacing::Rear,
            camera_count: 1,
        },
        banner: None,
        next_request_id: 0,
    };
    let (model, effects) = transition(&config, single, Event::CameraSwitchRequested);
    assert!(matches!(model.state, State::CameraLive { .. }));
    assert!(effects.is_empty());

    let multi = Model {
        state: State::CameraLive {
            facing: CameraFacing::Rear,
            camera_count: 2,
        },
        banner: None,
        next_request_id: 0,
    };
    let (model, effects) = transition(&config, multi, Event::CameraSwitchRequested);
    assert!(matches!(
        model.state,
        State::CameraSwitching {
            facing: CameraFacing::Front
        }
    ));
    assert_eq!(
        effects,
        vec![Effect::AcquireCamera {
            facing: CameraFacing::Front
        }]
    );
}

#[test]
fn camera_dismissal_always_releases_the_stream() {
    let config = Config::default();

    for state in [
        State::CameraStarting {
            facing: CameraFacing::Rear,
        },
        State::CameraLive {
            facing: CameraFacing::Rear,
            camera_count: 2,
        },
        State::CameraSwitching {
            facing: CameraFacing::Front,
        },
    ] {
        let model = Model {
            state,
            banner: None,
            next_request_id: 0,
        };
        let (model, effects) = transition(&config, model, Event::CameraDismissed);
        assert!(matches!(model.state, State::Idle));
        assert_eq!(effects, vec![Effect::ReleaseCamera]);
    }
}

#[test]
fn snapshot_releases_camera_and_enters_intake() {
    let config = Config::default();
    let model = Model {
        state: State::CameraLive {
            facing: CameraFacing::Rear,
            camera_count: 2,
        },
        banner: None,
        next_request_id: 0,
    };

    let (model, effects) = transition(&config, model, Event::SnapshotRequested);
    assert_eq!(effects, vec![Effect::CaptureStill]);

    let still = ImagePayload::new("camera-capture.jpg", "image/jpeg", vec![0u8; 64]);
    let (model, effects) = transition(&config, model, Event::SnapshotDone(Ok(still.clone())));

    assert!(matches!(model.state, State::Normalizing { .. }));
    assert_eq!(
        effects,
        vec![
            Effect::ReleaseCamera,
            Effect::Normalize {
                request_id: 0,
                payload: still
            }
        ]
    );
}

#[test]
fn snapshot_failure_releases_camera_and_banners() {
    let config = Config::default();
    let model = Model {
        state: State::CameraLive {
            facing: CameraFacing::Rear,
            camera_count: 2,
        },
        banner: None,
        next_request_id: 0,
    };

    let (model, effects) = transition(
        &config,
        model,
        Event::SnapshotDone(Err(CameraError::Acquisition("track ended".to_string()))),
    );

    assert!(matches!(model.state, State::Idle));
    assert!(model.banner.is_some());
    assert_eq!(effects, vec![Effect::ReleaseCamera]);
}

#[test]
fn new_capture_while_uploading_supersedes_the_old_request() {
    let config = Config::default();
    let payload = jpeg_payload(64);

    // Request 0 is in flight; the user picks another file.
    let (model, effects) = transition(
        &config,
        uploading(0),
        Event::FileInput(FileInputEvent::Picked(payload.clone())),
    );
    assert!(matches!(
        model.state,
        State::Normalizing { request_id: 1, .. }
    ));
    assert_eq!(
        effects,
        vec![Effect::Normalize {
            request_id: 1,
            payload: payload.clone()
        }]
    );

    // The new upload keeps its fresh id...
    let (model, _) = transition(
        &config,
        model,
        Event::NormalizeDone {
            request_id: 1,
            payload,
        },
    );
    assert!(matches!(
        model.state,
        State::Uploading { request_id: 1, .. }
    ));

    // ...so the late answer to request 0 cannot clobber it.
    let (model, effects) = transition(
        &config,
        model,
        Event::PredictDone {
            request_id: 0,
            result: Ok(example_result()),
        },
    );
    assert!(matches!(
        model.state,
        State::Uploading { request_id: 1, .. }
    ));
    assert!(effects.is_empty());
}

#[test]
fn clear_resets_to_idle_and_clears_the_input() {
    let config = Config::default();
    let model = Model {
        state: State::Results {
            preview: jpeg_payload(64),
            result: example_result(),
        },
        banner: Some(Banner {
            message: "old".to_string(),
            ticks_left: 5,
        }),
        next_request_id: 3,
    };

    let (model, effects) = transition(&config, model, Event::ClearRequested);

    assert!(matches!(model.state, State::Idle));
    assert!(model.banner.is_none());
    assert_eq!(model.next_request_id, 3);
    assert_eq!(effects, vec![Effect::ResetFileInput]);
}
