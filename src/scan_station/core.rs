use crate::config::Config;
use crate::device_camera::interface::{CameraAcquired, CameraError, CameraFacing};
use crate::device_file_input::interface::FileInputEvent;
use crate::device_user_input::interface::UserInputEvent;
use crate::image_intake::validate::validate;
use crate::image_payload::ImagePayload;
use crate::prediction_client::interface::{PredictError, PredictionResult};

#[derive(Clone, Debug, PartialEq)]
pub enum State {
    Idle,
    CameraStarting {
        facing: CameraFacing,
    },
    CameraLive {
        facing: CameraFacing,
        camera_count: usize,
    },
    CameraSwitching {
        facing: CameraFacing,
    },
    Normalizing {
        preview: ImagePayload,
        request_id: u64,
    },
    Uploading {
        preview: ImagePayload,
        request_id: u64,
        steps_done: usize,
    },
    /// Capture still on screen, nothing in flight. Reached after a failed
    /// prediction; the user retries from here.
    Preview {
        preview: ImagePayload,
    },
    Results {
        preview: ImagePayload,
        result: PredictionResult,
    },
}

/// Counted down by the tick subscription; the banner clears at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub message: String,
    pub ticks_left: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub state: State,
    pub banner: Option<Banner>,
    pub next_request_id: u64,
}

#[derive(Debug)]
pub enum Event {
    Tick,
    UserInput(UserInputEvent),
    FileInput(FileInputEvent),
    CameraOpenRequested,
    CameraAcquireDone(Result<CameraAcquired, CameraError>),
    CameraSwitchRequested,
    SnapshotRequested,
    SnapshotDone(Result<ImagePayload, CameraError>),
    CameraDismissed,
    CameraReleaseDone(Result<(), CameraError>),
    NormalizeDone {
        request_id: u64,
        payload: ImagePayload,
    },
    PredictDone {
        request_id: u64,
        result: Result<PredictionResult, PredictError>,
    },
    ClearRequested,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeFileInput,
    SubscribeUserInput,
    SubscribeTick,
    ResetFileInput,
    AcquireCamera { facing: CameraFacing },
    ReleaseCamera,
    CaptureStill,
    Normalize { request_id: u64, payload: ImagePayload },
    Predict { request_id: u64, payload: ImagePayload },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            state: State::Idle,
            banner: None,
            next_request_id: 0,
        },
        vec![
            Effect::SubscribeFileInput,
            Effect::SubscribeUserInput,
            Effect::SubscribeTick,
        ],
    )
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::Tick => tick(config, model),

        Event::UserInput(input) => {
            let mapped = match input {
                UserInputEvent::OpenCamera => Event::CameraOpenRequested,
                UserInputEvent::SwitchCamera => Event::CameraSwitchRequested,
                UserInputEvent::Snapshot => Event::SnapshotRequested,
                UserInputEvent::DismissCamera => Event::CameraDismissed,
                UserInputEvent::Clear => Event::ClearRequested,
            };
            transition(config, model, mapped)
        }

        Event::FileInput(FileInputEvent::Picked(payload)) => {
            intake(config, model, payload, vec![])
        }
        Event::FileInput(FileInputEvent::Dropped(payloads)) => {
            // Only the first dropped file counts.
            match payloads.into_iter().next() {
                Some(first) => intake(config, model, first, vec![]),
                None => (model, vec![]),
            }
        }

        Event::ClearRequested => (
            Model {
                state: State::Idle,
                banner: None,
                ..model
            },
            vec![Effect::ResetFileInput],
        ),

        Event::CameraOpenRequested => match model.state {
            State::CameraStarting { .. }
            | State::CameraLive { .. }
            | State::CameraSwitching { .. } => (model, vec![]),
            _ => {
                let facing = config.default_facing;
                (
                    Model {
                        state: State::CameraStarting { facing },
                        ..model
                    },
                    vec![Effect::AcquireCamera { facing }],
                )
            }
        },

        Event::CameraAcquireDone(result) => match (model.state.clone(), result) {
            (State::CameraStarting { facing }, Ok(acquired))
            | (State::CameraSwitching { facing }, Ok(acquired)) => (
                Model {
                    state: State::CameraLive {
                        facing,
                        camera_count: acquired.camera_count,
                    },
                    ..model
                },
                vec![],
            ),
            (State::CameraStarting { .. }, Err(error)) => (
                Model {
                    state: State::Idle,
                    banner: show_banner(config, error.to_string()),
                    ..model
                },
                vec![],
            ),
            (State::CameraSwitching { .. }, Err(error)) => (
                Model {
                    state: State::Idle,
                    banner: show_banner(config, error.to_string()),
                    ..model
                },
                vec![Effect::ReleaseCamera],
            ),
            _ => (model, vec![]),
        },

        Event::CameraSwitchRequested => match model.state.clone() {
            // The toggle only exists when more than one camera is available.
            State::CameraLive {
                facing,
                camera_count,
            } if camera_count > 1 => {
                let target = facing.toggled();
                (
                    Model {
                        state: State::CameraSwitching { facing: target },
                        ..model
                    },
                    vec![Effect::AcquireCamera { facing: target }],
                )
            }
            _ => (model, vec![]),
        },

        Event::SnapshotRequested => match model.state {
            State::CameraLive { .. } => (model, vec![Effect::CaptureStill]),
            _ => (model, vec![]),
        },

        Event::SnapshotDone(result) => match (model.state.clone(), result) {
            (State::CameraLive { .. }, Ok(payload)) => {
                intake(config, model, payload, vec![Effect::ReleaseCamera])
            }
            (State::CameraLive { .. }, Err(error)) => (
                Model {
                    state: State::Idle,
                    banner: show_banner(config, error.to_string()),
                    ..model
                },
                vec![Effect::ReleaseCamera],
            ),
            _ => (model, vec![]),
        },

        Event::CameraDismissed => match model.state {
            State::CameraStarting { .. }
            | State::CameraLive { .. }
            | State::CameraSwitching { .. } => (
                Model {
                    state: State::Idle,
                    ..model
                },
                vec![Effect::ReleaseCamera],
            ),
            _ => (model, vec![]),
        },

        Event::CameraReleaseDone(_) => (model, vec![]),

        Event::NormalizeDone { request_id, payload } => match model.state.clone() {
            State::Normalizing {
                preview,
                request_id: current,
            } if current == request_id => (
                Model {
                    state: State::Uploading {
                        preview,
                        request_id,
                        steps_done: 1,
                    },
                    ..model
                },
                vec![Effect::Predict {
                    request_id,
                    payload,
                }],
            ),
            // Normalization of a capture that was superseded; drop it.
            _ => (model, vec![]),
        },

        Event::PredictDone { request_id, result } => match model.state.clone() {
            State::Uploading {
                preview,
                request_id: current,
                ..
            } if current == request_id => match result {
                Ok(result) => (
                    Model {
                        state: State::Results { preview, result },
                        ..model
                    },
                    vec![],
                ),
                Err(error) => (
                    Model {
                        state: State::Preview { preview },
                        banner: show_banner(config, error.to_string()),
                        ..model
                    },
                    vec![],
                ),
            },
            // Late response for an abandoned capture; drop it.
            _ => (model, vec![]),
        },
    }
}

/// Shared intake for all three capture sources: validate, then hand off to
/// the normalizer. Rejection resets the input control and leaves the state
/// where it was. Each accepted capture takes a fresh request id, so late
/// completions of a superseded capture are recognizable and dropped.
fn intake(
    config: &Config,
    model: Model,
    payload: ImagePayload,
    mut effects: Vec<Effect>,
) -> (Model, Vec<Effect>) {
    match validate(config, &payload) {
        Err(error) => {
            effects.push(Effect::ResetFileInput);
            (
                Model {
                    banner: show_banner(config, error.to_string()),
                    ..model
                },
                effects,
            )
        }
        Ok(()) => {
            let request_id = model.next_request_id;
            effects.push(Effect::Normalize {
                request_id,
                payload: payload.clone(),
            });
            (
                Model {
                    state: State::Normalizing {
                        preview: payload,
                        request_id,
                    },
                    banner: None,
                    next_request_id: request_id + 1,
                },
                effects,
            )
        }
    }
}

fn tick(config: &Config, mut model: Model) -> (Model, Vec<Effect>) {
    if let Some(banner) = &mut model.banner {
        banner.ticks_left = banner.ticks_left.saturating_sub(1);
        if banner.ticks_left == 0 {
            model.banner = None;
        }
    }

    if let State::Uploading {
        preview,
        request_id,
        steps_done,
    } = model.state.clone()
    {
        model.state = State::Uploading {
            preview,
            request_id,
            steps_done: (steps_done + 1).min(config.progress_steps.len()),
        };
    }

    (model, vec![])
}

fn show_banner(config: &Config, message: String) -> Option<Banner> {
    Some(Banner {
        message,
        ticks_left: config.banner_ticks(),
    })
}
