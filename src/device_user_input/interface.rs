/// Commands a user can issue outside of supplying a file: the camera
/// lifecycle and clearing the current capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputEvent {
    OpenCamera,
    SwitchCamera,
    Snapshot,
    DismissCamera,
    Clear,
}

pub trait DeviceUserInput: Send + Sync {
    fn events(&self) -> std::sync::mpsc::Receiver<UserInputEvent>;
}
