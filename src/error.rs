use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create uinput pointer device (is /dev/uinput accessible?): {0}")]
    DeviceCreation(#[source] std::io::Error),

    #[error("failed to emit pointer event: {0}")]
    Emit(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
