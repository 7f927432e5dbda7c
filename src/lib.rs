pub mod cli;
pub mod client;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod result;

pub use client::{basic_auth_header, ClientOptions, ShrinkClient, UploadInput};
pub use envelope::{
    CompressedOutput, PreserveBody, ResizeBody, ResizeSpec, ShrinkEnvelope, Source, SourceBody,
};
pub use error::{Result, ShrinkError};
pub use result::{ResizedImage, ResultHandle};
