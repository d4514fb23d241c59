mod processing_service;

pub use processing_service::{
    ProcessError, ProcessOutcome, ProcessRequest, ProcessingService, Upload, build_video_prompt,
};
