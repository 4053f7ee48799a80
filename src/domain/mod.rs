mod audio_clip;
mod candidate;
mod evaluation;
mod language;
mod pipeline_stage;
mod upload_path;

pub use audio_clip::AudioClip;
pub use candidate::Candidate;
pub use evaluation::{CandidateVerdict, Evaluation, MergedTranscripts, Quality};
pub use language::{Language, TARGET_LANGUAGES};
pub use pipeline_stage::PipelineStage;
pub use upload_path::{UploadId, UploadPath};
