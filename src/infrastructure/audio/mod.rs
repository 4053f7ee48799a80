mod local_whisper_engine;
mod mock_transcription_engine;

pub use local_whisper_engine::LocalWhisperEngine;
pub use mock_transcription_engine::MockTranscriptionEngine;
