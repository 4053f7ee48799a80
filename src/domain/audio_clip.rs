use bytes::Bytes;

/// Staged audio shared by every transcription request of one upload.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub file_name: String,
    pub data: Bytes,
}

impl AudioClip {
    pub fn new(file_name: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
