//! Upload route kinds and their per-route defaults.

/// The three file-upload routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
    Audio,
}

impl UploadKind {
    /// Multipart field that carries the file.
    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::Image => "image",
            UploadKind::Document => "document",
            UploadKind::Audio => "audio",
        }
    }

    /// Prompt used when the request has no (or an empty) `prompt` field.
    pub fn default_prompt(self) -> &'static str {
        match self {
            UploadKind::Image => "Describe the image",
            UploadKind::Document => "Summarize the document",
            UploadKind::Audio => "Transcribe the audio",
        }
    }

    /// MIME type used when the part has no content type.
    pub fn default_mime_type(self) -> &'static str {
        match self {
            UploadKind::Image => "image/png",
            UploadKind::Document => "application/pdf",
            UploadKind::Audio => "audio/mpeg",
        }
    }

    pub fn missing_file_message(self) -> String {
        format!("No {} file provided", self.field_name())
    }
}

/// A file upload buffered in memory, plus the prompt sent with it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub prompt: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}
