use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub endpoints: &'static [EndpointInfo],
}

/// Routes advertised by `GET /`.
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo {
        method: "GET",
        path: "/",
        description: "List available endpoints",
    },
    EndpointInfo {
        method: "POST",
        path: "/generate-text",
        description: "Generate text from a prompt",
    },
    EndpointInfo {
        method: "POST",
        path: "/generate-from-image",
        description: "Generate text from an image and a prompt",
    },
    EndpointInfo {
        method: "POST",
        path: "/generate-from-document",
        description: "Summarize a document",
    },
    EndpointInfo {
        method: "POST",
        path: "/generate-from-audio",
        description: "Transcribe audio",
    },
];
