pub mod endpoints;
pub mod generate;

pub use endpoints::{EndpointInfo, EndpointsResponse, ENDPOINTS};
pub use generate::GenerateResponse;
