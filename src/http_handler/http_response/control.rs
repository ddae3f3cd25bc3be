use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /control endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ControlResponse {
    /// Acknowledgement text of the bridge (e.g. "ok").
    status: String,
}

impl SerdeJSONBodyHTTPResponseType for ControlResponse {}

impl ControlResponse {
    pub(crate) fn status(&self) -> &str { self.status.as_str() }
}
