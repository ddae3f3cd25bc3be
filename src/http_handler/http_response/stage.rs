use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /stage endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct StageResponse {
    /// Stage number that is active after the activation.
    current_stage: i32,
}

impl SerdeJSONBodyHTTPResponseType for StageResponse {}

impl StageResponse {
    pub(crate) fn current_stage(&self) -> i32 { self.current_stage }
}
