use super::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
pub(crate) struct UniversalTimeResponse {
    ut: f64,
}

impl SerdeJSONBodyHTTPResponseType for UniversalTimeResponse {}

impl UniversalTimeResponse {
    pub(crate) fn ut(&self) -> f64 { self.ut }
}
