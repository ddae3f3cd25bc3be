use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /body/lat_lon endpoint, degrees.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct LatLonResponse {
    latitude: f64,
    longitude: f64,
}

impl SerdeJSONBodyHTTPResponseType for LatLonResponse {}

impl LatLonResponse {
    pub(crate) fn latitude(&self) -> f64 { self.latitude }
    pub(crate) fn longitude(&self) -> f64 { self.longitude }
}
