use super::response_common::{HTTPResponseType, ResponseError};
use crate::http_handler::http_client::HTTPClient;

/// HTTP verbs used by the provider bridge.
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
}

/// Common description of a single bridge endpoint.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Additional headers sent with the request.
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::default() }

    /// Assembles URL, verb and headers into a `reqwest::RequestBuilder`.
    fn get_request_base(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let compound_url = format!("{}{}", client.url(), self.endpoint());
        let base = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(compound_url),
            HTTPRequestMethod::Post => client.client().post(compound_url),
            HTTPRequestMethod::Put => client.client().put(compound_url),
        };
        base.headers(self.header_params())
    }
}

/// Requests without a body.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = self.get_request_base(client).send().await?;
        Self::Response::read_response(response).await
    }
}

/// Requests carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let response = self.get_request_base(client).json(self.body()).send().await?;
        Self::Response::read_response(response).await
    }
}
