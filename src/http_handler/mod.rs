//! REST transport to the vehicle provider bridge.
//!
//! Every endpoint is modelled as a request type in [`http_request`] paired with the response
//! type in [`http_response`] it deserializes into.

pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;
