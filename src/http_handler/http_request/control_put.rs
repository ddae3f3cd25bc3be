use super::control::ControlResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::flight_control::control_command::ControlCommand;

/// Request type for the /control endpoint.
#[derive(Debug)]
pub(crate) struct ControlRequest<'a> {
    /// The inputs to apply; unset fields are omitted from the body.
    pub(crate) command: &'a ControlCommand,
}

impl JSONBodyHTTPRequestType for ControlRequest<'_> {
    type Body = ControlCommand;
    fn body(&self) -> &Self::Body { self.command }
}

impl HTTPRequestType for ControlRequest<'_> {
    type Response = ControlResponse;
    fn endpoint(&self) -> &'static str { "/control" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
