use super::http_response::{
    body, control, lat_lon, orbit, position, response_common, stage, universal_time, vessel,
};

pub(crate) mod body_get;
pub(crate) mod control_put;
pub(crate) mod lat_lon_post;
pub(crate) mod orbit_get;
pub(crate) mod position_at_post;
pub(crate) mod request_common;
pub(crate) mod stage_post;
pub(crate) mod universal_time_get;
pub(crate) mod vessel_get;
