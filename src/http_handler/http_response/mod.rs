pub(crate) mod body;
pub(crate) mod control;
pub(crate) mod lat_lon;
pub(crate) mod orbit;
pub(crate) mod position;
pub(crate) mod response_common;
pub(crate) mod stage;
pub(crate) mod universal_time;
pub(crate) mod vessel;
