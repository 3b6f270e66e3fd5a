pub(crate) mod date;
pub(crate) mod timezone;
pub(crate) mod workspace;

pub(crate) use date::parse_date;
pub(crate) use timezone::Timezone;
pub(crate) use workspace::{detect_workspace, workspace_or_unknown};
