pub(crate) mod exclusion;
pub(crate) mod planner;
