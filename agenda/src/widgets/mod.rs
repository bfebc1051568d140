pub(crate) mod meeting_settings;
pub(crate) mod queue_sidebar;
