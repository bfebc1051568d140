pub(crate) mod meeting_settings_form;
