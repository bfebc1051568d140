pub(crate) mod queue_sidebar_list;
