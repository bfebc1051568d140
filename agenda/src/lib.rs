//! Agenda chat plugin: meeting settings modal and queued items sidebar.
//!
//! The [`store`] holds the plugin's state under its host namespace,
//! [`actions`] talk to the server through `agenda-client`, and
//! [`plugin::AgendaPlugin`] registers everything with a host. The [`app`]
//! module runs a small iced host around the plugin.

pub mod actions;
pub mod app;
pub mod config;
pub mod errors;
pub mod host;
pub mod plugin;
pub(crate) mod routers;
pub mod store;
pub(crate) mod widgets;
