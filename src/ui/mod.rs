pub(crate) mod app;
pub(crate) mod commands;
pub(crate) mod forms;
pub(crate) mod notice;
pub(crate) mod render;
pub(crate) mod screens;
pub(crate) mod theme;
pub(crate) mod util;
