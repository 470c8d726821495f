#[macro_use]
mod macros;
mod widget_client;

pub use widget_client::ProfileWidgetClient;
