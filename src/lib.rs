//! # Profile Widget
//!
//! A user-profile display/edit widget built as a small actor system.
//!
//! ## Terminology Note
//!
//! - **Widget** ([`ProfileWidget`]) = the actor that owns all widget state
//! - **Client** ([`ProfileWidgetClient`]) = the handle a page uses to deliver
//!   input events and read the rendered [`View`]
//! - **Page** ([`ProfilePage`]) = mounts and unmounts one widget
//!
//! ## Flow
//!
//! mount → load → (success: populate draft | failure: show error) → user edits
//! draft → user submits → update request → (success: notify caller | failure:
//! log only)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use profile_widget::*;
//! # async fn demo() -> Result<(), String> {
//! let config = WidgetConfig::default();
//! let api = Arc::new(HttpUserApi::new(&config));
//! let on_update: UpdateCallback =
//!     Arc::new(|body: serde_json::Value| println!("saved: {}", body));
//!
//! let page = ProfilePage::mount(api, "42", Some(on_update), &config);
//!
//! let mut views = page.widget.subscribe();
//! let view = views
//!     .wait_for(|view| !view.is_loading())
//!     .await
//!     .map_err(|e| e.to_string())?
//!     .clone();
//! println!("{}", view);
//!
//! page.widget
//!     .edit_field(ProfileField::Bio, "Hello".to_string())
//!     .await
//!     .map_err(|e| e.to_string())?;
//! page.widget.submit().await.map_err(|e| e.to_string())?;
//!
//! page.unmount().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod view;
pub mod widget;

#[cfg(test)]
mod mock_framework;

pub use api::{HttpUserApi, UserApi};
pub use app_system::{setup_tracing, ProfilePage};
pub use clients::ProfileWidgetClient;
pub use config::WidgetConfig;
pub use domain::{LoadOrdering, LoadStatus, ProfileField, UserId, UserRecord};
pub use error::{ApiError, WidgetError};
pub use view::{ProfileView, View};
pub use widget::{ProfileWidget, UpdateCallback, WidgetState};
