use std::sync::Arc;
use std::time::Duration;

use profile_widget::{
    setup_tracing, HttpUserApi, ProfileField, ProfilePage, UpdateCallback, View, WidgetConfig,
};
use tracing::{error, info, warn, Instrument};

/// Mounts the widget against the configured users service, renders what comes
/// back, makes one edit and submits it.
#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = WidgetConfig::default();
    info!(api_base = %config.api_base, "Starting profile widget demo");

    let api = Arc::new(HttpUserApi::new(&config));
    let on_update: UpdateCallback =
        Arc::new(|body: serde_json::Value| info!(%body, "Caller notified of update"));
    let page = ProfilePage::mount(api, "1", Some(on_update), &config);

    let span = tracing::info_span!("initial_load");
    let view = async {
        let mut views = page.widget.subscribe();
        let loaded = tokio::time::timeout(
            Duration::from_secs(30),
            views.wait_for(|view| !view.is_loading()),
        )
        .await;

        match loaded {
            Ok(Ok(view)) => Some(view.clone()),
            Ok(Err(e)) => {
                error!(error = %e, "Widget stopped before loading");
                None
            }
            Err(_) => {
                warn!("Users service did not answer in time");
                None
            }
        }
    }
    .instrument(span)
    .await;

    if let Some(view) = view {
        println!("{}", view);

        if let View::Profile(_) = view {
            page.widget
                .edit_field(ProfileField::Bio, "Updated from the demo".to_string())
                .await
                .map_err(|e| e.to_string())?;
            page.widget.submit().await.map_err(|e| e.to_string())?;
            println!("{}", page.widget.view().await.map_err(|e| e.to_string())?);
        }
    }

    page.unmount().await?;
    info!("Demo completed");
    Ok(())
}
