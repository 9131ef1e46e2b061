use crate::api::ApiClient;
use crate::app::App;
use crm_api::domain::NewActivity;
use crm_api::CrmError;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &ApiClient) {
    match action {
        Action::Reload => load_page(app, client).await,
        Action::SaveActivity {
            editing_id,
            payload,
        } => save_activity(app, client, editing_id, payload).await,
        Action::ConfirmDelete => confirm_delete(app, client).await,
    }
}

/// Message of a service error, or `fallback` when the error carries none.
fn error_message(err: &CrmError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Re-fetch activities, contacts and deals.
pub(super) async fn load_page(app: &mut App, client: &ApiClient) {
    app.begin_loading();
    let result = client.load_all().await.map_err(|e| {
        tracing::error!("Error loading data: {}", e);
        error_message(&e, "Failed to load activities")
    });
    if let Ok(data) = &result {
        tracing::info!(
            activities = data.activities.len(),
            contacts = data.contacts.len(),
            deals = data.deals.len(),
            "loaded activities page"
        );
    }
    app.finish_loading(result);
}

async fn save_activity(
    app: &mut App,
    client: &ApiClient,
    editing_id: Option<i64>,
    payload: NewActivity,
) {
    let result = match editing_id {
        Some(id) => client
            .update_activity(id, &payload)
            .await
            .map(|_| "Activity updated successfully"),
        None => client
            .create_activity(&payload)
            .await
            .map(|_| "Activity created successfully"),
    };

    match result {
        Ok(message) => {
            app.notify_success(message);
            app.close_form();
            load_page(app, client).await;
        }
        Err(e) => {
            tracing::error!("Error saving activity: {}", e);
            app.notify_error(error_message(&e, "Failed to save activity"));
            if let Some(form) = app.form.as_mut() {
                form.is_submitting = false;
            }
        }
    }
}

async fn confirm_delete(app: &mut App, client: &ApiClient) {
    let Some(ctx) = app.delete_context.clone() else {
        return;
    };

    match client.delete_activity(ctx.activity_id).await {
        Ok(()) => {
            app.notify_success("Activity deleted successfully");
            app.cancel_delete();
            load_page(app, client).await;
        }
        Err(e) => {
            tracing::error!("Error deleting activity: {}", e);
            app.notify_error(error_message(&e, "Failed to delete activity"));
        }
    }
}
