use serenity::all::{Context, Interaction};

use crate::{bot::command, state::AppState};

/// Handle an incoming interaction
///
/// Every interaction is logged at debug level; only application commands are answered.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            tracing::debug!(
                "Interaction {} from user {}: /{} ({:?})",
                command.id,
                command.user.id,
                command.data.name,
                command.data.kind
            );

            command::dispatch(state, &ctx, &command).await;
        }
        other => tracing::debug!(
            "Ignoring interaction {} of kind {:?}",
            other.id(),
            other.kind()
        ),
    }
}
