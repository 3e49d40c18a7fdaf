use serenity::all::{Context, Member};

use crate::{
    bot::{command::guild_name, messenger::SerenityMessenger},
    model::member::{MemberJoin, WelcomeRecipient},
    service::delivery::WelcomeDelivery,
    state::AppState,
};

/// Handle a member joining a guild
///
/// Delivery never reports back to the guild; the outcome is logged by the delivery
/// service.
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    let join = MemberJoin {
        guild_id: new_member.guild_id.get(),
        guild_name: guild_name(&ctx, new_member.guild_id),
        recipient: WelcomeRecipient::new(new_member.user.id.get(), new_member.display_name()),
    };

    let messenger = SerenityMessenger::new(&ctx);
    WelcomeDelivery::new(&state.store, &messenger)
        .deliver(&join)
        .await;
}
