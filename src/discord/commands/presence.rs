// Bot presence.
//
// Only Discord SDK types (Context, ActivityData, OnlineStatus) live here.

use poise::serenity_prelude as serenity;

/// Default status shown while the bot is online.
pub fn reset_status(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::listening("/ask pertanyaan tani");
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}

/// Called once the gateway reports ready.
pub fn on_ready(ctx: &serenity::Context) {
    reset_status(ctx);
}
