use dioxus_logger::tracing;
use serenity::all::{ConnectionStage, Context, ResumedEvent, ShardStageUpdateEvent};
use serenity::http::RatelimitInfo;

/// Logs shard connection stage changes; a drop to disconnected is a warning.
pub async fn handle_shard_stage_update(_ctx: Context, event: ShardStageUpdateEvent) {
    if matches!(event.new, ConnectionStage::Disconnected) {
        tracing::warn!(
            "[SHARD] Shard {} disconnected (was {:?})",
            event.shard_id.0,
            event.old
        );
    } else {
        tracing::debug!(
            "[SHARD] Shard {} stage {:?} -> {:?}",
            event.shard_id.0,
            event.old,
            event.new
        );
    }
}

pub async fn handle_resume(ctx: Context, _event: ResumedEvent) {
    tracing::warn!("[SHARD] Shard {} resumed its session", ctx.shard_id.0);
}

/// Logs REST rate limits; Serenity waits them out on its own.
pub async fn handle_ratelimit(data: RatelimitInfo) {
    tracing::warn!(
        "[CLIENT] Rate limited on {} for {:?} (global: {})",
        data.path,
        data.timeout,
        data.global
    );
}
