// Discord commands for the daily to-do list

use crate::core::records::{RecordError, TodoItem};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Daily farm reminders
#[poise::command(slash_command, subcommands("add", "list", "remove"))]
pub async fn todo(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Add a task to today's list
#[poise::command(slash_command)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "What needs doing"] task: String,
) -> Result<(), Error> {
    match ctx.data().todos.add(&task).await {
        Ok(item) => {
            ctx.say(format!("📝 Ditambahkan: {}", item.task)).await?;
        }
        Err(RecordError::Store(e)) => {
            tracing::error!(error = %e, "Failed to save to-do list");
            return Err(e.into());
        }
        Err(_) => {
            ctx.say("⚠️ Tugas tidak boleh kosong.").await?;
        }
    }
    Ok(())
}

/// Show today's tasks
#[poise::command(slash_command)]
pub async fn list(ctx: Context<'_>) -> Result<(), Error> {
    let todos = ctx.data().todos.list().await;

    let embed = serenity::CreateEmbed::new()
        .title("📅 Pengingat Harian")
        .description(todo_lines(&todos))
        .color(0x3498DB); // Blue

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Mark a task as done and remove it
#[poise::command(slash_command)]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Task number as shown in /todo list"]
    #[min = 1]
    number: u32,
) -> Result<(), Error> {
    let removed = match (number as usize).checked_sub(1) {
        Some(index) => ctx.data().todos.remove(index).await?,
        None => None,
    };

    let message = match removed {
        Some(item) => format!("✅ Selesai: {}", item.task),
        None => format!("Tugas #{} tidak ditemukan.", number),
    };
    ctx.say(message).await?;
    Ok(())
}

fn todo_lines(todos: &[TodoItem]) -> String {
    if todos.is_empty() {
        return "Tidak ada tugas. Tambahkan dengan `/todo add`.".to_string();
    }

    todos
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.task))
        .collect::<Vec<_>>()
        .join("\n")
}
