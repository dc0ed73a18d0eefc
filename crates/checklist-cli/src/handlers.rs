use crate::cli::Commands;
use crate::context::CliContext;
use crate::output;
use checklist_domain::commands::{AddTask, Command, DeleteTask, SetTaskDescription, SetTaskDone};
use checklist_domain::TaskId;

pub async fn handle(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List => output::output_list(ctx.views()),
        Commands::Add { title } => {
            let command = AddTask {
                title: title.join(" "),
            };
            if let Err(e) = ctx.execute(&command) {
                output::output_error(&e.to_string());
            }
            ctx.save().await?;
            let added = ctx
                .tasks
                .id_at(ctx.tasks.len().saturating_sub(1))
                .and_then(|id| ctx.view(id));
            output::output_success(added)
        }
        Commands::Done { position } => {
            update(ctx, position, |task_id| SetTaskDone {
                task_id,
                done: true,
            })
            .await
        }
        Commands::Undone { position } => {
            update(ctx, position, |task_id| SetTaskDone {
                task_id,
                done: false,
            })
            .await
        }
        Commands::Describe { position, text } => {
            update(ctx, position, |task_id| SetTaskDescription { task_id, text }).await
        }
        Commands::Remove { position } => {
            let task_id = resolve_or_exit(ctx, position);
            let removed = ctx.view(task_id);
            ctx.execute(&DeleteTask { task_id })?;
            ctx.save().await?;
            output::output_success(serde_json::json!({ "removed": removed }))
        }
        // Generated in main without touching the task file.
        Commands::Completions { .. } => Ok(()),
    }
}

async fn update<C, F>(ctx: &mut CliContext, position: usize, build: F) -> anyhow::Result<()>
where
    C: Command,
    F: FnOnce(TaskId) -> C,
{
    let task_id = resolve_or_exit(ctx, position);
    ctx.execute(&build(task_id))?;
    ctx.save().await?;
    output::output_success(ctx.view(task_id))
}

fn resolve_or_exit(ctx: &CliContext, position: usize) -> TaskId {
    match ctx.resolve(position) {
        Ok(id) => id,
        Err(e) => output::output_error(&e.to_string()),
    }
}
