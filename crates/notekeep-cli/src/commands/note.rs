use anyhow::Result;
use notekeep_application::AppServices;
use notekeep_application::usecase::CreateNoteInput;
use serde_json::{Value, json};

use super::{current_user_id, to_json};
use crate::cli::NoteAction;

pub async fn run(app: &AppServices, action: NoteAction) -> Result<Value> {
    let user_id = current_user_id(app)?;

    match action {
        NoteAction::Save {
            title,
            content,
            tags,
            id,
        } => {
            let id = app
                .create_note
                .execute(CreateNoteInput {
                    id,
                    user_id: Some(user_id),
                    title: Some(title),
                    content,
                    tags: Some(json!(tags)),
                })
                .await?;
            tracing::info!("[CLI] Saved note {}", id);
            Ok(json!({ "id": id }))
        }
        NoteAction::List => {
            let notes = app.get_user_notes.execute(Some(&user_id)).await?;
            to_json(&notes)
        }
    }
}
