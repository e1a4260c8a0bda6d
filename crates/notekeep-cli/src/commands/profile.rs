use anyhow::Result;
use notekeep_application::AppServices;
use notekeep_core::profile::ProfileInput;
use serde_json::Value;

use super::{current_user_id, to_json};
use crate::cli::ProfileAction;

pub async fn run(app: &AppServices, action: ProfileAction) -> Result<Value> {
    let user_id = current_user_id(app)?;

    match action {
        ProfileAction::Save { name, gender } => {
            let profile = app
                .save_profile
                .execute(&user_id, ProfileInput { name, gender })
                .await?;
            to_json(&profile)
        }
        ProfileAction::Show => {
            let profile = app.get_profile.execute(Some(&user_id)).await?;
            to_json(&profile)
        }
    }
}
