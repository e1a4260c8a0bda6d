use anyhow::Result;
use notekeep_application::AppServices;
use serde_json::Value;

use super::to_json;

pub async fn run(app: &AppServices, path: &str) -> Result<Value> {
    let result = app.router.push(path).await?;
    to_json(&result)
}
