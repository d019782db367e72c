//! Print a bearer token for local testing: `issue_token <user-id>`.

use anyhow::Context;

use api::auth::{AuthConfig, JwtService};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let user_id = std::env::args()
        .nth(1)
        .context("usage: issue_token <user-id>")?;

    let jwt = JwtService::new(&AuthConfig::from_env());
    let token = jwt.create_token(&user_id)?;
    println!("{token}");
    Ok(())
}
