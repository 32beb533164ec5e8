use anyhow::{anyhow, bail, Context};
use classroom_backend::{Config, Jwt};
use entity::users;
use sea_orm::{ActiveModelTrait, Database, Set};
use std::env::args;

const USAGE: &str = "usage: create_user <email> <first name> <last name> [--staff] [--superuser]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut positional = Vec::new();
    let mut is_staff = false;
    let mut is_superuser = false;

    for arg in args().skip(1) {
        match arg.as_str() {
            "--staff" => is_staff = true,
            "--superuser" => is_superuser = true,
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            _ => positional.push(arg),
        }
    }

    let [email, first_name, last_name]: [String; 3] = positional
        .try_into()
        .map_err(|_| anyhow!(USAGE))?;

    let config = Config::from_env()?;
    let database = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let user = users::ActiveModel {
        email: Set(email),
        first_name: Set(first_name),
        last_name: Set(last_name),
        is_staff: Set(is_staff),
        is_superuser: Set(is_superuser),
        ..Default::default()
    }
    .insert(&database)
    .await
    .context("failed to insert user")?;

    let token = Jwt::new(&config.jwt_secret)
        .issue(user.id, chrono::Duration::days(1))
        .map_err(|error| anyhow!(error.message().to_owned()))?;

    println!("id: {}", user.id);
    println!("token: {}", token);

    Ok(())
}
