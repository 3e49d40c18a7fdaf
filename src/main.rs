use greeter::{bot, config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging()?;

    let config = Config::from_env()?;

    let store = startup::open_welcome_store(&config).await?;
    let state = AppState::new(store, config.command_prefix.clone());

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
