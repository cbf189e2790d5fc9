use charity_signup::configuration;
use charity_signup::error::BizErrorEnum;
use charity_signup::startup::Application;
use charity_signup::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("charity-signup".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    // Missing backend credentials stop us here
    let config = configuration::get_configuration()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await
}
