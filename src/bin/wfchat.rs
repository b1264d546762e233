use anyhow::Result;
use workflow_chat::app::App;
use workflow_chat::config::Config;
use workflow_chat::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;
    let config = Config::load()?;
    config.validate()?;
    tracing::info!(
        api_url = %config.api_url,
        debug_payload = config.debug_payload,
        "starting wfchat"
    );

    let mut app = App::new(config)?;
    let result = app.run().await;
    drop(app);

    if let Err(error) = &result {
        tracing::error!(%error, "wfchat exited with an error");
    }
    result
}
