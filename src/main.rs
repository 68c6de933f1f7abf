use anyhow::Context;
use ivoryscroll::configuration::get_configuration;
use ivoryscroll::connectors;
use ivoryscroll::startup::run;
use ivoryscroll::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("ivoryscroll".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    let catalog = connectors::init_catalog(&settings.connectors.catalog)
        .context("Failed to load the template catalog.")?;
    let contact = connectors::init_contact(&settings.connectors.contact);

    let address = settings.address();
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, catalog, contact)?.await?;
    Ok(())
}
