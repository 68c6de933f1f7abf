#![allow(dead_code)]

use actix_web::web;
use ivoryscroll::configuration::Settings;
use ivoryscroll::connectors::{
    self, CatalogSource, ConnectorConfig, ContactConnector, InMemoryCatalog,
};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status();
        let body = response.json().await.expect("Response is not JSON");
        (status, body)
    }
}

fn test_settings() -> Settings {
    let mut connectors = ConnectorConfig::default();
    connectors.contact.simulated_latency_ms = 0;

    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        connectors,
    }
}

// we have to run server in another task
pub async fn spawn_app_with(
    catalog: Arc<dyn CatalogSource>,
    contact: Arc<dyn ContactConnector>,
) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = ivoryscroll::startup::run(
        listener,
        web::Data::new(catalog),
        web::Data::new(contact),
    )
    .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_app() -> TestApp {
    let settings = test_settings();
    let contact = connectors::init_contact(&settings.connectors.contact);
    spawn_app_with(Arc::new(InMemoryCatalog::seeded()), contact.get_ref().clone()).await
}
