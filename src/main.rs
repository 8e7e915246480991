use anyhow::{Context, Result};
use genanki_request::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env().context("Failed to read client configuration")?;

    let model = Model::new(
        "Test Model",
        vec![Template::new(
            "Test Card",
            "Front is: {{Front}}",
            "Back Is: {{Back}}",
        )],
        vec![Field::new("Front"), Field::new("Back")],
    );
    let deck = Deck::new("Test", vec![Note::new(&model, ["Foo", "Bar"])]);
    let request = build_request([RequestItem::from(deck), model.into()]);

    info!(server = %config.server_url, "Generating deck package");
    let client = GenerationClient::new(HttpTransport::from_config(&config)?);
    match client.generate_to_path(&request, &config.output) {
        Ok(()) => {
            info!(path = %config.output.display(), "Done");
            Ok(())
        }
        Err(Error::Server { status, detail }) => {
            error!(%status, "Generation server rejected the request");
            eprintln!("{}\n{}", status, detail);
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to generate deck package"),
    }
}
