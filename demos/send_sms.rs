use std::io;

use nghcorp::{
    ApiKey, ApiSecret, DEFAULT_ENDPOINT, Driver, MessageText, Receiver, Sender, SmsNotification,
};
use tracing_subscriber::EnvFilter;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let endpoint =
        std::env::var("NGHCORP_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
    let api_key = ApiKey::new(required("NGHCORP_API_KEY")?)?;
    let api_secret = ApiSecret::new(required("NGHCORP_API_SECRET")?)?;
    let sender = Sender::new(required("NGHCORP_SENDER")?)?;
    let receiver = Receiver::new(required("NGHCORP_RECEIVER")?)?;
    let message = std::env::var("NGHCORP_MESSAGE")
        .unwrap_or_else(|_| "Hello from the nghcorp demo.".to_owned());

    let mut driver = Driver::builder(endpoint)
        .credentials(api_key, api_secret)
        .build()?;
    if let Ok(callback) = std::env::var("NGHCORP_CALLBACK_URL") {
        driver = driver.with_callback_url(callback);
    }

    let notification = SmsNotification::new(sender, receiver, MessageText::new(message)?);
    let result = driver.send_request(&notification).await?;
    println!(
        "id: {:?}, date: {:?}, ok: {}",
        result.id(),
        result.date(),
        result.is_ok()
    );

    Ok(())
}
