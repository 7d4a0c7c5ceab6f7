use rimgen::{GenerationRequest, HuggingFaceClient, HuggingFaceConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    rimgen::logger::init()?;
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }

    let api_key = env::var("HUGGINGFACE_API_KEY")?;
    let config = HuggingFaceConfig::new().with_api_key(api_key);

    let client = HuggingFaceClient::new(config)?;

    let request = GenerationRequest::new(
        "a lighthouse on a cliff at dusk, dramatic clouds, oil painting style",
    )
    .with_model("sd-community/sdxl-flash")
    .with_negative_prompt("blurry, low quality")
    .with_steps(30)
    .with_dimensions(768, 512);

    let image = client.pipeline().generate(&request).await?;
    println!("{:?}", image);

    let filename = format!("generated_image_{}.png", chrono::Utc::now().timestamp());
    image.save(&filename)?;
    log::info!("💾 Image saved to: {}", filename);

    Ok(())
}
