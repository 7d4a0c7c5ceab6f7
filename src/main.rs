use clap::Parser;
use futures::StreamExt;
use rimgen::{
    logger, GenerationRequest, HuggingFaceClient, HuggingFaceConfig, ImageClient, ModelInfo,
    SessionState,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "rimgen",
    version,
    about = "Generate images from text with the Hugging Face Inference API"
)]
struct Args {
    /// Prompt describing the desired image
    #[arg(long)]
    prompt: Option<String>,

    /// Things the image should avoid
    #[arg(long, default_value = "")]
    negative_prompt: String,

    /// Model to use, by hub id or display name
    #[arg(long)]
    model: Option<String>,

    /// Number of inference steps (1-100)
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=100))]
    steps: u32,

    /// Guidance scale (1.0-20.0)
    #[arg(long, default_value_t = 7.5, value_parser = parse_guidance_scale)]
    guidance_scale: f32,

    /// Image width in pixels (256-1024, multiple of 64)
    #[arg(long, default_value_t = 512, value_parser = parse_dimension)]
    width: u32,

    /// Image height in pixels (256-1024, multiple of 64)
    #[arg(long, default_value_t = 512, value_parser = parse_dimension)]
    height: u32,

    /// Number of images to generate (1-3)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=3))]
    count: u32,

    /// Directory for generated images
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// List the supported models and exit
    #[arg(long)]
    list_models: bool,

    /// Verbose (debug-level) logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

fn parse_dimension(value: &str) -> Result<u32, String> {
    let pixels: u32 = value
        .parse()
        .map_err(|_| "expected a number of pixels".to_string())?;
    if !(256..=1024).contains(&pixels) {
        return Err("must be between 256 and 1024".to_string());
    }
    if pixels % 64 != 0 {
        return Err("must be a multiple of 64".to_string());
    }
    Ok(pixels)
}

fn parse_guidance_scale(value: &str) -> Result<f32, String> {
    let scale: f32 = value.parse().map_err(|_| "expected a number".to_string())?;
    if !(1.0..=20.0).contains(&scale) {
        return Err("must be between 1.0 and 20.0".to_string());
    }
    Ok(scale)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let logger_config = if args.verbose {
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug)
    } else {
        logger::LoggerConfig::new()
    };
    let logger_config = logger_config.with_colors(!args.no_color);

    if let Err(e) = logger::init_with_config(logger_config) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    if args.list_models {
        log::info!("🖼️  Available image generation models:");
        for model in ImageClient::supported_models() {
            log::info!("  {} - {} ({})", model.id, model.name, model.provider);
        }
        return ExitCode::SUCCESS;
    }

    run(args).await
}

async fn run(args: Args) -> ExitCode {
    // A missing prompt is reported before a missing model; both stop us
    // before any network call.
    let prompt = args.prompt.as_deref().unwrap_or("").trim().to_string();
    if prompt.is_empty() {
        log::warn!("⚠️  Please provide a prompt with --prompt");
        return ExitCode::FAILURE;
    }

    let mut session = SessionState::new();
    if let Some(model) = args.model.as_deref() {
        match ModelInfo::resolve(model) {
            Some(info) => session.select_model(info.id),
            None => {
                log::warn!(
                    "⚠️  '{}' is not in the built-in catalog, passing it through as a hub id",
                    model
                );
                session.select_model(model);
            }
        }
    }
    let model_id = match session.require_model() {
        Ok(id) => id.to_string(),
        Err(_) => {
            log::warn!("⚠️  Please choose a model with --model (use --list-models to see them)");
            return ExitCode::FAILURE;
        }
    };

    let config = HuggingFaceConfig::from_env();
    logger::log_config_info(&config);

    let client = match HuggingFaceClient::new(config) {
        Ok(client) => {
            log::info!("✅ Hugging Face client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Hugging Face client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        log::error!(
            "❌ Failed to create output directory {}: {}",
            args.output_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    let request = GenerationRequest::new(prompt)
        .with_model(&model_id)
        .with_negative_prompt(&args.negative_prompt)
        .with_steps(args.steps)
        .with_guidance_scale(args.guidance_scale)
        .with_dimensions(args.width, args.height);

    log::info!("🎨 Generating {} image(s) with {}", args.count, model_id);

    let pipeline = client.pipeline();
    let mut stream = pipeline.generate_stream(request, args.count);

    let mut failures = 0u32;
    let mut index = 0u32;
    while let Some(result) = stream.next().await {
        index += 1;
        match result {
            Ok(image) => {
                let filename = args.output_dir.join(format!(
                    "generated_image_{}_{}_{}.png",
                    model_id.replace('/', "_"),
                    chrono::Utc::now().timestamp(),
                    index
                ));
                match image.save(&filename) {
                    Ok(()) => log::info!("💾 Image {} saved to: {}", index, filename.display()),
                    Err(e) => {
                        log::error!("❌ Failed to save image {}: {}", index, e);
                        failures += 1;
                    }
                }
            }
            Err(e) => {
                log::error!("❌ Image {} failed: {}", index, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        log::warn!("⚠️  {} of {} image(s) failed", failures, args.count);
        return ExitCode::FAILURE;
    }

    log::info!("🎉 All {} image(s) generated", args.count);
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parser() {
        assert_eq!(parse_dimension("256"), Ok(256));
        assert_eq!(parse_dimension("1024"), Ok(1024));
        assert!(parse_dimension("255").is_err());
        assert!(parse_dimension("1088").is_err());
        assert!(parse_dimension("500").is_err());
        assert!(parse_dimension("abc").is_err());
    }

    #[test]
    fn test_guidance_scale_parser() {
        assert_eq!(parse_guidance_scale("7.5"), Ok(7.5));
        assert_eq!(parse_guidance_scale("1"), Ok(1.0));
        assert!(parse_guidance_scale("0.5").is_err());
        assert!(parse_guidance_scale("25").is_err());
    }

    #[test]
    fn test_count_range() {
        assert!(Args::try_parse_from(["rimgen", "--count", "3"]).is_ok());
        assert!(Args::try_parse_from(["rimgen", "--count", "4"]).is_err());
        assert!(Args::try_parse_from(["rimgen", "--count", "0"]).is_err());
    }

    #[test]
    fn test_steps_range() {
        assert!(Args::try_parse_from(["rimgen", "--steps", "100"]).is_ok());
        assert!(Args::try_parse_from(["rimgen", "--steps", "101"]).is_err());
    }

    #[test]
    fn test_logging_flags() {
        let args = Args::try_parse_from(["rimgen", "-v", "--no-color"]).unwrap();
        assert!(args.verbose);
        assert!(args.no_color);

        let args = Args::try_parse_from(["rimgen"]).unwrap();
        assert!(!args.verbose);
        assert!(!args.no_color);
    }
}
