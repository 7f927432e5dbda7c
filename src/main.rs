use clap::{CommandFactory, Parser};
use img_shrink::cli::Args;
use img_shrink::constants::{ERROR_PREFIX, SAVE_PREFIX, SUCCESS_PREFIX, UPLOAD_PREFIX, URL_PREFIX};
use img_shrink::{ClientOptions, Result, ShrinkClient, ShrinkError, UploadInput};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    // No input behaves like --help: usage on stdout, success exit.
    let Some(input) = args.input.clone() else {
        let _ = Args::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    };

    match run(args, &input).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{ERROR_PREFIX} {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, input: &str) -> Result<()> {
    let key = args.key.clone().ok_or(ShrinkError::MissingKey)?;
    let mut options = ClientOptions::new(key);
    if let Some(api) = args.api.clone() {
        options = options.with_api(api);
    }
    let client = ShrinkClient::new(options)?;

    println!("{UPLOAD_PREFIX} Uploading: {input}");
    let result = client.shrink(UploadInput::from_arg(input)?).await?;
    println!("{SUCCESS_PREFIX} Compressed: {}", result.url());

    match (args.resize_method(), args.output) {
        (Some(method), Some(path)) => {
            let resized = result.resize(&method, args.width, args.height).await?;
            let written = resized.save(&path).await?;
            println!("{SAVE_PREFIX} Saved {written} bytes to {}", path.display());
        }
        (Some(_), None) => {
            return Err(ShrinkError::InvalidArgument(
                "an output path is required when resizing".to_string(),
            ));
        }
        (None, Some(path)) => {
            let written = result.save(&path).await?;
            println!("{SAVE_PREFIX} Saved {written} bytes to {}", path.display());
        }
        (None, None) => {
            println!("{URL_PREFIX} {}", result.url());
        }
    }

    Ok(())
}
