use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-shrink",
    about = "Compress and resize images with the TinyPNG API",
    long_about = "img-shrink uploads an image (local file or remote URL) to the TinyPNG \
                  compression service and saves the compressed result. The service can also \
                  produce resized renditions (scale, fit, cover, thumb) server-side, so the \
                  image only has to be uploaded once.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-shrink input.png output.png -k YOUR_API_KEY\n  \
    img-shrink https://example.com/photo.jpg photo.jpg -k YOUR_API_KEY\n  \
    img-shrink input.png thumb.png -k YOUR_API_KEY --thumb -w 150 -H 150\n  \
    img-shrink input.png -k YOUR_API_KEY   (prints the compressed image URL)"
)]
pub struct Args {
    #[arg(help = "Image file path or remote URL to compress (omit to show usage)")]
    pub input: Option<String>,

    #[arg(help = "Destination path; if omitted, the compressed image URL is printed")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "METHOD",
        help = "Resize with an explicit method name (scale, fit, cover, thumb)"
    )]
    pub resize: Option<String>,

    #[arg(long, help = "Scale proportionally; give exactly one of --width/--height")]
    pub scale: bool,

    #[arg(long, help = "Scale down to fit within --width and --height")]
    pub fit: bool,

    #[arg(long, help = "Scale and crop to exactly --width and --height")]
    pub cover: bool,

    #[arg(long, help = "Like --cover, tuned for cut-out images on plain backgrounds")]
    pub thumb: bool,

    #[arg(short = 'w', long, help = "Target width in pixels")]
    pub width: Option<u32>,

    #[arg(short = 'H', long, help = "Target height in pixels")]
    pub height: Option<u32>,

    #[arg(short = 'k', long, help = "Tinify API key")]
    pub key: Option<String>,

    #[arg(long, value_name = "URL", help = "Override the shrink endpoint URL")]
    pub api: Option<String>,
}

impl Args {
    /// The requested resize method, if any. `--resize <METHOD>` wins over
    /// the shorthand flags; among the shorthands the first match counts.
    pub fn resize_method(&self) -> Option<String> {
        if let Some(method) = &self.resize {
            return Some(method.clone());
        }
        [
            (self.scale, "scale"),
            (self.fit, "fit"),
            (self.cover, "cover"),
            (self.thumb, "thumb"),
        ]
        .iter()
        .find(|(flag, _)| *flag)
        .map(|(_, method)| method.to_string())
    }
}
