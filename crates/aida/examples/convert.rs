use argh::FromArgs;

use aida::convert::{ConverterOptions, PixelConverter};
use aida::image::Image;
use aida::imgproc::parallel::ExecutionStrategy;
use aida::io::FileLoader;

#[derive(FromArgs)]
/// Convert an image to HSV and YCbCr and print per-channel means
struct Args {
    /// path or file:// URL of an input image
    #[argh(option, short = 'i')]
    image_path: String,

    /// background color as r,g,b used for alpha blending
    #[argh(option, default = "String::from(\"255,255,255\")")]
    background: String,

    /// process rows in parallel
    #[argh(switch)]
    parallel: bool,
}

fn parse_background(s: &str) -> Result<[u8; 3], Box<dyn std::error::Error>> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(format!("expected three comma separated channels, got {s:?}").into()),
    }
}

fn channel_means<const C: usize>(image: &Image<u8, C>) -> [f64; C] {
    let mut sums = [0f64; C];
    for pixel in image.as_slice().chunks_exact(C) {
        for (sum, &v) in sums.iter_mut().zip(pixel) {
            *sum += v as f64;
        }
    }
    let n = image.num_pixels().max(1) as f64;
    sums.map(|s| s / n)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let strategy = if args.parallel {
        ExecutionStrategy::ParallelRows
    } else {
        ExecutionStrategy::Serial
    };
    let options = ConverterOptions::default()
        .with_background(parse_background(&args.background)?)
        .with_strategy(strategy);

    let mut converter = PixelConverter::with_options(args.image_path, &FileLoader, options)?;
    converter.ready().await?;
    log::info!("converter ready: {:?}", converter);

    let hsv = converter.convert_to_hsv()?;
    let ycbcr = converter.convert_to_ycbcr()?;

    println!("Loaded image size: {}", hsv.size());
    println!("HSV mean:   {:?}", channel_means(hsv.as_image()));
    println!("YCbCr mean: {:?}", channel_means(ycbcr.as_image()));

    Ok(())
}
