//! Gesture control application: maps webcam hand gestures to mouse clicks.

use anyhow::Result;
use clap::Parser;
use gesture_control::{
    app::{AppConfig, GestureApp, GuiMode},
    capture::{CameraSource, VideoSource},
    click_control::{ClickController, ClickDispatcher, ClickSink, DebounceMode, NullClickSink},
    config::Config,
    constants::DEFAULT_CAMERA_INDEX,
    hand_detection::HandLandmarkDetector,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value_t = DEFAULT_CAMERA_INDEX, conflicts_with = "video")]
    cam: i32,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<String>,

    /// Only click when the gesture changes, not on every held frame
    #[arg(long)]
    debounce: bool,

    /// Detect gestures without injecting clicks
    #[arg(long)]
    no_click: bool,

    /// GUI display mode (cam, none)
    #[arg(short, long, default_value = "cam")]
    gui: String,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Gesture Control");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line flags override the file
    if args.debounce {
        config.clicks.debounce = true;
    }
    if args.no_click {
        config.clicks.enabled = false;
    }

    config.validate()?;

    // Build the video source
    let source = if let Some(video_path) = args.video {
        VideoSource::File(video_path)
    } else {
        VideoSource::Camera(args.cam)
    };
    let frames = CameraSource::open(&source)?;

    // Build the landmark detector
    let hands = HandLandmarkDetector::new(
        &config.models.hand_landmarks,
        config.detection.presence_threshold,
    )?;

    // Build the click dispatcher; degrade to logging when X11 is unavailable
    let sink: Box<dyn ClickSink> = if config.clicks.enabled {
        match ClickController::new() {
            Ok(controller) => Box::new(controller),
            Err(e) => {
                warn!("Failed to initialize click control: {e}. Clicks will be logged only.");
                Box::new(NullClickSink)
            }
        }
    } else {
        info!("Click injection disabled");
        Box::new(NullClickSink)
    };
    let mode = if config.clicks.debounce {
        DebounceMode::EdgeTriggered
    } else {
        DebounceMode::EveryFrame
    };
    let clicks = ClickDispatcher::new(sink, mode);

    // Build application configuration
    let app_config = AppConfig {
        gui_mode: match args.gui.as_str() {
            "none" => GuiMode::None,
            _ => GuiMode::Camera,
        },
        mirror: config.display.mirror,
    };

    // Create and run application
    let mut app = GestureApp::new(app_config, Box::new(frames), Box::new(hands), clicks)?;
    app.run()?;

    Ok(())
}
