use tracing_subscriber::EnvFilter;

use crate::app::App;

mod app;
mod view;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    iced::application("LongVision", App::update, App::view)
        .subscription(App::subscription)
        .run_with(App::new)
}
