//! Loads the default world map against the recording host and prints the
//! style content that would reach a real rendering surface.
//!
//! Usage:
//!   cargo run --example render_world

use std::sync::Arc;
use thenmap_engine::host::mock::MockHost;
use thenmap_engine::{ContainerRef, MapLoader, MapOptions};
use thenmap_types::ColorEntry;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> thenmap_engine::MapResult<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .compact()
        .init();

    let host = Arc::new(MockHost::new().with_container("map", 1));
    let mut loader = MapLoader::new(host.clone());

    let options = MapOptions {
        width: Some(800),
        data: Some(vec![
            ColorEntry::new("se", "#33aa66"),
            ColorEntry::new("no", "steelblue"),
            ColorEntry::new("dk", "rgb(200,80,80)"),
        ]),
        ..Default::default()
    };

    loader.load(ContainerRef::ById("map".into()), options).await?;

    if let Some(styles) = host.installed_styles().last() {
        println!("{styles}");
    }
    Ok(())
}
