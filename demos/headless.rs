use graphics_workshop::config::WorkshopConfig;
use graphics_workshop::driver::Driver;
use graphics_workshop::events::{CanvasEvent, Key};
use graphics_workshop::render::backend::RenderBackend;
use graphics_workshop::render::export::write_png;
use graphics_workshop::WorkshopError;
use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;
use tokio::sync::mpsc;

const OUTPUT: &str = "workshop.png";

#[cfg(feature = "backend_cairo")]
fn backend() -> Result<Box<dyn RenderBackend>, WorkshopError> {
    Ok(Box::new(graphics_workshop::render::backends::cairo::CairoBackend::new()))
}

#[cfg(not(feature = "backend_cairo"))]
fn backend() -> Result<Box<dyn RenderBackend>, WorkshopError> {
    Ok(Box::new(graphics_workshop::render::backends::null::NullBackend::new()?))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), WorkshopError> {
    env_logger::init();

    // Run long enough to see the first bounce
    let config = WorkshopConfig::builder()
        .title("Graphics Workshop (headless)")
        .max_ticks(420)
        .build()?;

    let mut driver = Driver::new(&config, backend()?)?;
    let (keys_tx, keys_rx) = mpsc::channel(8);

    // Hold SPACE for the first second, then let it go
    tokio::spawn(async move {
        let _ = keys_tx.send(CanvasEvent::KeyDown { key: Key::Space }).await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        let _ = keys_tx.send(CanvasEvent::KeyUp { key: Key::Space }).await;
        // keep the channel open until the driver hits its tick limit
        std::future::pending::<()>().await;
    });

    let report = driver.run(keys_rx).await?;
    println!(
        "Ran {} ticks, painted {} frames; circle at x = {} heading {:?}",
        report.ticks,
        report.frames,
        driver.canvas().position_x(),
        driver.canvas().direction()
    );

    let img = driver.snapshot()?;
    write_png(&img, BufWriter::new(File::create(OUTPUT)?))?;
    println!("Wrote last frame to {OUTPUT}");

    Ok(())
}
