//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    easeplot::app::run()
}
