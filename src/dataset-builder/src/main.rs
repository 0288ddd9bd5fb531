use dataset_builder::{error::Result, settings::Settings, startup::App};

fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.init_tracer()?;

    let app = App::build(settings)?;
    app.run()?;

    Ok(())
}
