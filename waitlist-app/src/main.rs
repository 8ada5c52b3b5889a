use waitlist_client::HttpSubmitter;
use waitlist_tui::WaitlistTui;
use waitlist_types::Session;

mod config;
mod flag;

use config::Config;
use flag::FileFlag;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    log::info!("waitlist endpoint: {}", config.base_url);

    let store = FileFlag::in_dir(&config.state_dir);
    let session = Session::new(store)?;
    let submitter = HttpSubmitter::new(config.base_url);

    WaitlistTui::new().run(session, submitter)?;
    Ok(())
}
