use std::env;

use log::{error, info};

use sowing::config::SowingConfig;
use sowing::Sowing;

use crate::session::{Player, Session};

mod canvas;
mod farm;
mod session;

const CONFIG_PATH: &str = "./autosow.json";
const DEFAULT_SESSION: &str = include_str!("../assets/session.json");

fn main() {
    env_logger::init();
    info!("OS: {}", env::consts::OS);
    let config = SowingConfig::load(CONFIG_PATH);
    let session = match env::args().nth(1) {
        Some(path) => Session::load(&path),
        None => {
            info!("Uses built-in session");
            Session::parse(DEFAULT_SESSION)
        }
    };
    let session = match session {
        Ok(session) => session,
        Err(error) => {
            error!("Unable to read session, {error:?}");
            return;
        }
    };
    let farm = match session.create_farm() {
        Ok(farm) => farm,
        Err(error) => {
            error!("Unable to create farm, {error:?}");
            return;
        }
    };
    let mut player = Player::new(Sowing::new(config), farm);
    player.play(&session.steps);
    info!("Bye!");
}
