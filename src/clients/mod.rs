mod steam;

pub use steam::{ClientPermit, SteamClient};
