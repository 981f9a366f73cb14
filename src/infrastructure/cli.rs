use clap::Parser;

use crate::{
    domain::location::Permission, infrastructure::config::LocationConfig, utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second", default_value_t = 4.0)]
    pub tick_rate: f64,

    #[arg(short, long, value_name = "FLOAT", help = "Frame rate, i.e. number of frames per second", default_value_t = 30.0)]
    pub frame_rate: f64,

    #[arg(long, value_name = "DEGREES", allow_hyphen_values = true, help = "Latitude reported as the device position")]
    pub latitude: Option<f64>,

    #[arg(long, value_name = "DEGREES", allow_hyphen_values = true, help = "Longitude reported as the device position")]
    pub longitude: Option<f64>,

    #[arg(long, help = "Answer the startup permission request with a denial")]
    pub deny_permission: bool,

    #[arg(long, help = "Make every position fetch fail")]
    pub fail_fetch: bool,
}

impl Cli {
    /// Apply the location flags on top of the configured provider settings
    pub fn apply_location_overrides(&self, location: &mut LocationConfig) {
        if let Some(latitude) = self.latitude {
            location.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            location.longitude = longitude;
        }
        if self.deny_permission {
            location.permission = Permission::Denied;
        }
        if self.fail_fetch {
            location.fail = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mapnotes"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert!(!cli.deny_permission);
    }

    #[test]
    fn test_location_overrides() {
        let cli = Cli::parse_from([
            "mapnotes",
            "--latitude",
            "-33.5",
            "--longitude",
            "151.2",
            "--deny-permission",
            "--fail-fetch",
        ]);
        let mut location = LocationConfig::default();

        cli.apply_location_overrides(&mut location);

        assert_eq!(
            location,
            LocationConfig {
                latitude: -33.5,
                longitude: 151.2,
                permission: Permission::Denied,
                fail: true,
                ..LocationConfig::default()
            }
        );
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::parse_from(["mapnotes"]);
        let mut location = LocationConfig::default();

        cli.apply_location_overrides(&mut location);

        assert_eq!(location, LocationConfig::default());
    }
}
