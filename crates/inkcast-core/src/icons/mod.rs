//! Weather icon resolution and icon assets
//!
//! Provider condition codes (e.g. `"01d"`) are decoded into a
//! [`ConditionFamily`] plus [`TimeOfDay`], combined with a [`WindTier`], and
//! mapped to a concrete [`WeatherIcon`]. The wind override always wins: a
//! gale shows the windy icon no matter what the sky is doing.

pub mod enhance;
mod set;

pub use set::{IconSet, IconSizes, IconSlot};

/// Wind speed (mph) at which clear and cloudy skies get a windy variant
pub const BREEZY_WIND_MPH: f32 = 10.0;

/// Wind speed (mph) at which the windy icon replaces any condition
pub const GALE_WIND_MPH: f32 = 20.0;

/// Weather family encoded in the first two characters of a condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionFamily {
    /// `01`
    Clear,
    /// `02`
    FewClouds,
    /// `03` scattered, `04` broken
    Clouds,
    /// `09`
    Drizzle,
    /// `10`
    Rain,
    /// `11`
    Thunderstorm,
    /// `13`
    Snow,
    /// `50`
    Mist,
    Unknown,
}

impl ConditionFamily {
    /// Decode the family prefix of a condition code
    pub fn from_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => Self::Clear,
            Some("02") => Self::FewClouds,
            Some("03") | Some("04") => Self::Clouds,
            Some("09") => Self::Drizzle,
            Some("10") => Self::Rain,
            Some("11") => Self::Thunderstorm,
            Some("13") => Self::Snow,
            Some("50") => Self::Mist,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    /// A trailing `n` marks a night code
    pub fn from_code(code: &str) -> Self {
        if code.ends_with('n') {
            Self::Night
        } else {
            Self::Day
        }
    }
}

/// Wind speed bucket, in mph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindTier {
    /// Below [`BREEZY_WIND_MPH`]
    Calm,
    /// From [`BREEZY_WIND_MPH`] up to [`GALE_WIND_MPH`]
    Breezy,
    /// [`GALE_WIND_MPH`] and above
    Gale,
}

impl WindTier {
    pub fn from_mph(speed: f32) -> Self {
        if speed >= GALE_WIND_MPH {
            Self::Gale
        } else if speed >= BREEZY_WIND_MPH {
            Self::Breezy
        } else {
            Self::Calm
        }
    }
}

/// Weather condition icon assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    ClearDay,
    ClearNight,
    ClearWindy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Cloudy,
    CloudyWindy,
    DrizzleDay,
    DrizzleNight,
    RainDay,
    RainNight,
    Thunderstorm,
    SnowDay,
    SnowNight,
    Mist,
    Windy,
}

impl WeatherIcon {
    /// Every weather icon, in asset-loading order
    pub const ALL: [WeatherIcon; 16] = [
        WeatherIcon::ClearDay,
        WeatherIcon::ClearNight,
        WeatherIcon::ClearWindy,
        WeatherIcon::PartlyCloudyDay,
        WeatherIcon::PartlyCloudyNight,
        WeatherIcon::Cloudy,
        WeatherIcon::CloudyWindy,
        WeatherIcon::DrizzleDay,
        WeatherIcon::DrizzleNight,
        WeatherIcon::RainDay,
        WeatherIcon::RainNight,
        WeatherIcon::Thunderstorm,
        WeatherIcon::SnowDay,
        WeatherIcon::SnowNight,
        WeatherIcon::Mist,
        WeatherIcon::Windy,
    ];

    /// Asset name, also the file stem in the icon directory
    pub fn name(&self) -> &'static str {
        match self {
            WeatherIcon::ClearDay => "clear_day",
            WeatherIcon::ClearNight => "clear_night",
            WeatherIcon::ClearWindy => "clear_windy",
            WeatherIcon::PartlyCloudyDay => "partly_cloudy_day",
            WeatherIcon::PartlyCloudyNight => "partly_cloudy_night",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::CloudyWindy => "cloudy_windy",
            WeatherIcon::DrizzleDay => "drizzle_day",
            WeatherIcon::DrizzleNight => "drizzle_night",
            WeatherIcon::RainDay => "rain_day",
            WeatherIcon::RainNight => "rain_night",
            WeatherIcon::Thunderstorm => "thunderstorm",
            WeatherIcon::SnowDay => "snow_day",
            WeatherIcon::SnowNight => "snow_night",
            WeatherIcon::Mist => "mist",
            WeatherIcon::Windy => "windy",
        }
    }
}

/// Small glyphs used by the detail grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiIcon {
    Sunrise,
    Sunset,
    Wind,
    Humidity,
    Visibility,
    AirQuality,
}

impl UiIcon {
    pub const ALL: [UiIcon; 6] = [
        UiIcon::Sunrise,
        UiIcon::Sunset,
        UiIcon::Wind,
        UiIcon::Humidity,
        UiIcon::Visibility,
        UiIcon::AirQuality,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UiIcon::Sunrise => "sunrise",
            UiIcon::Sunset => "sunset",
            UiIcon::Wind => "wind",
            UiIcon::Humidity => "humidity",
            UiIcon::Visibility => "visibility",
            UiIcon::AirQuality => "aqi",
        }
    }

    /// Sun glyphs are recolored to flat yellow after enhancement
    pub fn is_sun(&self) -> bool {
        matches!(self, UiIcon::Sunrise | UiIcon::Sunset)
    }
}

/// Map decoded condition context to an icon.
///
/// Priority is fixed: a gale overrides every condition, then the family
/// decides, with day/night and breezy variants where they exist.
pub fn icon_for(family: ConditionFamily, time: TimeOfDay, wind: WindTier) -> WeatherIcon {
    use ConditionFamily as F;
    use TimeOfDay::{Day, Night};

    if wind == WindTier::Gale {
        return WeatherIcon::Windy;
    }

    match (family, time) {
        (F::Clear, Night) => WeatherIcon::ClearNight,
        (F::Clear, Day) if wind == WindTier::Breezy => WeatherIcon::ClearWindy,
        (F::Clear, Day) => WeatherIcon::ClearDay,
        (F::FewClouds, Night) => WeatherIcon::PartlyCloudyNight,
        (F::FewClouds, Day) => WeatherIcon::PartlyCloudyDay,
        (F::Clouds, Day) if wind == WindTier::Breezy => WeatherIcon::CloudyWindy,
        (F::Clouds, _) => WeatherIcon::Cloudy,
        (F::Drizzle, Night) => WeatherIcon::DrizzleNight,
        (F::Drizzle, Day) => WeatherIcon::DrizzleDay,
        (F::Rain, Night) => WeatherIcon::RainNight,
        (F::Rain, Day) => WeatherIcon::RainDay,
        (F::Thunderstorm, _) => WeatherIcon::Thunderstorm,
        (F::Snow, Night) => WeatherIcon::SnowNight,
        (F::Snow, Day) => WeatherIcon::SnowDay,
        (F::Mist, _) => WeatherIcon::Mist,
        (F::Unknown, _) => WeatherIcon::Cloudy,
    }
}

/// Resolve a provider condition code to an icon.
///
/// `wind_mph` is the wind speed in mph. With `force_day` a night code is
/// treated as its day counterpart, used on forecast cards where a night
/// glyph would misrepresent the whole day. Unknown codes fall back to
/// [`WeatherIcon::Cloudy`].
pub fn resolve(code: &str, wind_mph: f32, force_day: bool) -> WeatherIcon {
    let code = code.trim();
    let time = if force_day {
        TimeOfDay::Day
    } else {
        TimeOfDay::from_code(code)
    };

    icon_for(
        ConditionFamily::from_code(code),
        time,
        WindTier::from_mph(wind_mph),
    )
}
