#![no_std]

use core::{fmt, str::FromStr};

use postcard_bindgen::PostcardBindings;
use serde::{Deserialize, Serialize};
use smart_leds::RGB;

pub mod colors;
pub mod drivers;
pub mod ext;

use colors::{Channel, BLUE, CYAN, GREEN, ORANGE, PINK, PURPLE, RED, YELLOW};
use drivers::ws2812::{Grb, OrderedColors, Rgb};
use ext::{BrightnessExt, ChannelsExt};

/// One of the eight table colors
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, PostcardBindings,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NeoColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl NeoColor {
    pub const COUNT: usize = 8;

    /// All colors in table order
    pub const ALL: [NeoColor; Self::COUNT] = [
        NeoColor::Red,
        NeoColor::Orange,
        NeoColor::Yellow,
        NeoColor::Green,
        NeoColor::Cyan,
        NeoColor::Blue,
        NeoColor::Purple,
        NeoColor::Pink,
    ];

    pub const fn get(&self) -> RGB<Channel> {
        match self {
            NeoColor::Red => RED,
            NeoColor::Orange => ORANGE,
            NeoColor::Yellow => YELLOW,
            NeoColor::Green => GREEN,
            NeoColor::Cyan => CYAN,
            NeoColor::Blue => BLUE,
            NeoColor::Purple => PURPLE,
            NeoColor::Pink => PINK,
        }
    }

    pub fn channels(&self) -> [Channel; 3] {
        self.get().channels()
    }

    pub const fn name(&self) -> &'static str {
        match self {
            NeoColor::Red => "RED",
            NeoColor::Orange => "ORANGE",
            NeoColor::Yellow => "YELLOW",
            NeoColor::Green => "GREEN",
            NeoColor::Cyan => "CYAN",
            NeoColor::Blue => "BLUE",
            NeoColor::Purple => "PURPLE",
            NeoColor::Pink => "PINK",
        }
    }

    /// Next color in table order, wrapping from pink back to red
    pub fn cycle(&self) -> NeoColor {
        match self {
            NeoColor::Red => NeoColor::Orange,
            NeoColor::Orange => NeoColor::Yellow,
            NeoColor::Yellow => NeoColor::Green,
            NeoColor::Green => NeoColor::Cyan,
            NeoColor::Cyan => NeoColor::Blue,
            NeoColor::Blue => NeoColor::Purple,
            NeoColor::Purple => NeoColor::Pink,
            NeoColor::Pink => NeoColor::Red,
        }
    }
}

impl From<NeoColor> for RGB<Channel> {
    fn from(value: NeoColor) -> Self {
        value.get()
    }
}

impl fmt::Display for NeoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a label names none of the table colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownColor;

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown color name")
    }
}

impl core::error::Error for UnknownColor {}

impl FromStr for NeoColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NeoColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownColor)
    }
}

/// Byte order the strip expects on the wire
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, PostcardBindings,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    Rgb,
    #[default]
    Grb,
}

impl ColorOrder {
    pub fn reorder(&self, color: RGB<Channel>) -> [Channel; 3] {
        match self {
            ColorOrder::Rgb => Rgb::reorder(color),
            ColorOrder::Grb => Grb::reorder(color),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, PostcardBindings)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    pub color: NeoColor,
    pub brightness: u8,
    pub order: ColorOrder,
}

#[allow(clippy::new_without_default)]
impl StripConfig {
    pub const fn new() -> Self {
        Self {
            color: NeoColor::Red,
            brightness: 255,
            order: ColorOrder::Grb,
        }
    }

    /// The configured color at the configured brightness
    pub fn pixel(&self) -> RGB<Channel> {
        self.color.get().scale(self.brightness)
    }

    /// Endless run of `pixel()`, for filling a whole strip
    pub fn pixels(&self) -> impl Iterator<Item = RGB<Channel>> {
        core::iter::repeat(self.pixel())
    }
}
