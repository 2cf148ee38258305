use smart_leds::RGB;

use crate::colors::Channel;

pub trait BrightnessExt {
    /// Scales the color by a brightness factor.
    /// A brightness of 255 means full intensity, 0 means black.
    fn scale(&self, brightness: u8) -> Self;
}

impl BrightnessExt for RGB<Channel> {
    fn scale(&self, brightness: u8) -> Self {
        let factor = brightness as u16 + 1;
        let r = ((self.r as u16 * factor) >> 8) as Channel;
        let g = ((self.g as u16 * factor) >> 8) as Channel;
        let b = ((self.b as u16 * factor) >> 8) as Channel;
        Self { r, g, b }
    }
}

pub trait ChannelsExt {
    /// The color as an `[r, g, b]` triple
    fn channels(&self) -> [Channel; 3];
    fn channel_sum(&self) -> u16;
}

impl ChannelsExt for RGB<Channel> {
    fn channels(&self) -> [Channel; 3] {
        [self.r, self.g, self.b]
    }

    fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}
