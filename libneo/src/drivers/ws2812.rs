use core::marker::PhantomData;

use embedded_hal_async::spi::{ErrorType, SpiBus};
use smart_leds::RGB;

use crate::{colors::Channel, StripConfig};

/// SPI byte for each pair of color bits, MSB first
const PATTERNS: [u8; 4] = [0b1000_1000, 0b1000_1110, 0b1110_1000, 0b1110_1110];
/// Bytes on the wire per LED (3 channels, 4 bytes each)
pub const BYTES_PER_LED: usize = 12;
/// Low time after a frame that latches the strip
const RESET_LEN: usize = 140;

/// Trait for color order reordering
pub trait OrderedColors {
    fn reorder(color: RGB<Channel>) -> [Channel; 3];
}

/// Marker struct for RGB order
pub struct Rgb;

/// Marker struct for GRB order (WS2812B, most NeoPixel strips)
pub struct Grb;

impl OrderedColors for Rgb {
    fn reorder(color: RGB<Channel>) -> [Channel; 3] {
        [color.r, color.g, color.b]
    }
}

impl OrderedColors for Grb {
    fn reorder(color: RGB<Channel>) -> [Channel; 3] {
        [color.g, color.r, color.b]
    }
}

/// Encodes a single color into its 12 SPI bytes
pub fn encode<C: OrderedColors>(color: RGB<Channel>) -> [u8; BYTES_PER_LED] {
    encode_channels(C::reorder(color))
}

/// Encodes three channels, already in wire order
fn encode_channels(channels: [Channel; 3]) -> [u8; BYTES_PER_LED] {
    let mut led_bytes = [0; BYTES_PER_LED];
    for (i, mut channel) in channels.into_iter().enumerate() {
        for ii in 0..4 {
            led_bytes[i * 4 + ii] = PATTERNS[((channel & 0b1100_0000) >> 6) as usize];
            channel <<= 2;
        }
    }
    led_bytes
}

/// N = 12 * NUM_LEDS
pub struct Ws2812<SPI: SpiBus<u8>, C: OrderedColors, const N: usize> {
    spi: SPI,
    data: [u8; N],
    _order: PhantomData<C>,
}

impl<SPI: SpiBus<u8>, C: OrderedColors, const N: usize> Ws2812<SPI, C, N> {
    /// Create a new WS2812 driver, with the given SPI bus
    ///
    /// A buffer that is not a whole number of LEDs is rejected at compile time:
    ///
    /// ```compile_fail
    /// use embedded_hal_async::spi::{ErrorKind, ErrorType, SpiBus};
    /// use libneo::drivers::ws2812::{Grb, Ws2812};
    ///
    /// struct Bus;
    /// impl ErrorType for Bus {
    ///     type Error = ErrorKind;
    /// }
    /// impl SpiBus<u8> for Bus {
    ///     async fn read(&mut self, _: &mut [u8]) -> Result<(), ErrorKind> { Ok(()) }
    ///     async fn write(&mut self, _: &[u8]) -> Result<(), ErrorKind> { Ok(()) }
    ///     async fn transfer(&mut self, _: &mut [u8], _: &[u8]) -> Result<(), ErrorKind> { Ok(()) }
    ///     async fn transfer_in_place(&mut self, _: &mut [u8]) -> Result<(), ErrorKind> { Ok(()) }
    ///     async fn flush(&mut self) -> Result<(), ErrorKind> { Ok(()) }
    /// }
    ///
    /// let _ws: Ws2812<Bus, Grb, 13> = Ws2812::new(Bus);
    /// ```
    pub fn new(spi: SPI) -> Self {
        const { assert!(N % BYTES_PER_LED == 0, "N must be 12 * NUM_LEDS") };
        Self {
            spi,
            data: [0; N],
            _order: PhantomData,
        }
    }

    pub const fn num_leds(&self) -> usize {
        N / BYTES_PER_LED
    }

    /// Writes one frame. Colors past the end of the strip are ignored, LEDs past the end
    /// of `iter` keep what they were last sent.
    pub async fn write(
        &mut self,
        iter: impl Iterator<Item = RGB<Channel>>,
    ) -> Result<(), <SPI as ErrorType>::Error> {
        let mut _count = 0usize;
        for (led_bytes, color) in self.data.chunks_exact_mut(BYTES_PER_LED).zip(iter) {
            led_bytes.copy_from_slice(&encode::<C>(color));
            _count += 1;
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("ws2812: encoded {=usize} of {=usize} leds", _count, N / BYTES_PER_LED);

        self.flush().await
    }

    /// Fills the whole strip from `config`. The byte order comes from `config.order`,
    /// not from `C`.
    pub async fn write_config(
        &mut self,
        config: &StripConfig,
    ) -> Result<(), <SPI as ErrorType>::Error> {
        let led = encode_channels(config.order.reorder(config.pixel()));
        for led_bytes in self.data.chunks_exact_mut(BYTES_PER_LED) {
            led_bytes.copy_from_slice(&led);
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("ws2812: filled {=usize} leds with {}", N / BYTES_PER_LED, config);

        self.flush().await
    }

    async fn flush(&mut self) -> Result<(), <SPI as ErrorType>::Error> {
        self.spi.write(&self.data).await?;
        let blank = [0_u8; RESET_LEN];
        self.spi.write(&blank).await
    }

    pub fn release(self) -> SPI {
        self.spi
    }
}
