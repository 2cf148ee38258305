pub mod ws2812;
