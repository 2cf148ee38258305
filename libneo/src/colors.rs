use smart_leds::RGB;

/// Element type shared by every entry in the table
pub type Channel = u8;

pub const RED: RGB<Channel> = RGB { r: 255, g: 0, b: 0 };
pub const ORANGE: RGB<Channel> = RGB {
    r: 255,
    g: 55,
    b: 0,
};
pub const YELLOW: RGB<Channel> = RGB {
    r: 255,
    g: 128,
    b: 0,
};
pub const GREEN: RGB<Channel> = RGB { r: 0, g: 255, b: 0 };
pub const CYAN: RGB<Channel> = RGB {
    r: 0,
    g: 255,
    b: 180,
};
pub const BLUE: RGB<Channel> = RGB { r: 0, g: 0, b: 255 };
pub const PURPLE: RGB<Channel> = RGB {
    r: 128,
    g: 0,
    b: 255,
};
pub const PINK: RGB<Channel> = RGB {
    r: 255,
    g: 0,
    b: 128,
};

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(RGB<Channel>, [Channel; 3]); 8] = [
        (RED, [255, 0, 0]),
        (ORANGE, [255, 55, 0]),
        (YELLOW, [255, 128, 0]),
        (GREEN, [0, 255, 0]),
        (CYAN, [0, 255, 180]),
        (BLUE, [0, 0, 255]),
        (PURPLE, [128, 0, 255]),
        (PINK, [255, 0, 128]),
    ];

    #[test]
    fn test_constants_match_table() {
        for (color, [r, g, b]) in TABLE {
            assert_eq!(color, RGB { r, g, b });
        }
    }

    #[test]
    fn test_named_lookups() {
        assert_eq!((RED.r, RED.g, RED.b), (255, 0, 0));
        assert_eq!((CYAN.r, CYAN.g, CYAN.b), (0, 255, 180));
        assert_eq!((PURPLE.r, PURPLE.g, PURPLE.b), (128, 0, 255));
    }

    #[test]
    fn test_channel_sum_regression() {
        let sum: u32 = TABLE
            .iter()
            .map(|(c, _)| c.r as u32 + c.g as u32 + c.b as u32)
            .sum();
        assert_eq!(sum, 2659);
    }
}
