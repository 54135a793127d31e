use crate::params::model::ColorStop;

const fn hex(v: u32) -> ColorStop {
    ColorStop::opaque((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Built-in six-color palettes, by name.
pub const COLOR_PRESETS: [(&str, [ColorStop; 6]); 8] = [
    (
        "sunset",
        [
            hex(0x2d0b00),
            hex(0xffb347),
            hex(0xff5e13),
            hex(0xffd580),
            hex(0x6e00ff),
            hex(0x00ffd0),
        ],
    ),
    (
        "ocean",
        [
            hex(0x0abde3),
            hex(0x006ba6),
            hex(0x0c2461),
            hex(0x1e3799),
            hex(0x74b9ff),
            hex(0x00cec9),
        ],
    ),
    (
        "forest",
        [
            hex(0x00d2d3),
            hex(0x54a0ff),
            hex(0x5f27cd),
            hex(0x00b894),
            hex(0x55a3ff),
            hex(0x26de81),
        ],
    ),
    (
        "cosmic",
        [
            hex(0x6c5ce7),
            hex(0xfd79a8),
            hex(0xa55eea),
            hex(0xfff700),
            hex(0x00fff7),
            hex(0xe84393),
        ],
    ),
    (
        "fire",
        [
            hex(0xff3838),
            hex(0xff9500),
            hex(0xffdd59),
            hex(0xff6348),
            hex(0xe17055),
            hex(0xd63031),
        ],
    ),
    (
        "ice",
        [
            hex(0x7bed9f),
            hex(0x70a1ff),
            hex(0x5352ed),
            hex(0x40407a),
            hex(0x74b9ff),
            hex(0xa29bfe),
        ],
    ),
    (
        "earth",
        [
            hex(0x2c2c54),
            hex(0x40407a),
            hex(0x706fd3),
            hex(0xf7f1e3),
            hex(0x6c5ce7),
            hex(0xfdcb6e),
        ],
    ),
    (
        "neon",
        [
            hex(0xff006e),
            hex(0x8338ec),
            hex(0x3a86ff),
            hex(0x06ffa5),
            hex(0xfd79a8),
            hex(0xfdcb6e),
        ],
    ),
];

/// Case-insensitive preset lookup.
pub fn color_preset(name: &str) -> Option<&'static [ColorStop; 6]> {
    let name = name.trim();
    COLOR_PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, stops)| stops)
}

#[cfg(test)]
#[path = "../../tests/unit/session/presets.rs"]
mod tests;
