//! The Reso palette
//!
//! Circuits are drawn with pixels of specific colors. The palette covers
//! twelve hues in two tones each: a saturated tone and a dark tone. Each
//! (hue, tone) pair is a *resel code* ([`Resel`]), and the code's
//! discriminant is the ASCII letter traditionally used for it (`R` for
//! saturated red, `r` for dark red, and so on).
//!
//! The RGB⇄code relation is fixed and shared by every palette. What varies
//! is the *role* a code plays in a circuit: a [`Palette`] assigns each code
//! a [`Role`] (wire, logic element, or inert placeholder). Two palettes
//! exist:
//!
//! - [`Palette::Legacy`] - red/blue wires, cyan logic, magenta ports
//! - [`Palette::Extended`] - orange/sapphire/lime wires, teal logic,
//!   purple ports
//!
//! A board is compiled against exactly one palette.

/// A resel code: one classified pixel value.
///
/// `Empty` (0) marks a pixel whose RGB value is not in the palette; it never
/// forms a region. The remaining 24 codes are the palette's hue/tone pairs,
/// with discriminants equal to their ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Resel {
    /// Unclassified pixel
    #[default]
    Empty = 0,
    /// Saturated red, `R`
    Red = b'R',
    /// Dark red, `r`
    RedDark = b'r',
    /// Saturated green, `G`
    Green = b'G',
    /// Dark green, `g`
    GreenDark = b'g',
    /// Saturated blue, `B`
    Blue = b'B',
    /// Dark blue, `b`
    BlueDark = b'b',
    /// Saturated yellow, `Y`
    Yellow = b'Y',
    /// Dark yellow, `y`
    YellowDark = b'y',
    /// Saturated cyan, `C`
    Cyan = b'C',
    /// Dark cyan, `c`
    CyanDark = b'c',
    /// Saturated magenta, `M`
    Magenta = b'M',
    /// Dark magenta, `m`
    MagentaDark = b'm',
    /// Saturated orange, `O`
    Orange = b'O',
    /// Dark orange, `o`
    OrangeDark = b'o',
    /// Saturated lime, `L`
    Lime = b'L',
    /// Dark lime, `l`
    LimeDark = b'l',
    /// Saturated teal, `T`
    Teal = b'T',
    /// Dark teal, `t`
    TealDark = b't',
    /// Saturated sapphire, `S`
    Sapphire = b'S',
    /// Dark sapphire, `s`
    SapphireDark = b's',
    /// Saturated purple, `P`
    Purple = b'P',
    /// Dark purple, `p`
    PurpleDark = b'p',
    /// Saturated violet, `V`
    Violet = b'V',
    /// Dark violet, `v`
    VioletDark = b'v',
}

impl Resel {
    /// All 24 non-empty codes, in palette order.
    pub const ALL: [Resel; 24] = [
        Resel::Red,
        Resel::RedDark,
        Resel::Green,
        Resel::GreenDark,
        Resel::Blue,
        Resel::BlueDark,
        Resel::Yellow,
        Resel::YellowDark,
        Resel::Cyan,
        Resel::CyanDark,
        Resel::Magenta,
        Resel::MagentaDark,
        Resel::Orange,
        Resel::OrangeDark,
        Resel::Lime,
        Resel::LimeDark,
        Resel::Teal,
        Resel::TealDark,
        Resel::Sapphire,
        Resel::SapphireDark,
        Resel::Purple,
        Resel::PurpleDark,
        Resel::Violet,
        Resel::VioletDark,
    ];

    /// Classify an RGB triple.
    ///
    /// Returns [`Resel::Empty`] for any triple outside the palette; such
    /// pixels are decorative and never join a region.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Resel {
        match (r, g, b) {
            (255, 0, 0) => Resel::Red,
            (128, 0, 0) => Resel::RedDark,
            (0, 255, 0) => Resel::Green,
            (0, 128, 0) => Resel::GreenDark,
            (0, 0, 255) => Resel::Blue,
            (0, 0, 128) => Resel::BlueDark,
            (255, 255, 0) => Resel::Yellow,
            (128, 128, 0) => Resel::YellowDark,
            (0, 255, 255) => Resel::Cyan,
            (0, 128, 128) => Resel::CyanDark,
            (255, 0, 255) => Resel::Magenta,
            (128, 0, 128) => Resel::MagentaDark,
            (255, 128, 0) => Resel::Orange,
            (128, 64, 0) => Resel::OrangeDark,
            (128, 255, 0) => Resel::Lime,
            (64, 128, 0) => Resel::LimeDark,
            (0, 255, 128) => Resel::Teal,
            (0, 128, 64) => Resel::TealDark,
            (0, 128, 255) => Resel::Sapphire,
            (0, 64, 128) => Resel::SapphireDark,
            (128, 0, 255) => Resel::Purple,
            (64, 0, 128) => Resel::PurpleDark,
            (255, 0, 128) => Resel::Violet,
            (128, 0, 64) => Resel::VioletDark,
            _ => Resel::Empty,
        }
    }

    /// The RGB value of this code, or `None` for [`Resel::Empty`].
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Resel::Empty => None,
            Resel::Red => Some((255, 0, 0)),
            Resel::RedDark => Some((128, 0, 0)),
            Resel::Green => Some((0, 255, 0)),
            Resel::GreenDark => Some((0, 128, 0)),
            Resel::Blue => Some((0, 0, 255)),
            Resel::BlueDark => Some((0, 0, 128)),
            Resel::Yellow => Some((255, 255, 0)),
            Resel::YellowDark => Some((128, 128, 0)),
            Resel::Cyan => Some((0, 255, 255)),
            Resel::CyanDark => Some((0, 128, 128)),
            Resel::Magenta => Some((255, 0, 255)),
            Resel::MagentaDark => Some((128, 0, 128)),
            Resel::Orange => Some((255, 128, 0)),
            Resel::OrangeDark => Some((128, 64, 0)),
            Resel::Lime => Some((128, 255, 0)),
            Resel::LimeDark => Some((64, 128, 0)),
            Resel::Teal => Some((0, 255, 128)),
            Resel::TealDark => Some((0, 128, 64)),
            Resel::Sapphire => Some((0, 128, 255)),
            Resel::SapphireDark => Some((0, 64, 128)),
            Resel::Purple => Some((128, 0, 255)),
            Resel::PurpleDark => Some((64, 0, 128)),
            Resel::Violet => Some((255, 0, 128)),
            Resel::VioletDark => Some((128, 0, 64)),
        }
    }

    /// Parse the ASCII letter form (`b'R'`, `b'r'`, ...).
    pub fn from_ascii(byte: u8) -> Option<Resel> {
        Resel::ALL.into_iter().find(|code| *code as u8 == byte)
    }

    /// The ASCII letter of this code, or `None` for [`Resel::Empty`].
    pub fn ascii(self) -> Option<u8> {
        match self {
            Resel::Empty => None,
            code => Some(code as u8),
        }
    }

    /// True for [`Resel::Empty`].
    pub fn is_empty(self) -> bool {
        self == Resel::Empty
    }
}

/// A wire hue. Legacy circuits use red and blue; extended circuits use
/// orange, sapphire, and lime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Blue,
    Orange,
    Sapphire,
    Lime,
}

impl Hue {
    /// The saturated (energised) code of this hue.
    pub fn on_code(self) -> Resel {
        match self {
            Hue::Red => Resel::Red,
            Hue::Blue => Resel::Blue,
            Hue::Orange => Resel::Orange,
            Hue::Sapphire => Resel::Sapphire,
            Hue::Lime => Resel::Lime,
        }
    }

    /// The dark (idle) code of this hue.
    pub fn off_code(self) -> Resel {
        match self {
            Hue::Red => Resel::RedDark,
            Hue::Blue => Resel::BlueDark,
            Hue::Orange => Resel::OrangeDark,
            Hue::Sapphire => Resel::SapphireDark,
            Hue::Lime => Resel::LimeDark,
        }
    }
}

/// The role a resel code plays in a circuit, under a given palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Energised wire pixel of the given hue
    WireOn(Hue),
    /// Idle wire pixel of the given hue
    WireOff(Hue),
    /// Input node: conduit from wires into logic
    Input,
    /// Output node: conduit from logic back onto wires
    Output,
    /// XOR logic element
    Xor,
    /// AND logic element
    And,
    /// Reserved hue with no behaviour
    Inert,
}

/// A role assignment over the resel codes.
///
/// The two palettes are not supersets of one another: a legacy red wire is
/// an inert placeholder under the extended palette, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Red/blue wires; cyan XOR/AND; magenta output/input.
    Legacy,
    /// Orange/sapphire/lime wires; teal XOR/AND; purple output/input.
    #[default]
    Extended,
}

impl Palette {
    /// The wire hues of this palette.
    pub fn wire_hues(self) -> &'static [Hue] {
        match self {
            Palette::Legacy => &[Hue::Red, Hue::Blue],
            Palette::Extended => &[Hue::Orange, Hue::Sapphire, Hue::Lime],
        }
    }

    /// Classify a resel code under this palette.
    pub fn role_of(self, code: Resel) -> Role {
        match self {
            Palette::Legacy => match code {
                Resel::Red => Role::WireOn(Hue::Red),
                Resel::RedDark => Role::WireOff(Hue::Red),
                Resel::Blue => Role::WireOn(Hue::Blue),
                Resel::BlueDark => Role::WireOff(Hue::Blue),
                Resel::Cyan => Role::Xor,
                Resel::CyanDark => Role::And,
                Resel::Magenta => Role::Output,
                Resel::MagentaDark => Role::Input,
                _ => Role::Inert,
            },
            Palette::Extended => match code {
                Resel::Orange => Role::WireOn(Hue::Orange),
                Resel::OrangeDark => Role::WireOff(Hue::Orange),
                Resel::Sapphire => Role::WireOn(Hue::Sapphire),
                Resel::SapphireDark => Role::WireOff(Hue::Sapphire),
                Resel::Lime => Role::WireOn(Hue::Lime),
                Resel::LimeDark => Role::WireOff(Hue::Lime),
                Resel::Teal => Role::Xor,
                Resel::TealDark => Role::And,
                Resel::Purple => Role::Output,
                Resel::PurpleDark => Role::Input,
                _ => Role::Inert,
            },
        }
    }

    /// The hue of a wire code (either tone), or `None` for non-wire codes.
    pub fn wire_hue_of(self, code: Resel) -> Option<Hue> {
        match self.role_of(code) {
            Role::WireOn(hue) | Role::WireOff(hue) => Some(hue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_bijectivity() {
        for code in Resel::ALL {
            let (r, g, b) = code.rgb().expect("non-empty code has an RGB value");
            assert_eq!(Resel::from_rgb(r, g, b), code);
        }
    }

    #[test]
    fn test_unknown_rgb_is_empty() {
        assert_eq!(Resel::from_rgb(1, 2, 3), Resel::Empty);
        assert_eq!(Resel::from_rgb(255, 255, 255), Resel::Empty);
        assert!(Resel::Empty.rgb().is_none());
    }

    #[test]
    fn test_ascii_round_trip() {
        for code in Resel::ALL {
            let letter = code.ascii().unwrap();
            assert_eq!(Resel::from_ascii(letter), Some(code));
        }
        assert_eq!(Resel::from_ascii(b'.'), None);
        assert_eq!(Resel::from_ascii(0), None);
    }

    #[test]
    fn test_legacy_roles() {
        let p = Palette::Legacy;
        assert_eq!(p.role_of(Resel::Red), Role::WireOn(Hue::Red));
        assert_eq!(p.role_of(Resel::RedDark), Role::WireOff(Hue::Red));
        assert_eq!(p.role_of(Resel::Blue), Role::WireOn(Hue::Blue));
        assert_eq!(p.role_of(Resel::Cyan), Role::Xor);
        assert_eq!(p.role_of(Resel::CyanDark), Role::And);
        assert_eq!(p.role_of(Resel::Magenta), Role::Output);
        assert_eq!(p.role_of(Resel::MagentaDark), Role::Input);
        // Extended wire hues are reserved placeholders here
        assert_eq!(p.role_of(Resel::Orange), Role::Inert);
        assert_eq!(p.role_of(Resel::Green), Role::Inert);
        assert_eq!(p.role_of(Resel::Empty), Role::Inert);
    }

    #[test]
    fn test_extended_roles() {
        let p = Palette::Extended;
        assert_eq!(p.role_of(Resel::Orange), Role::WireOn(Hue::Orange));
        assert_eq!(p.role_of(Resel::SapphireDark), Role::WireOff(Hue::Sapphire));
        assert_eq!(p.role_of(Resel::Lime), Role::WireOn(Hue::Lime));
        assert_eq!(p.role_of(Resel::Teal), Role::Xor);
        assert_eq!(p.role_of(Resel::TealDark), Role::And);
        assert_eq!(p.role_of(Resel::Purple), Role::Output);
        assert_eq!(p.role_of(Resel::PurpleDark), Role::Input);
        // Legacy codes are inert under the extended palette
        assert_eq!(p.role_of(Resel::Red), Role::Inert);
        assert_eq!(p.role_of(Resel::Magenta), Role::Inert);
    }

    #[test]
    fn test_every_code_is_classified() {
        for palette in [Palette::Legacy, Palette::Extended] {
            for code in Resel::ALL {
                // role_of is total; this must not panic
                let _ = palette.role_of(code);
            }
        }
    }

    #[test]
    fn test_wire_hue_codes() {
        for palette in [Palette::Legacy, Palette::Extended] {
            for &hue in palette.wire_hues() {
                assert_eq!(palette.role_of(hue.on_code()), Role::WireOn(hue));
                assert_eq!(palette.role_of(hue.off_code()), Role::WireOff(hue));
                assert_eq!(palette.wire_hue_of(hue.on_code()), Some(hue));
                assert_eq!(palette.wire_hue_of(hue.off_code()), Some(hue));
            }
        }
        assert_eq!(Palette::Legacy.wire_hue_of(Resel::Cyan), None);
    }
}
