use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Theme collaborator resolving the color of the n-th shown series.
pub trait SeriesPalette {
    fn color_for(&self, series_render_index: usize) -> Color;
}

impl<F> SeriesPalette for F
where
    F: Fn(usize) -> Color,
{
    fn color_for(&self, series_render_index: usize) -> Color {
        self(series_render_index)
    }
}

/// Fixed color list, cycled when there are more series than colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Falls back to [`Palette::default`] when `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::from_rgb8(0xc2, 0x35, 0x31),
                Color::from_rgb8(0x2f, 0x45, 0x54),
                Color::from_rgb8(0x61, 0xa0, 0xa8),
                Color::from_rgb8(0xd4, 0x82, 0x65),
                Color::from_rgb8(0x91, 0xc7, 0xae),
                Color::from_rgb8(0x74, 0x9f, 0x83),
                Color::from_rgb8(0xca, 0x86, 0x22),
                Color::from_rgb8(0xbd, 0xa2, 0x9a),
                Color::from_rgb8(0x6e, 0x70, 0x74),
                Color::from_rgb8(0x54, 0x65, 0x70),
            ],
        }
    }
}

impl SeriesPalette for Palette {
    fn color_for(&self, series_render_index: usize) -> Color {
        match self.colors.len() {
            // Deserialized palettes may arrive empty.
            0 => Self::default().color_for(series_render_index),
            len => self.colors[series_render_index % len],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, SeriesPalette};
    use crate::render::Color;

    #[test]
    fn palette_cycles_past_its_length() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let palette = Palette::new(vec![red, blue]);
        assert_eq!(palette.color_for(0), red);
        assert_eq!(palette.color_for(3), blue);
    }

    #[test]
    fn empty_palette_uses_defaults() {
        assert_eq!(Palette::new(Vec::new()), Palette::default());
    }
}
