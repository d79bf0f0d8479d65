// File: crates/linechart-core/src/theme.rs
// Summary: Colors for chart rendering (accent, series palette, axes, error panel).

/// 24-bit RGB color with a CSS hex form for vector backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `#rrggbb` form.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Stroke for the single-series line.
    pub accent: Rgb,
    /// Cycled by `series_index % palette.len()` for multi-series lines.
    pub palette: [Rgb; 6],
    pub axis_line: Rgb,
    pub text: Rgb,
    pub error_background: Rgb,
    pub error_text: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            accent: Rgb::new(70, 130, 180),        // steelblue
            palette: [
                Rgb::new(0, 0, 255),               // blue
                Rgb::new(0, 128, 0),               // green
                Rgb::new(255, 0, 0),               // red
                Rgb::new(128, 0, 128),             // purple
                Rgb::new(255, 165, 0),             // orange
                Rgb::new(0, 128, 128),             // teal
            ],
            axis_line: Rgb::new(60, 60, 70),
            text: Rgb::new(20, 20, 30),
            error_background: Rgb::new(254, 226, 226),
            error_text: Rgb::new(185, 28, 28),
        }
    }

    /// Palette color for a series index, wrapping past the palette end.
    pub fn series_color(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
