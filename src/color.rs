use image::Rgb;

/// Color used for the source cloud points.
pub const SOURCE_BLUE: Rgb<u8> = Rgb([0, 0, 255]);
/// Color used for the camera positions.
pub const CAMERA_RED: Rgb<u8> = Rgb([255, 0, 0]);

/// matplotlib's qualitative "tab20" colormap.
const TAB20: [[u8; 3]; 20] = [
    [31, 119, 180],
    [174, 199, 232],
    [255, 127, 14],
    [255, 187, 120],
    [44, 160, 44],
    [152, 223, 138],
    [214, 39, 40],
    [255, 152, 150],
    [148, 103, 189],
    [197, 176, 213],
    [140, 86, 75],
    [196, 156, 148],
    [227, 119, 194],
    [247, 182, 210],
    [127, 127, 127],
    [199, 199, 199],
    [188, 189, 34],
    [219, 219, 141],
    [23, 190, 207],
    [158, 218, 229],
];

/// Cyclic list of colors, one per scan line.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn tab20() -> Self {
        Self {
            colors: TAB20.iter().map(|rgb| Rgb(*rgb)).collect(),
        }
    }

    pub fn from_colors(colors: Vec<Rgb<u8>>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of the given line, cycling over the palette.
    pub fn color(&self, index: usize) -> Rgb<u8> {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tab20()
    }
}
