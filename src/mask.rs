// src/mask.rs
//
// Borrowed view over the caller's rectified binary mask. The mask is
// produced fresh each frame by the thresholding stage and never outlives
// one `locate_lanes` call, so the tracker only ever borrows it.

/// Top-down binary mask for one frame.
///
/// Row-major, `data[y * width + x]`, origin top-left, y increasing
/// downward. Any nonzero byte counts as a set pixel, so both 0/1 and 0/255
/// encodings work unchanged.
#[derive(Debug, Clone, Copy)]
pub struct BinaryMask<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> BinaryMask<'a> {
    /// Panics if `data` is shorter than `width * height`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        assert!(
            data.len() >= (width as usize) * (height as usize),
            "mask buffer too small: {} bytes for {}x{}",
            data.len(),
            width,
            height
        );
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data[y as usize * self.width as usize + x as usize] != 0
    }

    /// Coordinates of every set pixel, scanned row by row.
    ///
    /// Both search paths run off this list rather than re-reading the mask,
    /// mirroring the reference's single `nonzero()` pass per frame.
    pub fn nonzero_pixels(&self) -> Vec<(u32, u32)> {
        let mut pixels = Vec::new();
        for y in 0..self.height {
            let row = &self.data[y as usize * self.width as usize..][..self.width as usize];
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    pixels.push((x as u32, y));
                }
            }
        }
        pixels
    }

    /// Column sums over the bottom half of the mask.
    ///
    /// The far (top) half of a bird's-eye view carries foreshortened,
    /// sparse markings; summing only rows `height/2..height` keeps the
    /// histogram peaks anchored on the near road surface.
    pub fn bottom_half_histogram(&self) -> Vec<u32> {
        let mut histogram = vec![0u32; self.width as usize];
        for y in self.height / 2..self.height {
            let row = &self.data[y as usize * self.width as usize..][..self.width as usize];
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    histogram[x] += 1;
                }
            }
        }
        histogram
    }

}
