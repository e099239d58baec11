//! Preview size selection.
//!
//! Sensors report their supported preview sizes in landscape orientation and
//! rarely offer one that exactly matches the screen, so the best size is the
//! one whose aspect ratio is closest to the screen's, restricted to a pixel
//! count window that excludes uselessly small and needlessly large previews.

use std::cmp::Reverse;

use super::types::Resolution;
use crate::error::GeometryError;

/// Smallest preview worth decoding from (a "normal" 470x320 screen).
pub const DEFAULT_MIN_PREVIEW_PIXELS: u32 = 470 * 320;

/// Largest preview worth processing per frame (720p).
pub const DEFAULT_MAX_PREVIEW_PIXELS: u32 = 1280 * 720;

/// Picks a preview resolution from the sizes a camera supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSizeSelector {
    pub min_pixels: u32,
    pub max_pixels: u32,
}

impl Default for PreviewSizeSelector {
    fn default() -> Self {
        Self {
            min_pixels: DEFAULT_MIN_PREVIEW_PIXELS,
            max_pixels: DEFAULT_MAX_PREVIEW_PIXELS,
        }
    }
}

impl PreviewSizeSelector {
    pub fn new(min_pixels: u32, max_pixels: u32) -> Self {
        Self {
            min_pixels,
            max_pixels,
        }
    }

    /// Best candidate for `screen`, or `fallback` when there are no
    /// candidates or none fits the pixel window.
    pub fn select_best(
        &self,
        candidates: &[Resolution],
        screen: Resolution,
        fallback: Resolution,
    ) -> Resolution {
        match self.find_best(candidates, screen) {
            Some(best) => best,
            None => {
                log::info!("No suitable preview sizes, using default: {}", fallback);
                fallback
            }
        }
    }

    /// Like [`select_best`](Self::select_best) for cameras that may not
    /// report a default size. Fails when nothing is usable.
    pub fn select_or_default(
        &self,
        candidates: &[Resolution],
        screen: Resolution,
        default: Option<Resolution>,
    ) -> Result<Resolution, GeometryError> {
        if let Some(best) = self.find_best(candidates, screen) {
            return Ok(best);
        }
        match default {
            Some(fallback) if !fallback.is_empty() => {
                log::info!("No suitable preview sizes, using default: {}", fallback);
                Ok(fallback)
            }
            _ => {
                log::warn!(
                    "No usable preview size among {} candidate(s) and no default",
                    candidates.len()
                );
                Err(GeometryError::NoPreviewSize {
                    candidates: candidates.len(),
                })
            }
        }
    }

    /// Candidate with the aspect ratio closest to `screen`, scanning from the
    /// largest pixel count down. The first (largest) candidate wins a tie.
    /// Returns the candidate as reported, even if it was portrait.
    ///
    /// # Panics
    /// Panics if `screen` has a zero side.
    pub fn find_best(&self, candidates: &[Resolution], screen: Resolution) -> Option<Resolution> {
        if candidates.is_empty() {
            return None;
        }

        // Stable sort keeps input order among equal pixel counts.
        let mut sorted = candidates.to_vec();
        sorted.sort_by_key(|r| Reverse(r.pixels()));

        log::debug!(
            "Supported preview sizes: {}",
            sorted
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let landscape = screen.to_landscape();
        if landscape != screen {
            log::info!("Screen reports portrait {}; assuming {}", screen, landscape);
        }
        let screen_ratio = landscape.ratio();

        let min = u64::from(self.min_pixels);
        let max = u64::from(self.max_pixels);
        let mut best: Option<(Resolution, f32)> = None;
        for candidate in sorted {
            let pixels = candidate.pixels();
            if pixels < min || pixels > max {
                continue;
            }
            let diff = (candidate.to_landscape().ratio() - screen_ratio).abs();
            log::debug!("{} has aspect ratio diff {}", candidate, diff);
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((candidate, diff)),
            }
        }

        let best = best.map(|(r, _)| r);
        if let Some(r) = best {
            log::info!("Found best approximate preview size: {}", r);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Resolution = Resolution::new(1280, 800);
    const FALLBACK: Resolution = Resolution::new(320, 240);

    #[test]
    fn test_default_bounds() {
        let selector = PreviewSizeSelector::default();
        assert_eq!(selector.min_pixels, 150_400);
        assert_eq!(selector.max_pixels, 921_600);
    }

    #[test]
    fn test_single_matching_candidate() {
        let selector = PreviewSizeSelector::new(150_400, 921_600);
        let chosen = selector.select_best(&[Resolution::new(1280, 720)], SCREEN, FALLBACK);
        assert_eq!(chosen, Resolution::new(1280, 720));
    }

    #[test]
    fn test_exact_screen_match() {
        let selector = PreviewSizeSelector::new(150_400, 1_024_000);
        let chosen = selector.select_best(&[Resolution::new(1280, 800)], SCREEN, FALLBACK);
        assert_eq!(chosen, Resolution::new(1280, 800));
    }

    #[test]
    fn test_empty_candidates_returns_fallback() {
        let selector = PreviewSizeSelector::default();
        assert_eq!(selector.select_best(&[], SCREEN, FALLBACK), FALLBACK);
    }

    #[test]
    fn test_all_filtered_returns_fallback() {
        let selector = PreviewSizeSelector::default();
        let candidates = [Resolution::new(176, 144), Resolution::new(3840, 2160)];
        assert_eq!(selector.select_best(&candidates, SCREEN, FALLBACK), FALLBACK);
    }

    #[test]
    fn test_closest_ratio_wins() {
        let selector = PreviewSizeSelector::default();
        // 16:10 screen: 768x480 is an exact 1.6, 640x480 is 1.33, 1280x720 is 1.78
        let candidates = [
            Resolution::new(640, 480),
            Resolution::new(1280, 720),
            Resolution::new(768, 480),
        ];
        assert_eq!(
            selector.select_best(&candidates, SCREEN, FALLBACK),
            Resolution::new(768, 480)
        );
    }

    #[test]
    fn test_tie_prefers_larger_candidate() {
        let selector = PreviewSizeSelector::default();
        let candidates = [Resolution::new(640, 480), Resolution::new(960, 720)];
        assert_eq!(
            selector.select_best(&candidates, Resolution::new(1024, 768), FALLBACK),
            Resolution::new(960, 720)
        );
    }

    #[test]
    fn test_equal_pixel_tie_keeps_input_order() {
        let selector = PreviewSizeSelector::default();
        // Same pixel count and same landscape ratio; the first listed wins.
        let candidates = [Resolution::new(480, 640), Resolution::new(640, 480)];
        assert_eq!(
            selector.select_best(&candidates, Resolution::new(800, 600), FALLBACK),
            Resolution::new(480, 640)
        );
    }

    #[test]
    fn test_portrait_candidate_compared_in_landscape() {
        let selector = PreviewSizeSelector::default();
        let candidates = [Resolution::new(640, 480), Resolution::new(480, 768)];
        // 480x768 is 1.6 once rotated, but is returned as reported
        assert_eq!(
            selector.select_best(&candidates, SCREEN, FALLBACK),
            Resolution::new(480, 768)
        );
    }

    #[test]
    fn test_portrait_screen_is_normalized() {
        let selector = PreviewSizeSelector::default();
        let candidates = [Resolution::new(640, 480), Resolution::new(768, 480)];
        assert_eq!(
            selector.select_best(&candidates, SCREEN.rotate(), FALLBACK),
            Resolution::new(768, 480)
        );
    }

    #[test]
    fn test_select_or_default() {
        let selector = PreviewSizeSelector::default();
        assert_eq!(
            selector
                .select_or_default(&[], SCREEN, Some(FALLBACK))
                .unwrap(),
            FALLBACK
        );
        assert!(matches!(
            selector.select_or_default(&[], SCREEN, None),
            Err(GeometryError::NoPreviewSize { candidates: 0 })
        ));
        assert!(matches!(
            selector.select_or_default(&[Resolution::new(176, 144)], SCREEN, Some(Resolution::default())),
            Err(GeometryError::NoPreviewSize { candidates: 1 })
        ));
    }
}
