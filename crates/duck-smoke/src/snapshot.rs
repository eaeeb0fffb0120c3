// Visual-regression snapshots
//
// Compares a captured element screenshot against a stored reference image.
// Missing references are written on first run so a fresh checkout can
// bootstrap its own baseline. On mismatch, the captured image and a pixel
// diff are written next to the reference for inspection.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{info, warn};

use crate::error::{Result, SmokeError};

/// Fraction of pixels allowed to differ before the comparison fails.
///
/// Browser antialiasing makes strict byte equality too brittle across
/// platforms; one percent keeps real regressions visible.
const MAX_MISMATCH_RATIO: f64 = 0.01;

/// Outcome of a snapshot comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Captured image matched the stored reference.
    Matched,
    /// No reference existed; the captured image is now the reference.
    Written,
    /// Update mode rewrote the reference with the captured image.
    Updated,
}

/// Compares `actual_png` against the reference `name` under `dir`.
///
/// With `update` set the reference is rewritten unconditionally. On
/// mismatch, `<stem>.actual.png` and `<stem>.diff.png` artifacts are left
/// under `dir` and an error naming the mismatch ratio is returned.
pub fn compare(dir: &Path, name: &str, actual_png: &[u8], update: bool) -> Result<SnapshotOutcome> {
    fs::create_dir_all(dir)?;
    let reference_path = dir.join(name);

    if update {
        fs::write(&reference_path, actual_png)?;
        info!(path = %reference_path.display(), "reference snapshot updated");
        return Ok(SnapshotOutcome::Updated);
    }

    if !reference_path.exists() {
        fs::write(&reference_path, actual_png)?;
        info!(path = %reference_path.display(), "reference snapshot written");
        return Ok(SnapshotOutcome::Written);
    }

    let expected_png = fs::read(&reference_path)?;
    if expected_png == actual_png {
        return Ok(SnapshotOutcome::Matched);
    }

    // Bytes differ; fall back to pixel comparison before failing.
    let expected = image::load_from_memory(&expected_png)?.to_rgba8();
    let actual = image::load_from_memory(actual_png)?.to_rgba8();

    if expected.dimensions() != actual.dimensions() {
        write_artifacts(dir, name, actual_png, None)?;
        return Err(SmokeError::Assertion(format!(
            "snapshot '{}' dimensions changed: reference {:?}, captured {:?}",
            name,
            expected.dimensions(),
            actual.dimensions()
        )));
    }

    let (diff, mismatched) = diff_image(&expected, &actual);
    let total = (expected.width() * expected.height()) as f64;
    let ratio = mismatched as f64 / total;

    if ratio <= MAX_MISMATCH_RATIO {
        return Ok(SnapshotOutcome::Matched);
    }

    warn!(name, ratio, "snapshot mismatch");
    write_artifacts(dir, name, actual_png, Some(&diff))?;
    Err(SmokeError::Assertion(format!(
        "snapshot '{}' differs from reference: {:.2}% of pixels changed (allowed {:.2}%)",
        name,
        ratio * 100.0,
        MAX_MISMATCH_RATIO * 100.0
    )))
}

/// Marks differing pixels red over a dimmed copy of the reference.
fn diff_image(expected: &RgbaImage, actual: &RgbaImage) -> (RgbaImage, u64) {
    let mut diff = RgbaImage::new(expected.width(), expected.height());
    let mut mismatched = 0u64;
    for (x, y, expected_pixel) in expected.enumerate_pixels() {
        let actual_pixel = actual.get_pixel(x, y);
        if expected_pixel == actual_pixel {
            let Rgba([r, g, b, _]) = *expected_pixel;
            diff.put_pixel(x, y, Rgba([r / 2, g / 2, b / 2, 255]));
        } else {
            mismatched += 1;
            diff.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }
    (diff, mismatched)
}

fn write_artifacts(
    dir: &Path,
    name: &str,
    actual_png: &[u8],
    diff: Option<&RgbaImage>,
) -> Result<()> {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    fs::write(artifact_path(dir, stem, "actual"), actual_png)?;
    if let Some(diff) = diff {
        diff.save_with_format(artifact_path(dir, stem, "diff"), ImageFormat::Png)?;
    }
    Ok(())
}

fn artifact_path(dir: &Path, stem: &str, kind: &str) -> PathBuf {
    dir.join(format!("{}.{}.png", stem, kind))
}
