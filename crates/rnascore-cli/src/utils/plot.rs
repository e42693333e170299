use crate::error::{CliError, Result};
use plotters::prelude::*;
use rnascore_core::core::models::nucleotide::NucleotidePairType;
use rnascore_core::core::potential::bins::MAX_DISTANCE;
use rnascore_core::core::potential::energy::{ProfileSet, PseudoEnergyProfile};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

const CHART_SIZE: (u32, u32) = (800, 500);
const CHART_EXTENSION: &str = "svg";
const MIN_ENERGY_PADDING: f64 = 0.5;

pub fn chart_path(dir: &Path, pair: NucleotidePairType) -> PathBuf {
    dir.join(format!("{}.{}", pair.symbol(), CHART_EXTENSION))
}

/// Vertical axis spanning every finite energy of a profile.
///
/// A flat profile (e.g. a pair type that was never observed) still gets a
/// non-empty range.
pub fn energy_range(energies: &[f64]) -> Range<f64> {
    let (min, max) = energies
        .iter()
        .filter(|e| e.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
            (lo.min(e), hi.max(e))
        });
    if min > max {
        return -MIN_ENERGY_PADDING..MIN_ENERGY_PADDING;
    }
    let padding = ((max - min) * 0.05).max(MIN_ENERGY_PADDING);
    (min - padding)..(max + padding)
}

/// Draws the interaction profile of one pair type as an SVG line chart.
pub fn draw_profile(
    path: &Path,
    pair: NucleotidePairType,
    profile: &PseudoEnergyProfile,
) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(pair.symbol(), ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..MAX_DISTANCE, energy_range(profile.energies()))?;

    chart
        .configure_mesh()
        .x_desc("Distance in Å")
        .y_desc("Pseudo-Energy")
        .draw()?;

    chart.draw_series(LineSeries::new(
        profile
            .energies()
            .iter()
            .enumerate()
            .map(|(bin, &energy)| (bin as f64, energy)),
        Palette99::pick(pair.index()).stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// Writes one chart per profile into `dir` and returns the written paths.
pub fn draw_profiles(profiles: &ProfileSet, dir: &Path) -> Result<Vec<PathBuf>> {
    profiles
        .iter()
        .map(|(pair, profile)| {
            let path = chart_path(dir, pair);
            draw_profile(&path, pair, profile).map_err(|source| CliError::Plot {
                path: path.clone(),
                source,
            })?;
            debug!(pair = %pair, "Wrote interaction profile chart to {:?}.", path);
            Ok(path)
        })
        .collect()
}
