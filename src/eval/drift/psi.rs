//! Population Stability Index.
//!
//! PSI = Σ (c − r) · ln(c / r) over bins (numeric) or categories (categorical), where
//! `r` and `c` are the reference and current proportions. Every term is non-negative.
//! Rule of thumb: < 0.1 no significant shift, 0.1–0.2 moderate, ≥ 0.2 significant.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use crate::data::Value;

/// Lower bound applied to every proportion before taking the log ratio
pub const PROPORTION_FLOOR: f64 = 1e-6;

/// How numeric bin edges were chosen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinStrategy {
    /// Reference quantiles, roughly equal reference mass per bin
    Quantile,
    /// Equal-width bins over the reference range
    EqualWidth,
}

/// Numeric bin edges anchored on the reference sample
#[derive(Clone, Debug, PartialEq)]
pub struct BinEdges {
    pub edges: Vec<f64>,
    pub strategy: BinStrategy,
}

/// Linear-interpolated quantile of an ascending, non-empty sample.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let h = last as f64 * p.clamp(0.0, 1.0);
    let lo = (h.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Distinct reference quantiles at `i / bins` for `i = 0..=bins`.
pub fn quantile_cut_points(sorted: &[f64], bins: usize) -> Vec<f64> {
    let bins = bins.max(1);
    let mut cuts: Vec<f64> = (0..=bins)
        .map(|i| quantile_sorted(sorted, i as f64 / bins as f64))
        .collect();
    cuts.sort_by(f64::total_cmp);
    cuts.dedup();
    cuts
}

/// `bins + 1` equally spaced edges from `min` to `max`; the last edge is exactly `max`.
pub fn equal_width_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let bins = bins.max(1);
    let step = (max - min) / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { max } else { min + i as f64 * step })
        .collect()
}

/// Choose bin edges for an ascending, non-empty reference sample.
///
/// Quantile cut points are used unless fewer than 3 distinct ones remain (a heavily
/// duplicated reference), in which case equal-width bins over `[min, max]` are used.
pub fn bin_edges(sorted_reference: &[f64], bins: usize) -> BinEdges {
    let cuts = quantile_cut_points(sorted_reference, bins);
    if cuts.len() < 3 {
        let min = sorted_reference[0];
        let max = sorted_reference[sorted_reference.len() - 1];
        BinEdges { edges: equal_width_edges(min, max, bins), strategy: BinStrategy::EqualWidth }
    } else {
        BinEdges { edges: cuts, strategy: BinStrategy::Quantile }
    }
}

/// Count values per bin.
///
/// Bin `i` is `[e_i, e_{i+1})` and the last bin is closed on the right. Values outside
/// `[e_0, e_k]` are not counted. With repeated edges every value equal to the repeated
/// edge lands in the last bin that ends on it.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let last = edges.len() - 1;
    let cumulative: Vec<usize> = edges
        .iter()
        .enumerate()
        .map(|(i, &edge)| {
            if i == last {
                sorted.partition_point(|&v| v <= edge)
            } else {
                sorted.partition_point(|&v| v < edge)
            }
        })
        .collect();

    cumulative.windows(2).map(|w| w[1].saturating_sub(w[0])).collect()
}

/// Counts to floored proportions; an all-zero histogram normalizes by 1.
pub fn floored_proportions(counts: &[usize]) -> Vec<f64> {
    let total = counts.iter().sum::<usize>().max(1) as f64;
    counts
        .iter()
        .map(|&c| (c as f64 / total).max(PROPORTION_FLOOR))
        .collect()
}

/// Σ (c − r) · ln(c / r) over paired proportions.
pub fn psi_from_proportions(reference: &[f64], current: &[f64]) -> f64 {
    reference
        .iter()
        .zip(current)
        .map(|(&r, &c)| (c - r) * (c / r).ln())
        .sum()
}

/// Numeric PSI over two samples; non-finite values are ignored.
///
/// Returns `None` when either sample has no finite value.
pub fn numeric_psi(reference: &[f64], current: &[f64], bins: usize) -> Option<f64> {
    let mut reference: Vec<f64> = reference.iter().copied().filter(|v| v.is_finite()).collect();
    let current: Vec<f64> = current.iter().copied().filter(|v| v.is_finite()).collect();
    if reference.is_empty() || current.is_empty() {
        return None;
    }
    reference.sort_by(f64::total_cmp);

    let BinEdges { edges, .. } = bin_edges(&reference, bins);
    let ref_props = floored_proportions(&histogram(&reference, &edges));
    let cur_props = floored_proportions(&histogram(&current, &edges));
    Some(psi_from_proportions(&ref_props, &cur_props))
}

/// Numeric PSI over two columns; cells that do not coerce to a number are dropped.
pub fn numeric_column_psi(reference: &[Value], current: &[Value], bins: usize) -> Option<f64> {
    let reference: Vec<f64> = reference.iter().filter_map(Value::as_number).collect();
    let current: Vec<f64> = current.iter().filter_map(Value::as_number).collect();
    numeric_psi(&reference, &current, bins)
}

/// Categorical PSI over two samples of labels.
///
/// Frequencies are normalized by each sample's length; the categories compared are the
/// union of both sides, and a category absent from one side contributes via the floor.
pub fn categorical_psi<S: AsRef<str>>(reference: &[S], current: &[S]) -> f64 {
    let ref_freq = frequencies(reference);
    let cur_freq = frequencies(current);
    let categories: BTreeSet<&str> = ref_freq.keys().chain(cur_freq.keys()).copied().collect();

    categories
        .into_iter()
        .map(|cat| {
            let r = ref_freq.get(cat).copied().unwrap_or(0.0).max(PROPORTION_FLOOR);
            let c = cur_freq.get(cat).copied().unwrap_or(0.0).max(PROPORTION_FLOOR);
            (c - r) * (c / r).ln()
        })
        .sum()
}

/// Categorical PSI over two columns; missing cells count as the `MISSING` category.
pub fn categorical_column_psi(reference: &[Value], current: &[Value]) -> f64 {
    let reference: Vec<Cow<'_, str>> = reference.iter().map(Value::category_label).collect();
    let current: Vec<Cow<'_, str>> = current.iter().map(Value::category_label).collect();
    categorical_psi(&reference, &current)
}

fn frequencies<S: AsRef<str>>(sample: &[S]) -> BTreeMap<&str, f64> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in sample {
        *counts.entry(label.as_ref()).or_insert(0) += 1;
    }
    let n = sample.len().max(1) as f64;
    counts.into_iter().map(|(k, c)| (k, c as f64 / n)).collect()
}
