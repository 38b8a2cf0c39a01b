//! Tiers each work chain's minutes by cumulative position and Sabbath
//! membership, carrying the running counter across a work-day boundary when
//! one chain ends and the next begins exactly at 08:00.

use crate::constants::{OVERTIME_125_LIMIT, REGULAR_HOURS_LIMIT};
use crate::daily_map::RawChain;
use crate::models::day::{Chain, ChainContribution, WageTier};
use crate::models::sabbath::SabbathCache;
use crate::time_model::{sabbath_window, split_by_sabbath};

/// Tiers a sequence of raw chains, in chronological order, into their final
/// per-tier minute contributions.
///
/// Chains must be given in the order their work-days occur; the cumulative
/// minute counter resets to zero at the start of each chain unless the
/// previous chain ended exactly at a work-day's 08:00 boundary and this one
/// starts exactly at one too, in which case the counter carries over.
pub fn compute_chains(raw_chains: &[RawChain], sabbath: &SabbathCache) -> Vec<Chain> {
    let mut out = Vec::with_capacity(raw_chains.len());
    let mut carry = 0i64;
    let mut prev_ended_at_boundary = false;

    for raw in raw_chains {
        let mut m = if prev_ended_at_boundary && raw.starts_at_boundary {
            carry
        } else {
            0
        };

        let (entry_abs, exit_abs) = sabbath_window(raw.work_day, sabbath);
        let mut contributions: Vec<ChainContribution> = Vec::new();

        for &(lo, hi) in &raw.pieces {
            for (sub_lo, sub_hi, is_sabbath) in split_by_sabbath(lo, hi, entry_abs, exit_abs) {
                let length = sub_hi - sub_lo;
                if length <= 0 {
                    continue;
                }
                for (tier, minutes) in tier_slices(m, length, is_sabbath) {
                    push_or_merge(&mut contributions, tier, minutes);
                    m += minutes;
                }
            }
        }

        carry = m;
        prev_ended_at_boundary = raw.ends_at_boundary;
        out.push(Chain {
            work_day: raw.work_day,
            contributions,
        });
    }

    out
}

fn push_or_merge(contributions: &mut Vec<ChainContribution>, tier: WageTier, minutes: i64) {
    if let Some(last) = contributions.last_mut() {
        if last.tier == tier {
            last.minutes += minutes;
            return;
        }
    }
    contributions.push(ChainContribution { tier, minutes });
}

/// Splits a `length`-minute slice starting at cumulative position `m_start`
/// into the tier bands it crosses.
fn tier_slices(m_start: i64, length: i64, is_sabbath: bool) -> Vec<(WageTier, i64)> {
    let tiers = if is_sabbath {
        [WageTier::Calc150Shabbat, WageTier::Calc175, WageTier::Calc200]
    } else {
        [WageTier::Calc100, WageTier::Calc125, WageTier::Calc150Overtime]
    };

    let end = m_start + length;
    let mut pos = m_start;
    let mut out = Vec::new();

    while pos < end {
        let (tier_idx, next_bound) = if pos < REGULAR_HOURS_LIMIT {
            (0, REGULAR_HOURS_LIMIT)
        } else if pos < OVERTIME_125_LIMIT {
            (1, OVERTIME_125_LIMIT)
        } else {
            (2, i64::MAX)
        };
        let slice_end = next_bound.min(end);
        out.push((tiers[tier_idx], slice_end - pos));
        pos = slice_end;
    }

    out
}

/// Splits `calc150_shabbat` minutes into their pension-relevant 100%/50%
/// components: `calc150_shabbat_100 = round_half_even(calc150_shabbat /
/// 1.5)`, with the remainder assigned to `calc150_shabbat_50`.
pub fn split_shabbat_pension(calc150_shabbat: i64) -> (i64, i64) {
    let divided = calc150_shabbat as f64 / 1.5;
    let calc150_shabbat_100 = round_half_even(divided);
    let calc150_shabbat_50 = calc150_shabbat - calc150_shabbat_100;
    (calc150_shabbat_100, calc150_shabbat_50)
}

fn round_half_even(value: f64) -> i64 {
    let floor = value.floor();
    let diff = value - floor;
    let floor_i = floor as i64;
    if diff < 0.5 {
        floor_i
    } else if diff > 0.5 {
        floor_i + 1
    } else if floor_i % 2 == 0 {
        floor_i
    } else {
        floor_i + 1
    }
}
