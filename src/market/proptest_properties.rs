//! Property-based tests for the market invariants.
//!
//! 1. **Mint/redeem round trip**: redeeming what was minted never
//!    releases more liquidity than was minted, and loses almost nothing.
//! 2. **Swap round trip**: swapping a leg there and back never returns
//!    more than was put in.
//! 3. **Exact-in/exact-out consistency**: quoting the output of an
//!    exact-in swap as exact-out never asks for more input, and feeding
//!    that input back exact-in delivers at least the quoted output.
//! 4. **LTV**: non-decreasing in price, and `sqrt_price_from_ltv` reads
//!    back its target.
//! 5. **Max debt**: non-decreasing in liquidity; any price in the band
//!    carries at most the maximum debt.

use ethnum::U256;
use proptest::prelude::*;

use super::{
    compute_ltv, compute_max_debt, compute_mint, compute_position, compute_redeem, compute_swap,
};
use crate::band::sqrt_price_from_ltv;
use crate::domain::{
    Amount, BasisPoints, EdgeBand, Leg, Liquidity, Rounding, SqrtPrice, SwapSpec,
};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn price(num: u128, den: u128) -> SqrtPrice {
    let Ok(p) = SqrtPrice::from_q96_ratio(num, den) else {
        panic!("valid price");
    };
    p
}

fn reference_band() -> EdgeBand {
    let Ok(b) = EdgeBand::new(price(91, 100), price(120, 100)) else {
        panic!("valid band");
    };
    b
}

/// A price `per_mille / 1000` of the way across the band.
fn price_in_band(band: &EdgeBand, per_mille: u32) -> SqrtPrice {
    let offset = band.width() * U256::new(u128::from(per_mille)) / U256::new(1000);
    let Ok(p) = SqrtPrice::new(band.edge_low().get() + offset) else {
        panic!("inside the band");
    };
    p
}

fn band_strategy() -> impl Strategy<Value = EdgeBand> {
    (50u128..=150, 1u128..=200).prop_map(|(low, span)| {
        let Ok(b) = EdgeBand::new(price(low, 100), price(low + span, 100)) else {
            panic!("valid band");
        };
        b
    })
}

fn liquidity_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000_000
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mint_redeem_never_gains(
        band in band_strategy(),
        resting in prop_oneof![Just(0u128), liquidity_strategy()],
        minted in liquidity_strategy(),
        per_mille in 0u32..=1000,
    ) {
        let x = price_in_band(&band, per_mille);
        let Ok(position) = compute_mint(x, &band, Liquidity::new(minted)) else {
            return Ok(());
        };
        let pool = Liquidity::new(resting + minted);
        let Ok(out) = compute_redeem(pool, x, &band, position.debt(), position.leverage()) else {
            panic!("redeeming a fresh mint must succeed");
        };
        let released = out.liquidity_out().get();
        prop_assert!(
            released <= minted,
            "redeem released {} for a mint of {}",
            released, minted
        );
        // at most 1 part in 1e5 lost above the materiality threshold
        prop_assert!(
            (minted - released) * 100_000 <= minted,
            "shortfall {} too large for {}",
            minted - released, minted
        );
    }

    #[test]
    fn prop_swap_round_trip_never_gains(
        band in band_strategy(),
        l in liquidity_strategy(),
        per_mille in 0u32..=1000,
        fraction in 1u128..=1000,
        debt_first in any::<bool>(),
    ) {
        let x = price_in_band(&band, per_mille);
        let (first, second) = if debt_first {
            (Leg::Debt, Leg::Leverage)
        } else {
            (Leg::Leverage, Leg::Debt)
        };
        let amount_in = (l / 10_000 * fraction).max(1);
        let Ok(spec) = SwapSpec::exact_in(Amount::new(amount_in)) else {
            return Ok(());
        };
        let Ok(there) = compute_swap(Liquidity::new(l), x, &band, first, spec) else {
            return Ok(());
        };
        let Ok(spec_back) = SwapSpec::exact_in(there.amount_calculated()) else {
            return Ok(());
        };
        let Ok(back) = compute_swap(Liquidity::new(l), there.next_sqrt_price(), &band, second, spec_back)
        else {
            return Ok(());
        };
        prop_assert!(
            back.amount_calculated().get() <= amount_in,
            "round trip returned {} for {}",
            back.amount_calculated().get(), amount_in
        );
    }

    #[test]
    fn prop_exact_in_exact_out_consistent(
        band in band_strategy(),
        l in liquidity_strategy(),
        per_mille in 0u32..=1000,
        fraction in 1u128..=1000,
        debt_in in any::<bool>(),
    ) {
        let x = price_in_band(&band, per_mille);
        let liquidity = Liquidity::new(l);
        let (input_leg, output_leg) = if debt_in {
            (Leg::Debt, Leg::Leverage)
        } else {
            (Leg::Leverage, Leg::Debt)
        };
        let amount_in = (l / 10_000 * fraction).max(1);
        let Ok(spec) = SwapSpec::exact_in(Amount::new(amount_in)) else {
            return Ok(());
        };
        let Ok(forward) = compute_swap(liquidity, x, &band, input_leg, spec) else {
            return Ok(());
        };

        let Ok(spec_out) = SwapSpec::exact_out(forward.amount_calculated()) else {
            panic!("exact-in output is non-zero");
        };
        let Ok(quote) = compute_swap(liquidity, x, &band, output_leg, spec_out) else {
            panic!("an output reachable exact-in must be quotable exact-out");
        };
        prop_assert!(quote.amount_calculated().get() <= amount_in);

        let Ok(spec_again) = SwapSpec::exact_in(quote.amount_calculated()) else {
            panic!("quoted input is non-zero");
        };
        let Ok(again) = compute_swap(liquidity, x, &band, input_leg, spec_again) else {
            panic!("quoted input stays in band");
        };
        prop_assert!(again.amount_calculated() >= forward.amount_calculated());
    }

    #[test]
    fn prop_ltv_round_trip(band in band_strategy(), t in 0u32..=10_000) {
        let target = BasisPoints::new(t);
        let Ok(x) = sqrt_price_from_ltv(&band, target) else {
            panic!("expected Ok");
        };
        prop_assert!(band.contains(x));
        prop_assert_eq!(compute_ltv(&band, x), target);
    }

    #[test]
    fn prop_ltv_non_decreasing(
        band in band_strategy(),
        p in 0u32..=1000,
        q in 0u32..=1000,
    ) {
        let (lo, hi) = (p.min(q), p.max(q));
        prop_assert!(
            compute_ltv(&band, price_in_band(&band, lo)) <= compute_ltv(&band, price_in_band(&band, hi))
        );
    }

    #[test]
    fn prop_max_debt_monotone(
        band in band_strategy(),
        a in liquidity_strategy(),
        b in liquidity_strategy(),
        per_mille in 0u32..=1000,
    ) {
        let (lo, hi) = (a.min(b), a.max(b));
        let (Ok(small), Ok(large)) = (
            compute_max_debt(&band, Liquidity::new(lo)),
            compute_max_debt(&band, Liquidity::new(hi)),
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(small <= large);

        let x = price_in_band(&band, per_mille);
        let Ok(position) = compute_position(x, &band, Liquidity::new(lo), Rounding::Down) else {
            panic!("expected Ok");
        };
        prop_assert!(position.debt() <= small);
    }
}

// ---------------------------------------------------------------------------
// Boundary cases
// ---------------------------------------------------------------------------

#[test]
fn redeem_at_each_edge_round_trips() {
    let band = reference_band();
    let l = Liquidity::new(1_000_000_000_000_000_000);
    for x in [band.edge_low(), band.edge_high()] {
        let Ok(position) = compute_mint(x, &band, l) else {
            panic!("expected Ok");
        };
        let Ok(out) = compute_redeem(l, x, &band, position.debt(), position.leverage()) else {
            panic!("expected Ok");
        };
        assert!(out.liquidity_out() <= l);
        assert!(band.contains(out.next_sqrt_price()));
    }
}
