//! Integration tests exercising the public API end to end.
//!
//! These tests follow a market from configuration through deposit, mint,
//! swap, and redeem, and check the concrete values the curve produces at
//! the reference band `[0.91, 1.2]`.

#![allow(clippy::panic)]

use ethnum::U256;
use split_curve::band::{edge_prices_from_ltv_and_width, sqrt_price_from_ltv};
use split_curve::config::{BandConfig, MarketConfig};
use split_curve::domain::{
    Amount, BasisPoints, EdgeBand, Leg, Liquidity, Rounding, SqrtPrice, SwapSpec,
};
use split_curve::error::CurveError;
use split_curve::market::{
    collateral_for_liquidity, compute_ltv, compute_mint, compute_position, compute_redeem,
    liquidity_for_collateral, target_ratio, SplitMarket,
};
use split_curve::math::{
    amount_delta_0, mul512, next_sqrt_price_from_amount_0, sqrt512, sub512x512, Q96,
};
use split_curve::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const E18: u128 = 1_000_000_000_000_000_000;

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

fn reference_market(liquidity: Liquidity) -> SplitMarket {
    let cfg = MarketConfig::Edges {
        band: reference_band(),
        liquidity,
    };
    let Ok(m) = SplitMarket::from_config(&cfg) else {
        panic!("valid market");
    };
    m
}

fn raw(v: u128) -> SqrtPrice {
    let Ok(p) = SqrtPrice::new(U256::new(v)) else {
        panic!("valid price");
    };
    p
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[test]
fn deposit_mint_swap_redeem_lifecycle() {
    let band = reference_band();

    // 1. Deposit 1e18 collateral
    let collateral = Amount::new(E18);
    let Ok(ratio) = target_ratio(&band) else {
        panic!("expected Ok");
    };
    assert_eq!(ratio, U256::new(273_200_560_394_014_957_219_117_070_117));
    let Ok(l) = liquidity_for_collateral(&band, collateral) else {
        panic!("expected Ok");
    };
    assert_eq!(l, Liquidity::new(3_448_275_862_068_965_517));
    let Ok(backing) = collateral_for_liquidity(&band, l, Rounding::Up) else {
        panic!("expected Ok");
    };
    assert!(backing <= collateral);

    // 2. Mint both legs at par
    let Ok(minted) = compute_mint(SqrtPrice::PAR, &band, l) else {
        panic!("expected Ok");
    };
    assert_eq!(minted.debt(), Amount::new(341_038_272_072_754_831));
    assert_eq!(minted.leverage(), Amount::new(689_655_172_413_793_103));
    let market = reference_market(l);

    // 3. Sell 1e15 debt for leverage
    let Ok(spec) = SwapSpec::exact_in(Amount::new(1_000_000_000_000_000)) else {
        panic!("non-zero");
    };
    let Ok(swapped) = market.preview_swap(SqrtPrice::PAR, Leg::Debt, spec) else {
        panic!("expected Ok");
    };
    assert_eq!(swapped.amount_calculated(), Amount::new(999_710_084_075_618));
    assert_eq!(
        swapped.next_sqrt_price(),
        raw(79_205_193_008_291_932_932_991_774_856)
    );
    assert_eq!(market.ltv(swapped.next_sqrt_price()), BasisPoints::new(3093));

    // 4. Redeem everything now held at the new price
    let (Some(debt_held), Some(leverage_held)) = (
        minted.debt().checked_sub(&Amount::new(1_000_000_000_000_000)),
        minted.leverage().checked_add(&swapped.amount_calculated()),
    ) else {
        panic!("fits");
    };
    let Ok(redeemed) = market.preview_redeem(swapped.next_sqrt_price(), debt_held, leverage_held)
    else {
        panic!("expected Ok");
    };
    assert_eq!(redeemed.liquidity_out(), Liquidity::new(3_448_275_862_068_965_509));
    assert!(redeemed.liquidity_out() <= l);
}

#[test]
fn market_from_ltv_target_reads_target_at_par() {
    for t in [0u32, 1, 2500, 5000, 7500, 9999, 10_000] {
        let Ok(band) = BandConfig::new(BasisPoints::new(t), price(12, 10).get()) else {
            panic!("expected Ok");
        };
        let cfg = MarketConfig::TargetLtv {
            band,
            liquidity: Liquidity::new(E18),
        };
        let Ok(market) = SplitMarket::from_config(&cfg) else {
            panic!("expected Ok");
        };
        assert_eq!(market.ltv(SqrtPrice::PAR), BasisPoints::new(t));
    }
}

#[test]
fn state_reconstruction_from_minted_debt() {
    let market = reference_market(Liquidity::new(E18));
    let Ok(position) = market.position(SqrtPrice::PAR) else {
        panic!("expected Ok");
    };
    let Ok((leverage, x)) = market.state_from_debt(position.debt()) else {
        panic!("expected Ok");
    };
    assert!(x <= SqrtPrice::PAR);
    assert!(leverage >= position.leverage());
    let Ok(again) = compute_position(x, market.band(), market.liquidity(), Rounding::Down) else {
        panic!("expected Ok");
    };
    assert!(again.debt() >= position.debt());
}

#[test]
fn max_debt_and_undercollateralization() {
    let market = reference_market(Liquidity::new(E18));
    let Ok(max) = market.max_debt() else {
        panic!("expected Ok");
    };
    assert_eq!(max, Amount::new(265_567_765_567_765_567));
    assert_eq!(market.is_undercollateralized(max), Ok(false));
    assert_eq!(
        market.is_undercollateralized(Amount::new(max.get() + 1)),
        Ok(true)
    );
    assert!(matches!(
        market.state_from_debt(Amount::new(max.get() + 1_000_000)),
        Err(CurveError::PriceOutOfBand(_))
    ));
}

#[test]
fn redeeming_more_than_outstanding_fails_without_state() {
    let market = reference_market(Liquidity::new(E18));
    let r = market.preview_redeem(SqrtPrice::PAR, Amount::new(E18), Amount::ZERO);
    assert!(matches!(r, Err(CurveError::ImpossibleAmount(_))));
    let r = compute_redeem(
        Liquidity::new(E18),
        SqrtPrice::PAR,
        &reference_band(),
        Amount::ZERO,
        Amount::ZERO,
    );
    assert!(matches!(r, Err(CurveError::InsufficientAmount(_))));
}

// ---------------------------------------------------------------------------
// Curve and arithmetic reference values
// ---------------------------------------------------------------------------

#[test]
fn amount_delta_0_reference() {
    let Ok(v) = amount_delta_0(SqrtPrice::PAR, price(11, 10), Liquidity::new(E18), Rounding::Up)
    else {
        panic!("expected Ok");
    };
    assert_eq!(v, U256::new(90_909_090_909_090_910));
}

#[test]
fn next_price_ceiling_is_floor_plus_one() {
    let l = Liquidity::new(E18);
    let amount = U256::new(E18 / 7);
    let (Ok(up), Ok(down)) = (
        next_sqrt_price_from_amount_0(SqrtPrice::PAR, l, amount, true, Rounding::Up),
        next_sqrt_price_from_amount_0(SqrtPrice::PAR, l, amount, true, Rounding::Down),
    ) else {
        panic!("expected Ok");
    };
    assert_eq!(up.get(), down.get() + U256::ONE);
}

#[test]
fn wide_arithmetic_public_api() {
    let (hi, lo) = mul512(Q96 << 100u32, Q96 << 100u32);
    assert_eq!(sqrt512(lo, hi), Q96 << 100u32);
    let (r0, r1) = sub512x512(lo, hi, lo, hi);
    assert_eq!((r0, r1), (U256::ZERO, U256::ZERO));
}

#[test]
fn ltv_placement_round_trip() {
    let band = reference_band();
    for t in [0u32, 1, 3103, 5000, 9999, 10_000] {
        let Ok(x) = sqrt_price_from_ltv(&band, BasisPoints::new(t)) else {
            panic!("expected Ok");
        };
        assert_eq!(compute_ltv(&band, x), BasisPoints::new(t));
    }
    assert!(matches!(
        edge_prices_from_ltv_and_width(BasisPoints::new(5000), Q96),
        Err(CurveError::InvalidBand(_))
    ));
}

#[test]
fn errors_render_context() {
    let Ok(spec) = SwapSpec::exact_in(Amount::new(E18)) else {
        panic!("non-zero");
    };
    let Err(err) = reference_market(Liquidity::new(E18)).preview_swap(SqrtPrice::PAR, Leg::Debt, spec)
    else {
        panic!("expected an out-of-band swap");
    };
    assert!(err.to_string().starts_with("price out of band"));
}

#[cfg(feature = "fixed-point")]
#[test]
fn fixed_point_view_of_par() {
    use split_curve::math::{sqrt_price_from_fixed, sqrt_price_to_fixed};

    let view = sqrt_price_to_fixed(SqrtPrice::PAR);
    assert_eq!(view.to_num::<u64>(), 1);
    assert_eq!(sqrt_price_from_fixed(view), Ok(SqrtPrice::PAR));
}
