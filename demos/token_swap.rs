//! Token swap walkthrough.
//!
//! Initializes a pool, trades against it, adds and removes liquidity,
//! and sweeps the admin fees. Set `RUST_LOG=token_swap=debug` to see the
//! registry's events.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=token_swap=debug cargo run --example token_swap
//! ```

use std::sync::Arc;

use token_swap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Token Swap (x · y = k) ===\n");

    // ── 1. Identities and engine settings ───────────────────────────────
    let usdc: Identity = "0101010101010101010101010101010101010101010101010101010101010101".parse()?;
    let wsol = Identity::from_bytes([2u8; 32]);
    let admin = Identity::from_bytes([9u8; 32]);
    let treasury = Identity::from_bytes([8u8; 32]);
    let lp = Identity::from_bytes([5u8; 32]);

    let settings = EngineSettings::from_toml_str("admin_fee_share_bps = 5000\n")?;
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let registry = PoolRegistry::new(settings, clock.clone(), Arc::new(InMemoryPoolStore::new()));

    // ── 2. Initialize a 1% pool ─────────────────────────────────────────
    let cfg = registry
        .settings()
        .pool_config(usdc, wsol, 100, admin, treasury, 1_000, 1_000);
    let id = registry.initialize_pool(admin, &cfg)?;
    let pool = registry.snapshot(&id)?;
    println!("Pool {id}");
    println!("  Reserves:    {} / {}", pool.reserve_a(), pool.reserve_b());
    println!("  Shares:      {}", pool.share_supply());

    // ── 3. Swap 100 A for B ─────────────────────────────────────────────
    let quote = registry.quote(&id, TokenSide::A, Amount::new(100))?;
    println!("\nQuote: {quote}");
    let out = registry.swap(&id, TokenSide::A, Amount::new(100), quote.amount_out())?;
    println!("Swap:  {out}");

    // ── 4. Slippage protection ──────────────────────────────────────────
    match registry.swap(&id, TokenSide::B, Amount::new(50), Amount::new(1_000)) {
        Err(e) => println!("\nRejected as expected: {e}"),
        Ok(o) => println!("\nUnexpected fill: {o}"),
    }

    // ── 5. Provide liquidity ────────────────────────────────────────────
    let pool = registry.snapshot(&id)?;
    let deposit = registry.deposit(&id, lp, pool.reserve_a(), pool.reserve_b())?;
    println!("\n{deposit}");

    if let Err(e) = registry.withdraw(&id, lp, deposit.shares_issued) {
        println!("Withdraw right away: {e}");
    }
    clock.advance(i64::try_from(registry.settings().withdrawal_lock_secs)?);

    // ── 6. More trading, then exit ──────────────────────────────────────
    for i in 0..5u64 {
        let side = if i % 2 == 0 { TokenSide::B } else { TokenSide::A };
        registry.swap(&id, side, Amount::new(400 + 10 * i), Amount::ZERO)?;
    }
    let (fee_a, fee_b) = registry.collect_admin_fees(&id, treasury)?;
    println!("\nAdmin fees collected: {fee_a} A, {fee_b} B");

    let withdraw = registry.withdraw(&id, lp, deposit.shares_issued)?;
    println!("{withdraw}");

    let pool = registry.snapshot(&id)?;
    let (num, den) = pool.spot_price(TokenSide::A)?;
    println!("\nFinal reserves: {} / {}", pool.reserve_a(), pool.reserve_b());
    println!("Spot price:     {num}/{den} B per A");
    println!("Sequence:       {}", pool.sequence());

    println!("\n=== Done ===");
    Ok(())
}
