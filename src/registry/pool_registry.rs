//! Thread-safe registry of pools.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::{EngineSettings, PoolConfig};
use crate::domain::{
    Amount, BasisPoints, DepositReceipt, Identity, PoolId, Shares, SwapOutcome, TokenSide,
    WithdrawReceipt,
};
use crate::error::{Result, SwapError};
use crate::pool::PoolState;
use crate::traits::{
    Clock, FromConfig, InMemoryPoolStore, LiquidityPool, PoolStore, SwapPool, SystemClock,
};

type PoolHandle = Arc<Mutex<PoolState>>;

/// Owns every pool and serialises operations per pool.
///
/// Each pool sits behind its own [`Mutex`]; the index of pools is behind
/// a [`RwLock`] that is only write-locked to add a pool. Operations on
/// distinct pools therefore run in parallel, while operations on one pool
/// are applied one at a time in `sequence` order.
///
/// Every mutation is computed on a copy, handed to the [`PoolStore`], and
/// only then published. If the store fails, the pool is left as it was.
///
/// # Thread Safety
///
/// `PoolRegistry` is `Send + Sync`; share it through an `Arc`.
///
/// # Example
///
/// ```rust
/// use token_swap::config::EngineSettings;
/// use token_swap::domain::{Amount, Identity, TokenSide};
/// use token_swap::registry::PoolRegistry;
///
/// let registry = PoolRegistry::in_memory(EngineSettings::default());
/// let admin = Identity::from_bytes([9u8; 32]);
/// let cfg = registry.settings().pool_config(
///     Identity::from_bytes([1u8; 32]),
///     Identity::from_bytes([2u8; 32]),
///     100,
///     admin,
///     admin,
///     1_000,
///     1_000,
/// );
///
/// let id = registry.initialize_pool(admin, &cfg).expect("pool created");
/// let out = registry
///     .swap(&id, TokenSide::A, Amount::new(100), Amount::new(90))
///     .expect("swap ok");
/// assert_eq!(out.amount_out(), Amount::new(91));
/// ```
pub struct PoolRegistry {
    pools: RwLock<HashMap<PoolId, PoolHandle>>,
    settings: EngineSettings,
    clock: Arc<dyn Clock>,
    store: Arc<dyn PoolStore>,
}

impl PoolRegistry {
    /// Creates an empty registry with the given collaborators.
    #[must_use]
    pub fn new(settings: EngineSettings, clock: Arc<dyn Clock>, store: Arc<dyn PoolStore>) -> Self {
        Self {
            pools: RwLock::new(HashMap::new()),
            settings,
            clock,
            store,
        }
    }

    /// An empty registry on the system clock with an in-memory store.
    #[must_use]
    pub fn in_memory(settings: EngineSettings) -> Self {
        Self::new(
            settings,
            Arc::new(SystemClock),
            Arc::new(InMemoryPoolStore::new()),
        )
    }

    /// Rebuilds a registry from every pool found in `store`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn restore(
        settings: EngineSettings,
        clock: Arc<dyn Clock>,
        store: Arc<dyn PoolStore>,
    ) -> Result<Self> {
        let mut pools = HashMap::new();
        for id in store.ids()? {
            if let Some(state) = store.load(&id)? {
                pools.insert(id, Arc::new(Mutex::new(state)));
            }
        }
        info!(pools = pools.len(), "restored pool registry");
        Ok(Self {
            pools: RwLock::new(pools),
            settings,
            clock,
            store,
        })
    }

    /// Engine defaults; use [`EngineSettings::pool_config`] to build
    /// configs that carry them.
    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Creates a pool and mints its initial shares to the admin.
    ///
    /// Checks run in this order: fee knobs, initial reserves, caller,
    /// token pair, uniqueness. A failed call creates nothing.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidFeeConfiguration`], [`SwapError::InvalidInitialReserves`]
    ///   from the config.
    /// - [`SwapError::Unauthorized`] if `caller` is not the config's admin.
    /// - [`SwapError::InvalidTokenPair`] for identical mints.
    /// - [`SwapError::PoolAlreadyExists`] if the pair already has a pool at
    ///   this fee.
    pub fn initialize_pool(&self, caller: Identity, config: &PoolConfig) -> Result<PoolId> {
        config.validate_parameters()?;
        if caller != config.admin() {
            warn!(caller = %caller.short(), "pool initialization rejected: caller is not the admin");
            return Err(SwapError::Unauthorized);
        }
        let state = PoolState::from_config(config, self.clock.now())?;
        let id = state.id();

        let mut pools = self.pools.write();
        if pools.contains_key(&id) {
            return Err(SwapError::PoolAlreadyExists);
        }
        self.store.store(&state)?;
        info!(
            pool = %id,
            reserve_a = %state.reserve_a(),
            reserve_b = %state.reserve_b(),
            shares = %state.share_supply(),
            "pool initialized"
        );
        pools.insert(id, Arc::new(Mutex::new(state)));
        Ok(id)
    }

    /// Swaps `amount_in` of `side_in` on pool `id`.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`], or any error from
    /// [`SwapPool::swap`].
    pub fn swap(
        &self,
        id: &PoolId,
        side_in: TokenSide,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        let outcome = self.mutate(id, |pool, _| pool.swap(side_in, amount_in, min_amount_out))?;
        debug!(pool = %id, %outcome, "swap committed");
        Ok(outcome)
    }

    /// Deposits into pool `id` on behalf of `depositor`.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`], or any error from
    /// [`LiquidityPool::deposit`].
    pub fn deposit(
        &self,
        id: &PoolId,
        depositor: Identity,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositReceipt> {
        let receipt =
            self.mutate(id, |pool, now| pool.deposit(depositor, amount_a, amount_b, now))?;
        debug!(pool = %id, depositor = %depositor.short(), %receipt, "deposit committed");
        Ok(receipt)
    }

    /// Withdraws `shares` from `owner`'s position in pool `id`.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`], or any error from
    /// [`LiquidityPool::withdraw`].
    pub fn withdraw(&self, id: &PoolId, owner: Identity, shares: Shares) -> Result<WithdrawReceipt> {
        let receipt = self.mutate(id, |pool, now| pool.withdraw(owner, shares, now))?;
        debug!(pool = %id, owner = %owner.short(), %receipt, "withdraw committed");
        Ok(receipt)
    }

    /// Changes the swap fee of pool `id`.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`], [`SwapError::Unauthorized`] or
    /// [`SwapError::InvalidFeeConfiguration`].
    pub fn update_fee(&self, id: &PoolId, caller: Identity, new_fee_bps: u16) -> Result<BasisPoints> {
        let fee = self
            .mutate(id, |pool, _| pool.update_fee(caller, new_fee_bps))
            .map_err(|e| Self::note_rejection(id, caller, "fee update", e))?;
        info!(pool = %id, %fee, "fee updated");
        Ok(fee)
    }

    /// Pays out the pending admin fees of pool `id`.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`], [`SwapError::Unauthorized`] or
    /// [`SwapError::InsufficientLiquidity`].
    pub fn collect_admin_fees(&self, id: &PoolId, caller: Identity) -> Result<(Amount, Amount)> {
        let (fee_a, fee_b) = self
            .mutate(id, |pool, _| pool.collect_admin_fees(caller))
            .map_err(|e| Self::note_rejection(id, caller, "admin fee collection", e))?;
        info!(pool = %id, %fee_a, %fee_b, "admin fees collected");
        Ok((fee_a, fee_b))
    }

    /// Prices a swap on pool `id` without committing it.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`], or any error from [`SwapPool::quote`].
    pub fn quote(&self, id: &PoolId, side_in: TokenSide, amount_in: Amount) -> Result<SwapOutcome> {
        let pool = self.handle(id)?;
        let state = pool.lock();
        state.quote(side_in, amount_in)
    }

    /// A consistent copy of pool `id`.
    ///
    /// # Errors
    ///
    /// [`SwapError::PoolNotFound`].
    pub fn snapshot(&self, id: &PoolId) -> Result<PoolState> {
        let pool = self.handle(id)?;
        let state = pool.lock().clone();
        Ok(state)
    }

    /// Ids of every registered pool, in no particular order.
    #[must_use]
    pub fn pool_ids(&self) -> Vec<PoolId> {
        self.pools.read().keys().copied().collect()
    }

    fn handle(&self, id: &PoolId) -> Result<PoolHandle> {
        self.pools
            .read()
            .get(id)
            .cloned()
            .ok_or(SwapError::PoolNotFound)
    }

    /// Runs `op` on a copy of the pool under its lock, persists the copy if
    /// it changed, then publishes it.
    fn mutate<T>(
        &self,
        id: &PoolId,
        op: impl FnOnce(&mut PoolState, i64) -> Result<T>,
    ) -> Result<T> {
        let pool = self.handle(id)?;
        let mut current = pool.lock();
        let mut next = current.clone();
        let out = op(&mut next, self.clock.now())?;
        if next.sequence() != current.sequence() {
            self.store.store(&next)?;
            *current = next;
        }
        Ok(out)
    }

    fn note_rejection(id: &PoolId, caller: Identity, action: &str, err: SwapError) -> SwapError {
        if err == SwapError::Unauthorized {
            warn!(pool = %id, caller = %caller.short(), "{action} rejected: unauthorized");
        }
        err
    }
}

impl fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("pools", &self.pools.read().len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
